//! Session cache for the last analysis and its job description.
//!
//! Opaque get/set/clear keyed by session id. Only the latest analysis per
//! session is kept; there is no history.

pub mod memory;
pub mod redis_store;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::analysis::CachedAnalysis;

pub use self::memory::MemoryStore;
pub use self::redis_store::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Cached analysis could not be encoded: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn get(&self, session_id: Uuid) -> Result<Option<CachedAnalysis>, StoreError>;

    /// Replaces whatever the session held before.
    async fn set(&self, session_id: Uuid, analysis: CachedAnalysis) -> Result<(), StoreError>;

    /// Clearing an unknown session is not an error.
    async fn clear(&self, session_id: Uuid) -> Result<(), StoreError>;
}
