use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::info;
use uuid::Uuid;

use super::{AnalysisStore, StoreError};
use crate::models::analysis::CachedAnalysis;

const KEY_PREFIX: &str = "ats:session:";

/// Redis-backed store. Values are JSON-encoded `CachedAnalysis` documents.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Opens a multiplexed connection shared by all requests.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        info!("Connecting to Redis...");

        let client = redis::Client::open(redis_url).context("Invalid REDIS_URL")?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .context("Failed to connect to Redis")?;

        info!("Redis connection established");
        Ok(Self { conn })
    }
}

fn session_key(session_id: Uuid) -> String {
    format!("{KEY_PREFIX}{session_id}")
}

#[async_trait]
impl AnalysisStore for RedisStore {
    async fn get(&self, session_id: Uuid) -> Result<Option<CachedAnalysis>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(session_key(session_id)).await?;
        raw.map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn set(&self, session_id: Uuid, analysis: CachedAnalysis) -> Result<(), StoreError> {
        let json = serde_json::to_string(&analysis)?;
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(session_key(session_id), json).await?;
        Ok(())
    }

    async fn clear(&self, session_id: Uuid) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(session_key(session_id)).await?;
        Ok(())
    }
}
