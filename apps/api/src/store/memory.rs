use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AnalysisStore, StoreError};
use crate::models::analysis::CachedAnalysis;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<Uuid, CachedAnalysis>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for MemoryStore {
    async fn get(&self, session_id: Uuid) -> Result<Option<CachedAnalysis>, StoreError> {
        Ok(self.entries.read().await.get(&session_id).cloned())
    }

    async fn set(&self, session_id: Uuid, analysis: CachedAnalysis) -> Result<(), StoreError> {
        self.entries.write().await.insert(session_id, analysis);
        Ok(())
    }

    async fn clear(&self, session_id: Uuid) -> Result<(), StoreError> {
        self.entries.write().await.remove(&session_id);
        Ok(())
    }
}
