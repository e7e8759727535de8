use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CollectionBackend;
use crate::errors::ServiceError;
use crate::users::UserRecord;

/// In-memory collection for tests and ephemeral runs.
///
/// `None` stands for a location that does not exist yet, so the same
/// failure paths as the file backend can be exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    live: RwLock<Option<Vec<UserRecord>>>,
    baseline: Option<Vec<UserRecord>>,
}

impl MemoryStore {
    pub fn new(live: Vec<UserRecord>, baseline: Vec<UserRecord>) -> Self {
        Self { live: RwLock::new(Some(live)), baseline: Some(baseline) }
    }

    /// Live collection present, baseline missing.
    pub fn without_baseline(live: Vec<UserRecord>) -> Self {
        Self { live: RwLock::new(Some(live)), baseline: None }
    }

    /// Baseline present, live collection missing until the first save.
    pub fn without_collection(baseline: Vec<UserRecord>) -> Self {
        Self { live: RwLock::new(None), baseline: Some(baseline) }
    }
}

#[async_trait]
impl CollectionBackend for MemoryStore {
    async fn load(&self) -> Result<Vec<UserRecord>, ServiceError> {
        self.live
            .read()
            .await
            .clone()
            .ok_or_else(|| ServiceError::Storage("collection not initialized".into()))
    }

    async fn save(&self, records: &[UserRecord]) -> Result<(), ServiceError> {
        *self.live.write().await = Some(records.to_vec());
        Ok(())
    }

    async fn load_baseline(&self) -> Result<Vec<UserRecord>, ServiceError> {
        self.baseline
            .clone()
            .ok_or_else(|| ServiceError::Storage("baseline not present".into()))
    }
}
