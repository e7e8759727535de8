use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::CollectionBackend;
use crate::errors::ServiceError;
use crate::users::UserRecord;

/// JSON file-backed collection.
///
/// The live file holds a pretty-printed JSON array. Writes replace the file's
/// contents in place: no lock file, no rename. The baseline file is only read.
#[derive(Clone, Debug)]
pub struct JsonArrayStore {
    users_path: PathBuf,
    reset_path: PathBuf,
}

impl JsonArrayStore {
    pub fn new<P: Into<PathBuf>, R: Into<PathBuf>>(users_path: P, reset_path: R) -> Self {
        Self { users_path: users_path.into(), reset_path: reset_path.into() }
    }
}

async fn read_array(path: &Path) -> Result<Vec<UserRecord>, ServiceError> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| ServiceError::Storage(format!("{}: {e}", path.display())))?;
    let records: Vec<UserRecord> = serde_json::from_slice(&bytes)
        .map_err(|e| ServiceError::Corrupt(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), count = records.len(), "collection loaded");
    Ok(records)
}

#[async_trait]
impl CollectionBackend for JsonArrayStore {
    async fn load(&self) -> Result<Vec<UserRecord>, ServiceError> {
        read_array(&self.users_path).await
    }

    async fn save(&self, records: &[UserRecord]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(records)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.users_path, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("{}: {e}", self.users_path.display())))?;
        debug!(path = %self.users_path.display(), count = records.len(), "collection saved");
        Ok(())
    }

    async fn load_baseline(&self) -> Result<Vec<UserRecord>, ServiceError> {
        read_array(&self.reset_path).await
    }
}
