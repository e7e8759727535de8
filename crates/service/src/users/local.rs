use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::storage::{CollectionBackend, JsonArrayStore};
use crate::users::{store::UserStore, UserId, UserRecord, USER_NOT_FOUND};

/// Local user collection on top of a [`CollectionBackend`].
///
/// Nothing is cached: each operation loads the collection, works on it in
/// memory and, for mutations, saves it back whole. The mutex makes every
/// load/save cycle exclusive so concurrent writers cannot lose updates.
pub struct LocalUserStore {
    backend: Arc<dyn CollectionBackend>,
    gate: Mutex<()>,
}

impl LocalUserStore {
    pub fn new(backend: Arc<dyn CollectionBackend>) -> Arc<Self> {
        Arc::new(Self { backend, gate: Mutex::new(()) })
    }

    /// File-backed store over the live collection and the reset baseline.
    pub fn open<P: Into<PathBuf>, R: Into<PathBuf>>(users_file: P, reset_file: R) -> Arc<Self> {
        Self::new(Arc::new(JsonArrayStore::new(users_file, reset_file)))
    }

    pub async fn list(&self) -> Result<Vec<UserRecord>, ServiceError> {
        let _guard = self.gate.lock().await;
        self.backend.load().await
    }

    pub async fn get(&self, id: UserId) -> Result<UserRecord, ServiceError> {
        let _guard = self.gate.lock().await;
        let users = self.backend.load().await?;
        users
            .into_iter()
            .find(|u| u.matches(id))
            .ok_or_else(|| ServiceError::NotFound(USER_NOT_FOUND.into()))
    }

    /// The body is validated before storage is touched.
    pub async fn create(&self, body: Value) -> Result<UserRecord, ServiceError> {
        let record = UserRecord::from_body(body)?;
        let _guard = self.gate.lock().await;
        let mut users = self.backend.load().await?;
        users.push(record.clone());
        self.backend.save(&users).await?;
        info!(id = ?record.id(), total = users.len(), "user created");
        Ok(record)
    }

    pub async fn delete(&self, id: UserId) -> Result<usize, ServiceError> {
        let _guard = self.gate.lock().await;
        let mut users = self.backend.load().await?;
        let before = users.len();
        users.retain(|u| !u.matches(id));
        let removed = before - users.len();
        self.backend.save(&users).await?;
        if removed == 0 {
            debug!(%id, "delete matched no user");
        } else {
            info!(%id, removed, "users deleted");
        }
        Ok(removed)
    }

    /// The live collection is left untouched when the baseline can't be read.
    pub async fn reset(&self) -> Result<usize, ServiceError> {
        let _guard = self.gate.lock().await;
        let baseline = self.backend.load_baseline().await?;
        self.backend.save(&baseline).await?;
        info!(total = baseline.len(), "collection reset to baseline");
        Ok(baseline.len())
    }
}

#[async_trait]
impl UserStore for LocalUserStore {
    async fn list(&self) -> Result<Vec<UserRecord>, ServiceError> { self.list().await }
    async fn get(&self, id: UserId) -> Result<UserRecord, ServiceError> { self.get(id).await }
    async fn create(&self, body: Value) -> Result<UserRecord, ServiceError> { self.create(body).await }
    async fn delete(&self, id: UserId) -> Result<usize, ServiceError> { self.delete(id).await }
    async fn reset(&self) -> Result<usize, ServiceError> { self.reset().await }
}
