use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ServiceError;
use crate::users::{UserId, UserRecord};

/// Operations on the local user collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<UserRecord>, ServiceError>;
    /// First record whose `id` matches.
    async fn get(&self, id: UserId) -> Result<UserRecord, ServiceError>;
    /// Append `body` as the last record and return it.
    async fn create(&self, body: Value) -> Result<UserRecord, ServiceError>;
    /// Remove every matching record; returns how many were removed.
    async fn delete(&self, id: UserId) -> Result<usize, ServiceError>;
    /// Overwrite the collection with the baseline; returns its length.
    async fn reset(&self) -> Result<usize, ServiceError>;
}
