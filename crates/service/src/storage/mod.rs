//! Storage abstractions for service layer
//!
//! A backend owns two locations: the live collection, read and rewritten
//! whole on every operation, and a read-only baseline used by reset.

pub mod json_array_store;
pub mod memory_store;

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::users::UserRecord;

pub use json_array_store::JsonArrayStore;
pub use memory_store::MemoryStore;

#[async_trait]
pub trait CollectionBackend: Send + Sync {
    /// Read the full live collection.
    async fn load(&self) -> Result<Vec<UserRecord>, ServiceError>;
    /// Replace the full live collection.
    async fn save(&self, records: &[UserRecord]) -> Result<(), ServiceError>;
    /// Read the reset baseline.
    async fn load_baseline(&self) -> Result<Vec<UserRecord>, ServiceError>;
}
