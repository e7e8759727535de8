use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The backing location could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
    /// The backing location holds something other than an array of objects.
    #[error("corrupt data: {0}")]
    Corrupt(String),
}

impl ServiceError {
    /// Failures of the persistence layer rather than of the request.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Corrupt(_))
    }
}
