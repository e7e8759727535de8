//! Service layer for the local user collection.
//! - `users` holds the record model and the `UserStore` operations.
//! - `storage` holds the pluggable persistence backends (file, memory).
//! - Errors are typed; nothing here panics on bad input files.

pub mod errors;
pub mod storage;
pub mod users;
#[cfg(test)]
pub mod test_support;
