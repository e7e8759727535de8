#![cfg(test)]
use std::path::PathBuf;

use serde_json::Value;

use crate::users::UserRecord;

/// Unique path under the system temp dir; the file itself is not created.
pub fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", uuid::Uuid::new_v4()))
}

/// Build records from a JSON array literal.
pub fn records(v: Value) -> Vec<UserRecord> {
    serde_json::from_value(v).expect("array of objects")
}
