use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Fixed acknowledgement body: `{"success": true}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Error body shared by every route group: `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
