//! API Response types
//!
//! The branch backend wraps every body in the same envelope:
//! ```json
//! {
//!     "success": true,
//!     "code": 1000,
//!     "message": "...",
//!     "data": { ... }
//! }
//! ```
//! Error bodies from its exception handler use the same shape with
//! `success: false` and no `data`.

use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Missing means success; only error bodies set it explicitly
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            code: None,
            message: None,
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
