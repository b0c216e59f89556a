//! Errors returned by the branch backend client

use thiserror::Error;

/// Failure of a backend or upload call
///
/// Errors from the backend and from the transport are passed through
/// unchanged; nothing here retries.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request with its own error envelope
    #[error("{message} (code {code})")]
    Api {
        status: Option<u16>,
        code: i32,
        message: String,
    },

    /// Body did not have the expected shape
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// 401 without an error envelope
    #[error("Not signed in")]
    Unauthorized,

    /// 403 without an error envelope
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// 404 without an error envelope
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 without an error envelope, or a request refused before sending
    #[error("Bad request: {0}")]
    Validation(String),

    /// Any other failure status
    #[error("Server error: {0}")]
    Internal(String),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status reported by the backend, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => *status,
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Unauthorized => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Validation(_) => Some(400),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_and_status() {
        let err = ClientError::Api {
            status: Some(409),
            code: 4001,
            message: "branch name is duplicate".into(),
        };
        assert_eq!(err.to_string(), "branch name is duplicate (code 4001)");
        assert_eq!(err.status(), Some(409));
        assert_eq!(ClientError::Internal("boom".into()).status(), None);
    }
}
