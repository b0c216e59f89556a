//! Client configuration

use crate::{ClientResult, HttpImageUploader, NetworkHttpClient};

/// Default backend address (the branch API is served under `/api`)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the branch backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Image upload endpoint; `{base_url}/upload` when unset
    pub upload_url: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            upload_url: None,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `BRANCH_API_URL`, `BRANCH_API_TOKEN`, `BRANCH_API_TIMEOUT`,
    /// `BRANCH_UPLOAD_URL`. Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("BRANCH_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            token: std::env::var("BRANCH_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            timeout: std::env::var("BRANCH_API_TIMEOUT")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            upload_url: std::env::var("BRANCH_UPLOAD_URL")
                .ok()
                .filter(|u| !u.is_empty()),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the image upload endpoint
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = Some(url.into());
        self
    }

    /// Resolved image upload endpoint
    pub fn upload_endpoint(&self) -> String {
        match &self.upload_url {
            Some(url) => url.clone(),
            None => format!("{}/upload", self.base_url.trim_end_matches('/')),
        }
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }

    /// Create an image uploader from this configuration
    pub fn build_uploader(&self) -> ClientResult<HttpImageUploader> {
        HttpImageUploader::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
