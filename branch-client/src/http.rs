//! HTTP client for network-based API calls
//!
//! [`HttpClient`] is the seam between the branch API and the transport.
//! [`NetworkHttpClient`] is the reqwest implementation; tests provide their
//! own.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::ApiResponse;

/// HTTP 客户端 trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = self.authorized(req).send().await?;
        handle_response(response).await
    }
}

/// Map a response to `T`, or to the error the backend reported.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await?;
        tracing::debug!(status = %status, body = %text, "Request failed");
        return Err(error_from_body(status, text));
    }
    Ok(response.json().await?)
}

/// Prefer the backend's error envelope; fall back to the status code.
fn error_from_body(status: StatusCode, text: String) -> ClientError {
    if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
        if let (Some(code), Some(message)) = (envelope.code, envelope.message) {
            return ClientError::Api {
                status: Some(status.as_u16()),
                code,
                message,
            };
        }
    }
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST => ClientError::Validation(text),
        _ => ClientError::Internal(text),
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
