//! Image upload
//!
//! The upload service is separate from the branch API; it only has to
//! accept a multipart `file` part and answer with the public URL.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::http::handle_response;
use crate::{ClientConfig, ClientError, ClientResult};
use shared::{ApiResponse, ImageFile};

/// Uploads a picked image and resolves its public URL
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, image: &ImageFile) -> ClientResult<String>;
}

/// Accepted upload response bodies
#[derive(Deserialize)]
#[serde(untagged)]
enum UploadResponse {
    Direct {
        #[serde(alias = "secure_url")]
        url: String,
    },
    Wrapped(ApiResponse<String>),
}

impl UploadResponse {
    fn into_url(self) -> ClientResult<String> {
        match self {
            UploadResponse::Direct { url } => Ok(url),
            UploadResponse::Wrapped(resp) if !resp.success => Err(ClientError::Api {
                status: None,
                code: resp.code.unwrap_or_default(),
                message: resp.message.unwrap_or_else(|| "Upload rejected".to_string()),
            }),
            UploadResponse::Wrapped(resp) => resp
                .data
                .filter(|url| !url.is_empty())
                .ok_or_else(|| ClientError::InvalidResponse("Missing image URL".to_string())),
        }
    }
}

/// Multipart uploader over reqwest
#[derive(Debug, Clone)]
pub struct HttpImageUploader {
    client: Client,
    upload_url: String,
    token: Option<String>,
}

impl HttpImageUploader {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            upload_url: config.upload_endpoint(),
            token: config.token.clone(),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

/// Content type for an image, from the file itself or its extension
fn content_type(image: &ImageFile) -> String {
    image.content_type.clone().unwrap_or_else(|| {
        mime_guess::from_path(&image.file_name)
            .first_or_octet_stream()
            .to_string()
    })
}

#[async_trait]
impl ImageUploader for HttpImageUploader {
    async fn upload(&self, image: &ImageFile) -> ClientResult<String> {
        if image.is_empty() {
            return Err(ClientError::Validation(format!(
                "Image {} is empty",
                image.file_name
            )));
        }

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&content_type(image))?;
        let form = Form::new().part("file", part);

        let mut req = self.client.post(&self.upload_url).multipart(form);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        tracing::debug!(file = %image.file_name, size = image.len(), "Uploading image");
        let resp: UploadResponse = handle_response(req.send().await?).await?;
        resp.into_url()
    }
}
