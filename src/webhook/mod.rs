//! Webhook delivery
//!
//! The processing service is an externally owned webhook: it receives one
//! multipart POST and replies by email once OCR finishes. This module only
//! hands the payload over and reports HTTP-level success or failure.

use async_trait::async_trait;
use reqwest::multipart;
use thiserror::Error;

use crate::models::{ContactInfo, SelectedFile};

#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request could not be completed at all (connectivity, DNS, ...)
    #[error("{0}")]
    Transport(String),

    /// A response arrived, but with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),
}

impl From<reqwest::Error> for WebhookError {
    fn from(err: reqwest::Error) -> Self {
        WebhookError::Transport(err.to_string())
    }
}

/// One document submission, ready for the wire.
///
/// Field names match what the webhook expects: `image`, `filename`,
/// `filesize`, `email`, `phone`.
#[derive(Debug, Clone)]
pub struct DocumentPayload {
    pub image: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
    pub filesize: u64,
    pub email: String,
    pub phone: String,
}

impl DocumentPayload {
    /// Assemble a payload from the selection and contact info.
    ///
    /// Email and phone are trimmed here, at submit time; the phone field is
    /// sent even when empty.
    pub fn assemble(file: &SelectedFile, contact: &ContactInfo) -> Self {
        Self {
            image: file.bytes.clone(),
            filename: file.name.clone(),
            mime_type: file.mime_type.clone(),
            filesize: file.size,
            email: contact.email.trim().to_string(),
            phone: contact.phone.trim().to_string(),
        }
    }
}

/// Seam between the controller and the network.
#[async_trait]
pub trait WebhookClient {
    /// Deliver one payload; returns the raw response body on success.
    async fn deliver(&self, payload: DocumentPayload) -> Result<String, WebhookError>;
}

/// Production client: a single multipart POST via reqwest.
#[derive(Debug, Clone)]
pub struct HttpWebhookClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpWebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn deliver(&self, payload: DocumentPayload) -> Result<String, WebhookError> {
        let image = multipart::Part::bytes(payload.image)
            .file_name(payload.filename.clone())
            .mime_str(&payload.mime_type)?;

        let form = multipart::Form::new()
            .part("image", image)
            .text("filename", payload.filename)
            .text("filesize", payload.filesize.to_string())
            .text("email", payload.email)
            .text("phone", payload.phone);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status.as_u16()));
        }

        // The body carries nothing the client acts on; read it to confirm
        // the response completed.
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "webhook accepted payload");
        Ok(body)
    }
}
