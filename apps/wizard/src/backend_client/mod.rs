//! Backend client: the single point of entry for calls to the résumé backend
//! (CSV parsing, PDF rendering, email, LinkedIn OAuth helper).
//!
//! Handlers and services only see the `ResumeBackend` trait; `AppState` holds
//! an `Arc<dyn ResumeBackend>` so tests can swap in a fake.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::files::UploadedFile;
use crate::models::resume::ParsedData;
use crate::workflow::data_mapper::PdfPayload;

pub mod endpoints;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Not authenticated with LinkedIn")]
    Unauthenticated,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Email request forwarded to `send-email`; `pdf` is base64 encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailRequest {
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub pdf: String,
}

/// Answer of the OAuth start endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedInAuth {
    pub auth_url: String,
    pub state: String,
}

/// Error body the backend sends on failure: `{"error": "...", "details": "..."}`.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: String,
}

#[async_trait]
pub trait ResumeBackend: Send + Sync {
    async fn parse_linkedin(
        &self,
        files: &[UploadedFile],
        photo: Option<&UploadedFile>,
    ) -> Result<ParsedData, BackendError>;

    async fn generate_pdf(&self, payload: &PdfPayload) -> Result<Bytes, BackendError>;

    async fn send_email(&self, request: &EmailRequest) -> Result<(), BackendError>;

    async fn linkedin_auth(&self) -> Result<LinkedInAuth, BackendError>;

    async fn linkedin_profile(&self, access_token: Option<&str>) -> Result<Value, BackendError>;

    async fn linkedin_logout(&self) -> Result<(), BackendError>;
}

/// HTTP implementation of [`ResumeBackend`]. Keeps a cookie jar so the
/// LinkedIn session set by the backend sticks across calls. No retries.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .context("Failed to build backend HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs are used as is; paths are joined to the base URL.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Any verb, with an optional JSON body.
    pub async fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<Response, BackendError> {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> Result<Response, BackendError> {
        self.request::<()>(Method::GET, path, None).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, BackendError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Response, BackendError> {
        self.send(self.client.post(self.url(path)).multipart(form))
            .await
    }

    /// Sends the request and turns non-2xx answers into `BackendError::Api`,
    /// carrying the server's own message when it sent one.
    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Backend returned {}: {}", status, body);
        Err(api_error(status, &body))
    }
}

fn api_error(status: StatusCode, body: &str) -> BackendError {
    let message = serde_json::from_str::<BackendErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Backend request failed")
                .to_string()
        });
    BackendError::Api {
        status: status.as_u16(),
        message,
    }
}

fn file_part(file: &UploadedFile) -> Result<Part, BackendError> {
    Part::bytes(file.data.to_vec())
        .file_name(file.name.clone())
        .mime_str(&file.content_type)
        .map_err(BackendError::from)
}

#[async_trait]
impl ResumeBackend for BackendClient {
    async fn parse_linkedin(
        &self,
        files: &[UploadedFile],
        photo: Option<&UploadedFile>,
    ) -> Result<ParsedData, BackendError> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", file_part(file)?);
        }
        if let Some(photo) = photo {
            form = form.part("photo", file_part(photo)?);
        }

        let response = self.post_multipart(endpoints::PARSE_LINKEDIN, form).await?;
        let parsed: ParsedData = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        debug!(
            positions = parsed.positions.len(),
            education = parsed.education.len(),
            skills = parsed.skills.len(),
            "LinkedIn export parsed"
        );
        Ok(parsed)
    }

    async fn generate_pdf(&self, payload: &PdfPayload) -> Result<Bytes, BackendError> {
        let response = self.post_json(endpoints::GENERATE_PDF, payload).await?;
        let pdf = response.bytes().await?;
        debug!("PDF generated ({} bytes)", pdf.len());
        Ok(pdf)
    }

    async fn send_email(&self, request: &EmailRequest) -> Result<(), BackendError> {
        self.post_json(endpoints::SEND_EMAIL, request).await?;
        Ok(())
    }

    async fn linkedin_auth(&self) -> Result<LinkedInAuth, BackendError> {
        let response = self.get(endpoints::LINKEDIN_AUTH).await?;
        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    async fn linkedin_profile(&self, access_token: Option<&str>) -> Result<Value, BackendError> {
        let mut request = self.client.get(self.url(endpoints::LINKEDIN_PROFILE));
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        let response = match self.send(request).await {
            Err(BackendError::Api { status: 401, .. }) => {
                return Err(BackendError::Unauthenticated)
            }
            other => other?,
        };
        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    async fn linkedin_logout(&self) -> Result<(), BackendError> {
        self.request::<()>(Method::POST, endpoints::LINKEDIN_LOGOUT, None)
            .await?;
        Ok(())
    }
}
