//! Shared fixtures for unit and router tests: a scripted backend and sample data.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};
use tokio::sync::Notify;

use crate::backend_client::{BackendError, EmailRequest, LinkedInAuth, ResumeBackend};
use crate::config::Config;
use crate::models::files::UploadedFile;
use crate::models::resume::{Education, ParsedData, Position};
use crate::state::AppState;
use crate::workflow::data_mapper::PdfPayload;

pub const FAKE_PDF: &[u8] = b"%PDF-1.4 fake";

#[derive(Default)]
pub struct FakeBackend {
    pub fail_parse: Option<String>,
    pub fail_pdf: Option<String>,
    pub authenticated: bool,
    /// When set, `parse_linkedin` waits for a notification before answering.
    pub parse_gate: Option<Arc<Notify>>,
    pub calls: Mutex<Vec<String>>,
    pub last_pdf_payload: Mutex<Option<Value>>,
    pub emails: Mutex<Vec<EmailRequest>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.to_string());
        }
    }
}

#[async_trait]
impl ResumeBackend for FakeBackend {
    async fn parse_linkedin(
        &self,
        files: &[UploadedFile],
        _photo: Option<&UploadedFile>,
    ) -> Result<ParsedData, BackendError> {
        self.record("parse_linkedin");
        if let Some(gate) = &self.parse_gate {
            gate.notified().await;
        }
        if let Some(message) = &self.fail_parse {
            return Err(BackendError::Api {
                status: 500,
                message: message.clone(),
            });
        }
        assert!(!files.is_empty());
        Ok(sample_parsed_data())
    }

    async fn generate_pdf(&self, payload: &PdfPayload) -> Result<Bytes, BackendError> {
        self.record("generate_pdf");
        if let Some(message) = &self.fail_pdf {
            return Err(BackendError::Api {
                status: 500,
                message: message.clone(),
            });
        }
        if let Ok(mut last) = self.last_pdf_payload.lock() {
            *last = serde_json::to_value(payload).ok();
        }
        Ok(Bytes::from_static(FAKE_PDF))
    }

    async fn send_email(&self, request: &EmailRequest) -> Result<(), BackendError> {
        self.record("send_email");
        if let Ok(mut emails) = self.emails.lock() {
            emails.push(request.clone());
        }
        Ok(())
    }

    async fn linkedin_auth(&self) -> Result<LinkedInAuth, BackendError> {
        self.record("linkedin_auth");
        Ok(LinkedInAuth {
            auth_url: "https://www.linkedin.com/oauth/v2/authorization?state=abc".into(),
            state: "abc".into(),
        })
    }

    async fn linkedin_profile(&self, _access_token: Option<&str>) -> Result<Value, BackendError> {
        self.record("linkedin_profile");
        if self.authenticated {
            Ok(json!({"first_name": "Ada", "last_name": "Lovelace"}))
        } else {
            Err(BackendError::Unauthenticated)
        }
    }

    async fn linkedin_logout(&self) -> Result<(), BackendError> {
        self.record("linkedin_logout");
        Ok(())
    }
}

pub fn sample_parsed_data() -> ParsedData {
    let mut data = ParsedData {
        positions: vec![
            Position {
                title: "Staff Engineer".into(),
                company: "Acme".into(),
                ..Position::default()
            },
            Position {
                title: "Engineer".into(),
                company: "Globex".into(),
                ..Position::default()
            },
            Position {
                title: "Intern".into(),
                company: "Initech".into(),
                ..Position::default()
            },
        ],
        education: vec![Education {
            school: "EPITA".into(),
            degree: "MSc".into(),
            ..Education::default()
        }],
        skills: vec!["Rust".into(), "SQL".into()],
        ..ParsedData::default()
    };
    data.profile.first_name = "Ada".into();
    data.profile.summary = "Builds reliable systems.".into();
    data.profile.email = "ada@example.com".into();
    data
}

pub fn csv(name: &str) -> UploadedFile {
    UploadedFile::new(name, "text/csv", Bytes::from_static(b"First Name,Last Name\nAda,L\n"))
}

pub fn required_csvs() -> Vec<UploadedFile> {
    vec![csv("Profile.csv"), csv("Positions.csv"), csv("Education.csv")]
}

pub fn test_config() -> Config {
    Config {
        backend_url: "http://backend.test".into(),
        backend_timeout_secs: 5,
        port: 0,
        rust_log: "debug".into(),
    }
}

pub fn app_state(backend: FakeBackend) -> (AppState, Arc<FakeBackend>) {
    let backend = Arc::new(backend);
    let state = AppState::new(backend.clone(), test_config());
    (state, backend)
}
