use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backend_client::{EmailRequest, ResumeBackend};
use crate::errors::AppError;
use crate::store::SharedStore;
use crate::workflow::validation::validate_email;

/// What the user typed in the email form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailDraft {
    pub recipient: String,
    pub subject: String,
    pub message: String,
}

/// Sends the current PDF through `send-email`. The recipient is checked
/// locally first; nothing reaches the server for an invalid address.
pub async fn send_pdf_by_email(
    store: &SharedStore,
    backend: &dyn ResumeBackend,
    draft: EmailDraft,
) -> Result<(), AppError> {
    let request = {
        let mut store = store.lock();
        let recipient = draft.recipient.trim().to_string();
        if let Err(err) = validate_email(&recipient) {
            store.show_error(err.to_string());
            return Err(err.into());
        }
        let Some(pdf) = store.pdf() else {
            let message = "Generate the preview before sending it";
            store.show_error(message);
            return Err(AppError::Conflict(message.to_string()));
        };
        EmailRequest {
            recipient,
            subject: draft.subject,
            message: draft.message,
            pdf: STANDARD.encode(pdf),
        }
    };

    let _loading = store.loading();
    let result = backend.send_email(&request).await;

    let mut store = store.lock();
    match result {
        Ok(()) => {
            info!("CV sent to {}", request.recipient);
            store.show_success(format!("CV sent to {}", request.recipient), true);
            Ok(())
        }
        Err(e) => {
            store.show_error(format!("Error while sending the email: {e}"));
            Err(e.into())
        }
    }
}

/// `mailto:` link for the mail-client variant. The recipient goes in the
/// path; subject and body become query parameters when non-empty.
/// Attachments cannot travel through a mailto link.
pub fn mailto_url(recipient: &str, subject: &str, body: &str) -> String {
    let mut params = Vec::new();
    if !subject.is_empty() {
        params.push(format!("subject={}", urlencoding::encode(subject)));
    }
    if !body.is_empty() {
        params.push(format!("body={}", urlencoding::encode(body)));
    }

    let mut url = format!("mailto:{}", recipient.trim());
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Builds the mailto link and reminds the user to attach the downloaded CV.
pub fn open_mail_client(store: &SharedStore, draft: &EmailDraft) -> String {
    let url = mailto_url(&draft.recipient, &draft.subject, &draft.message);
    store.lock().show_success(
        "Mail client opened! Don't forget to attach the downloaded CV.",
        true,
    );
    url
}
