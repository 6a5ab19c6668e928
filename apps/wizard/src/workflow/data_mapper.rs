use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;

use crate::models::config::ResumeConfig;
use crate::models::files::UploadedFile;
use crate::models::resume::ParsedData;
use crate::store::ContactInfo;

/// JSON body for `generate-pdf`: the résumé data at the top level, plus the
/// rendering config and an optional photo data URL.
#[derive(Debug, Clone, Serialize)]
pub struct PdfPayload {
    #[serde(flatten)]
    pub data: ParsedData,
    pub config: ResumeConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Builds the PDF request from the current session.
///
/// - non-empty contact fields override the parsed profile
/// - a non-empty skill selection replaces the skill list
/// - the photo is inlined as a `data:` URL
pub fn prepare_data_for_pdf(
    parsed: &ParsedData,
    config: &ResumeConfig,
    contact: &ContactInfo,
    photo: Option<&UploadedFile>,
) -> PdfPayload {
    let mut data = parsed.clone();
    // these keys are owned by the payload itself
    data.extra.remove("config");
    data.extra.remove("photo");

    if !contact.email.is_empty() {
        data.profile.email = contact.email.clone();
    }
    if !contact.phone.is_empty() {
        data.profile.phone = contact.phone.clone();
    }
    if !contact.address.is_empty() {
        data.profile.address = contact.address.clone();
    }

    if let Some(selected) = config.skills_selected.as_ref().filter(|s| !s.is_empty()) {
        data.skills = selected.clone();
    }

    PdfPayload {
        data,
        config: config.clone(),
        photo: photo.map(photo_data_url),
    }
}

pub fn photo_data_url(photo: &UploadedFile) -> String {
    format!(
        "data:{};base64,{}",
        photo.content_type,
        STANDARD.encode(&photo.data)
    )
}
