use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::models::config::ResumeConfig;
use crate::models::files::{FileSummary, UploadedFile};
use crate::models::resume::ParsedData;
use crate::store::notifications::Notification;
use crate::workflow::stepper::Step;

/// Contact details typed on the configure step. Non-empty values override
/// the parsed profile when the PDF payload is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Everything the wizard remembers between requests.
#[derive(Debug, Clone)]
pub struct WizardState {
    pub selected_files: Vec<UploadedFile>,
    pub parsed_data: Option<ParsedData>,
    pub photo_file: Option<UploadedFile>,
    pub current_config: ResumeConfig,
    pub current_pdf: Option<Bytes>,
    pub current_step: Step,
    pub is_processing_step: bool,
    pub contact: ContactInfo,
    pub notification: Option<Notification>,
    pub loading: u32,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            selected_files: Vec::new(),
            parsed_data: None,
            photo_file: None,
            current_config: ResumeConfig::default(),
            current_pdf: None,
            current_step: Step::Upload,
            is_processing_step: false,
            contact: ContactInfo::default(),
            notification: None,
            loading: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfSummary {
    pub size: usize,
    pub size_label: String,
}

/// Serializable view of [`WizardState`]; file and PDF bytes are summarized.
/// Built through `Store::snapshot`, which also drops an expired banner.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub revision: u64,
    pub current_step: Step,
    pub is_processing_step: bool,
    pub is_loading: bool,
    pub selected_files: Vec<FileSummary>,
    pub photo: Option<FileSummary>,
    pub parsed_data: Option<ParsedData>,
    pub current_config: ResumeConfig,
    pub contact: ContactInfo,
    pub pdf: Option<PdfSummary>,
    pub notification: Option<Notification>,
}

impl WizardState {
    pub fn snapshot(&self, revision: u64) -> StateSnapshot {
        StateSnapshot {
            revision,
            current_step: self.current_step,
            is_processing_step: self.is_processing_step,
            is_loading: self.loading > 0,
            selected_files: self.selected_files.iter().map(UploadedFile::summary).collect(),
            photo: self.photo_file.as_ref().map(UploadedFile::summary),
            parsed_data: self.parsed_data.clone(),
            current_config: self.current_config.clone(),
            contact: self.contact.clone(),
            pdf: self.current_pdf.as_ref().map(|pdf| PdfSummary {
                size: pdf.len(),
                size_label: crate::util::format_file_size(pdf.len() as u64),
            }),
            notification: self.notification.clone(),
        }
    }
}
