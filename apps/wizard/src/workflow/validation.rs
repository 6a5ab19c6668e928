use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::files::UploadedFile;

pub const REQUIRED_FILES: [&str; 3] = ["Profile.csv", "Positions.csv", "Education.csv"];
pub const PHOTO_MAX_SIZE: usize = 5 * 1024 * 1024;
pub const PHOTO_ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload at least the required CSV files")]
    NoFiles,

    #[error("No CSV files in the upload")]
    NoCsvFiles,

    #[error("Missing required files: {}", .0.join(", "))]
    MissingFiles(Vec<String>),

    #[error("Unsupported photo format '{0}'. Use JPG or PNG.")]
    UnsupportedPhotoType(String),

    #[error("Photo is too large ({size} bytes). Maximum 5MB.")]
    PhotoTooLarge { size: usize },

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
}

/// Keeps only `.csv` files, in upload order.
pub fn filter_csv_files(files: Vec<UploadedFile>) -> Vec<UploadedFile> {
    files
        .into_iter()
        .filter(|f| f.name.to_lowercase().ends_with(".csv"))
        .collect()
}

pub fn missing_required_files(files: &[UploadedFile]) -> Vec<String> {
    REQUIRED_FILES
        .iter()
        .filter(|required| !files.iter().any(|f| f.name == **required))
        .map(|required| required.to_string())
        .collect()
}

pub fn has_required_files(files: &[UploadedFile]) -> bool {
    missing_required_files(files).is_empty()
}

/// Gate for leaving the upload step: at least one file, and every required CSV by exact name.
pub fn validate_upload(files: &[UploadedFile]) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::NoFiles);
    }
    let missing = missing_required_files(files);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFiles(missing));
    }
    Ok(())
}

pub fn validate_photo(photo: &UploadedFile) -> Result<(), ValidationError> {
    if !PHOTO_ALLOWED_TYPES.contains(&photo.content_type.as_str()) {
        return Err(ValidationError::UnsupportedPhotoType(
            photo.content_type.clone(),
        ));
    }
    if photo.size() > PHOTO_MAX_SIZE {
        return Err(ValidationError::PhotoTooLarge { size: photo.size() });
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}
