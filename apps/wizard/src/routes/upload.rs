use axum::{
    extract::{multipart::Field, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::files::{FileSummary, UploadedFile};
use crate::services::{files, photo};
use crate::state::AppState;
use crate::workflow::validation::{has_required_files, missing_required_files};

/// Request body cap for the upload routes. Leaves room above the 5 MB photo
/// limit so oversized photos still reach `validate_photo`, and for CSV exports.
pub const UPLOAD_BODY_LIMIT: usize = 32 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct FilesResponse {
    pub files: Vec<FileSummary>,
    /// Required CSVs still absent; step 1 cannot be left until this is empty.
    pub missing: Vec<String>,
    pub complete: bool,
}

fn files_response(state: &AppState) -> FilesResponse {
    let store = state.store.lock();
    FilesResponse {
        files: store.files().iter().map(UploadedFile::summary).collect(),
        missing: missing_required_files(store.files()),
        complete: has_required_files(store.files()),
    }
}

async fn read_file(field: Field<'_>) -> Result<UploadedFile, AppError> {
    let name = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
    Ok(UploadedFile::new(name, content_type, data))
}

async fn next_field(multipart: &mut Multipart) -> Result<Option<Field<'_>>, AppError> {
    multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))
}

/// POST /api/files (multipart, repeated `files` parts)
pub async fn handle_upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FilesResponse>, AppError> {
    let mut uploaded = Vec::new();
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() == Some("files") {
            uploaded.push(read_file(field).await?);
        }
    }
    files::handle_files(&state.store, uploaded)?;
    Ok(Json(files_response(&state)))
}

/// DELETE /api/files/:index
pub async fn handle_remove_file(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<FilesResponse>, AppError> {
    files::remove_file(&state.store, index)?;
    Ok(Json(files_response(&state)))
}

/// POST /api/photo (multipart, one `photo` part)
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FileSummary>, AppError> {
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() == Some("photo") {
            let upload = read_file(field).await?;
            let summary = upload.summary();
            photo::handle_photo_upload(&state.store, upload)?;
            return Ok(Json(summary));
        }
    }
    Err(AppError::Validation("No photo in the upload".to_string()))
}

/// DELETE /api/photo
pub async fn handle_remove_photo(State(state): State<AppState>) -> StatusCode {
    photo::remove_photo(&state.store);
    StatusCode::NO_CONTENT
}
