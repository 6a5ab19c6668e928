use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::services::preview::{download_pdf, generate_preview, PDF_FILE_NAME};
use crate::state::AppState;
use crate::store::state::PdfSummary;
use crate::util::format_file_size;

/// POST /api/preview
/// Generates (or refreshes) the preview PDF and reports its size.
pub async fn handle_generate(State(state): State<AppState>) -> Result<Json<PdfSummary>, AppError> {
    let pdf = generate_preview(&state.store, state.backend.as_ref()).await?;
    Ok(Json(PdfSummary {
        size: pdf.len(),
        size_label: format_file_size(pdf.len() as u64),
    }))
}

/// GET /api/preview/pdf
pub async fn handle_download(State(state): State<AppState>) -> Result<Response, AppError> {
    let pdf = download_pdf(&state.store)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILE_NAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}
