use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::services::email::{open_mail_client, send_pdf_by_email, EmailDraft};
use crate::state::AppState;

/// POST /api/email
pub async fn handle_send(
    State(state): State<AppState>,
    Json(draft): Json<EmailDraft>,
) -> Result<Json<Value>, AppError> {
    send_pdf_by_email(&state.store, state.backend.as_ref(), draft).await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/email/mailto?recipient=&subject=&message=
pub async fn handle_mailto(
    State(state): State<AppState>,
    Query(draft): Query<EmailDraft>,
) -> Json<Value> {
    let url = open_mail_client(&state.store, &draft);
    Json(json!({ "url": url }))
}
