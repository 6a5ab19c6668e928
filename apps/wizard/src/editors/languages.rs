use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{edit_resume, with_resume, FieldUpdate};
use crate::cv::languages::{add_language, delete_language, update_language};
use crate::errors::AppError;
use crate::models::resume::{Language, LanguageField};
use crate::state::AppState;

/// GET /api/languages
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Language>>, AppError> {
    let languages = with_resume(&state.store, |data, _| data.languages.clone())?;
    Ok(Json(languages))
}

/// POST /api/languages
pub async fn handle_add(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Language>>), AppError> {
    let languages = edit_resume(&state.store, |data, _| {
        add_language(&mut data.languages);
        Ok(data.languages.clone())
    })?;
    Ok((StatusCode::CREATED, Json(languages)))
}

/// PATCH /api/languages/:index
pub async fn handle_update(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<FieldUpdate<LanguageField>>,
) -> Result<Json<Vec<Language>>, AppError> {
    let languages = edit_resume(&state.store, |data, _| {
        update_language(&mut data.languages, index, req.field, req.value)?;
        Ok(data.languages.clone())
    })?;
    Ok(Json(languages))
}

/// DELETE /api/languages/:index
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Vec<Language>>, AppError> {
    let languages = edit_resume(&state.store, |data, _| {
        delete_language(&mut data.languages, index)?;
        Ok(data.languages.clone())
    })?;
    Ok(Json(languages))
}
