use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{edit_resume, is_visible, with_resume, FieldUpdate, VisibilityToggle};
use crate::cv::education::{
    add_education, delete_education, education_label, toggle_education_visibility,
    update_education,
};
use crate::errors::AppError;
use crate::models::config::ResumeConfig;
use crate::models::resume::{Education, EducationField, ParsedData};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EducationItem {
    pub index: usize,
    pub label: String,
    pub visible: bool,
    pub education: Education,
}

fn render(data: &ParsedData, config: &ResumeConfig) -> Vec<EducationItem> {
    let visible = config.education_visible.as_deref();
    data.education
        .iter()
        .enumerate()
        .map(|(index, entry)| EducationItem {
            index,
            label: education_label(entry),
            visible: is_visible(visible, index),
            education: entry.clone(),
        })
        .collect()
}

/// GET /api/education
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<EducationItem>>, AppError> {
    Ok(Json(with_resume(&state.store, render)?))
}

/// POST /api/education
pub async fn handle_add(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<EducationItem>>), AppError> {
    let items = edit_resume(&state.store, |data, config| {
        add_education(&mut data.education, config.education_visible.as_mut());
        Ok(render(data, config))
    })?;
    Ok((StatusCode::CREATED, Json(items)))
}

/// PATCH /api/education/:index
pub async fn handle_update(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<FieldUpdate<EducationField>>,
) -> Result<Json<Vec<EducationItem>>, AppError> {
    let items = edit_resume(&state.store, |data, config| {
        update_education(&mut data.education, index, req.field, req.value)?;
        Ok(render(data, config))
    })?;
    Ok(Json(items))
}

/// DELETE /api/education/:index
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Vec<EducationItem>>, AppError> {
    let items = edit_resume(&state.store, |data, config| {
        config.education_visible = delete_education(
            &mut data.education,
            index,
            config.education_visible.as_deref(),
        )?;
        Ok(render(data, config))
    })?;
    Ok(Json(items))
}

/// PUT /api/education/:index/visibility
pub async fn handle_toggle_visibility(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<VisibilityToggle>,
) -> Result<Json<Vec<EducationItem>>, AppError> {
    let items = edit_resume(&state.store, |data, config| {
        let visible = toggle_education_visibility(
            &data.education,
            index,
            req.checked,
            config.education_visible.as_deref(),
        )?;
        config.education_visible = Some(visible);
        Ok(render(data, config))
    })?;
    Ok(Json(items))
}
