use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{edit_resume, with_resume, VisibilityToggle};
use crate::cv::skills::{add_skill, delete_skill, toggle_skill_selection};
use crate::cv::EditError;
use crate::errors::AppError;
use crate::models::config::ResumeConfig;
use crate::models::resume::ParsedData;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillItem {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SkillSearch {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Deserialize)]
pub struct NewSkill {
    pub name: String,
}

/// Answer to an add request. A duplicate is an expected outcome, reported
/// with `success: false` rather than an error status.
#[derive(Debug, Serialize)]
pub struct AddSkillResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub skills: Vec<SkillItem>,
}

fn render(data: &ParsedData, config: &ResumeConfig, search: &str) -> Vec<SkillItem> {
    let needle = search.trim().to_lowercase();
    let selected = config.skills_selected.as_deref();
    data.skills
        .iter()
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .map(|skill| SkillItem {
            name: skill.clone(),
            selected: selected.map_or(true, |sel| sel.contains(skill)),
        })
        .collect()
}

/// GET /api/skills?search=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<SkillSearch>,
) -> Result<Json<Vec<SkillItem>>, AppError> {
    let skills = with_resume(&state.store, |data, config| {
        render(data, config, &params.search)
    })?;
    Ok(Json(skills))
}

/// POST /api/skills
pub async fn handle_add(
    State(state): State<AppState>,
    Json(req): Json<NewSkill>,
) -> Result<Json<AddSkillResponse>, AppError> {
    let result = edit_resume(&state.store, |data, config| {
        let skill = add_skill(&mut data.skills, &req.name, config.skills_selected.as_mut())?;
        Ok((skill, render(data, config, "")))
    });

    match result {
        Ok((skill, skills)) => Ok(Json(AddSkillResponse {
            success: true,
            skill: Some(skill),
            message: None,
            skills,
        })),
        Err(AppError::Edit(EditError::DuplicateSkill(_))) => {
            let message = "This skill already exists!".to_string();
            state.store.lock().show_error(message.clone());
            let skills = with_resume(&state.store, |data, config| render(data, config, ""))?;
            Ok(Json(AddSkillResponse {
                success: false,
                skill: None,
                message: Some(message),
                skills,
            }))
        }
        Err(e) => Err(e),
    }
}

/// DELETE /api/skills/:name
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<SkillItem>>, AppError> {
    let skills = edit_resume(&state.store, |data, config| {
        if !data.skills.contains(&name) {
            return Err(EditError::UnknownSkill(name.clone()));
        }
        config.skills_selected =
            delete_skill(&mut data.skills, &name, config.skills_selected.as_deref());
        Ok(render(data, config, ""))
    })?;
    Ok(Json(skills))
}

/// PUT /api/skills/:name/selection
pub async fn handle_toggle_selection(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<VisibilityToggle>,
) -> Result<Json<Vec<SkillItem>>, AppError> {
    let skills = edit_resume(&state.store, |data, config| {
        let selected = toggle_skill_selection(
            &data.skills,
            &name,
            req.checked,
            config.skills_selected.as_deref(),
        )?;
        config.skills_selected = Some(selected);
        Ok(render(data, config, ""))
    })?;
    Ok(Json(skills))
}
