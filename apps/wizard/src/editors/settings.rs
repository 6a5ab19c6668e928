use std::collections::BTreeSet;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::config::{ColorKey, ConfigPatch, ResumeConfig, Section, Template};
use crate::models::resume::ParsedData;
use crate::state::AppState;
use crate::store::SharedStore;
use crate::template::colors::{update_color, validate_hex_color};
use crate::template::presets::apply_template;

#[derive(Debug, Deserialize)]
pub struct SectionToggle {
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct TemplateChoice {
    pub template: Template,
}

#[derive(Debug, Deserialize)]
pub struct ColorValue {
    pub value: String,
}

/// Rejects patches that would leave the config unusable for rendering.
fn validate_patch(patch: &ConfigPatch, parsed: Option<&ParsedData>) -> Result<(), AppError> {
    if let Some(order) = &patch.section_order {
        let unique: BTreeSet<_> = order.iter().collect();
        if order.len() != Section::ALL.len() || unique.len() != Section::ALL.len() {
            return Err(AppError::Validation(
                "section_order must list every section exactly once".to_string(),
            ));
        }
    }
    if let Some(colors) = &patch.colors {
        for value in [&colors.primary, &colors.text, &colors.secondary_text] {
            if !validate_hex_color(value) {
                return Err(AppError::Validation(format!(
                    "Invalid color '{value}', expected #RRGGBB"
                )));
            }
        }
    }
    let Some(parsed) = parsed else {
        return Ok(());
    };
    check_indices(
        "experience_visible",
        patch.experience_visible.as_ref().and_then(Option::as_deref),
        parsed.positions.len(),
    )?;
    check_indices(
        "education_visible",
        patch.education_visible.as_ref().and_then(Option::as_deref),
        parsed.education.len(),
    )?;
    if let Some(Some(selected)) = &patch.skills_selected {
        if let Some(unknown) = selected.iter().find(|s| !parsed.skills.contains(s)) {
            return Err(AppError::Validation(format!("Unknown skill: {unknown}")));
        }
    }
    Ok(())
}

fn check_indices(key: &str, indices: Option<&[usize]>, len: usize) -> Result<(), AppError> {
    match indices.and_then(|v| v.iter().find(|&&i| i >= len)) {
        Some(index) => Err(AppError::Validation(format!(
            "{key} contains {index}, but there are only {len} entries"
        ))),
        None => Ok(()),
    }
}

/// Keeps visibility lists sorted and free of duplicates.
fn normalize_patch(patch: &mut ConfigPatch) {
    for list in [&mut patch.experience_visible, &mut patch.education_visible]
        .into_iter()
        .flatten()
        .flatten()
    {
        list.sort_unstable();
        list.dedup();
    }
}

fn edit_config(
    store: &SharedStore,
    edit: impl FnOnce(&mut ResumeConfig) -> Result<(), AppError>,
) -> Result<ResumeConfig, AppError> {
    let mut store = store.lock();
    let mut config = store.config().clone();
    edit(&mut config)?;
    store.set_config(config.clone());
    Ok(config)
}

/// GET /api/config
pub async fn handle_get_config(State(state): State<AppState>) -> Json<ResumeConfig> {
    Json(state.store.lock().config().clone())
}

/// PATCH /api/config
pub async fn handle_patch_config(
    State(state): State<AppState>,
    Json(mut patch): Json<ConfigPatch>,
) -> Result<Json<ResumeConfig>, AppError> {
    let mut store = state.store.lock();
    validate_patch(&patch, store.parsed_data())?;
    normalize_patch(&mut patch);
    store.update_config(patch);
    Ok(Json(store.config().clone()))
}

/// PUT /api/config/sections/:section
pub async fn handle_toggle_section(
    State(state): State<AppState>,
    Path(section): Path<Section>,
    Json(req): Json<SectionToggle>,
) -> Result<Json<ResumeConfig>, AppError> {
    let config = edit_config(&state.store, |config| {
        config.sections.insert(section, req.enabled);
        Ok(())
    })?;
    Ok(Json(config))
}

/// PUT /api/config/template
///
/// Selecting a template also resets the colors to its preset.
pub async fn handle_select_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateChoice>,
) -> Result<Json<ResumeConfig>, AppError> {
    let config = edit_config(&state.store, |config| {
        apply_template(config, req.template);
        Ok(())
    })?;
    Ok(Json(config))
}

/// PUT /api/config/colors/:key
pub async fn handle_set_color(
    State(state): State<AppState>,
    Path(key): Path<ColorKey>,
    Json(req): Json<ColorValue>,
) -> Result<Json<ResumeConfig>, AppError> {
    let config = edit_config(&state.store, |config| {
        update_color(&mut config.colors, key, req.value.trim())?;
        Ok(())
    })?;
    Ok(Json(config))
}
