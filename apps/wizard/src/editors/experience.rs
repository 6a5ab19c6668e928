use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{edit_resume, is_visible, with_resume, FieldUpdate, VisibilityToggle};
use crate::cv::experience::{
    add_experience, delete_experience, experience_label, toggle_experience_visibility,
    update_experience,
};
use crate::errors::AppError;
use crate::models::config::ResumeConfig;
use crate::models::resume::{ParsedData, Position, PositionField};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExperienceItem {
    pub index: usize,
    pub label: String,
    pub visible: bool,
    pub position: Position,
}

fn render(data: &ParsedData, config: &ResumeConfig) -> Vec<ExperienceItem> {
    let visible = config.experience_visible.as_deref();
    data.positions
        .iter()
        .enumerate()
        .map(|(index, position)| ExperienceItem {
            index,
            label: experience_label(position),
            visible: is_visible(visible, index),
            position: position.clone(),
        })
        .collect()
}

/// GET /api/experience
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExperienceItem>>, AppError> {
    Ok(Json(with_resume(&state.store, render)?))
}

/// POST /api/experience
pub async fn handle_add(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ExperienceItem>>), AppError> {
    let items = edit_resume(&state.store, |data, config| {
        add_experience(&mut data.positions, config.experience_visible.as_mut());
        Ok(render(data, config))
    })?;
    Ok((StatusCode::CREATED, Json(items)))
}

/// PATCH /api/experience/:index
pub async fn handle_update(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<FieldUpdate<PositionField>>,
) -> Result<Json<Vec<ExperienceItem>>, AppError> {
    let items = edit_resume(&state.store, |data, config| {
        update_experience(&mut data.positions, index, req.field, req.value)?;
        Ok(render(data, config))
    })?;
    Ok(Json(items))
}

/// DELETE /api/experience/:index
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Vec<ExperienceItem>>, AppError> {
    let items = edit_resume(&state.store, |data, config| {
        config.experience_visible = delete_experience(
            &mut data.positions,
            index,
            config.experience_visible.as_deref(),
        )?;
        Ok(render(data, config))
    })?;
    Ok(Json(items))
}

/// PUT /api/experience/:index/visibility
pub async fn handle_toggle_visibility(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<VisibilityToggle>,
) -> Result<Json<Vec<ExperienceItem>>, AppError> {
    let items = edit_resume(&state.store, |data, config| {
        let visible = toggle_experience_visibility(
            &data.positions,
            index,
            req.checked,
            config.experience_visible.as_deref(),
        )?;
        config.experience_visible = Some(visible);
        Ok(render(data, config))
    })?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app_state, sample_parsed_data, FakeBackend};

    fn loaded_state() -> AppState {
        let (state, _) = app_state(FakeBackend::default());
        {
            let mut store = state.store.lock();
            store.set_parsed_data(Some(sample_parsed_data()));
            let mut config = store.config().clone();
            config.experience_visible = Some(vec![0, 2]);
            store.set_config(config);
        }
        state
    }

    #[tokio::test]
    async fn test_delete_shifts_visible_indices() {
        let state = loaded_state();

        let Json(items) = handle_delete(State(state.clone()), Path(0)).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Engineer - Globex");
        assert_eq!(state.store.lock().config().experience_visible, Some(vec![1]));
    }

    #[tokio::test]
    async fn test_added_entry_is_visible() {
        let state = loaded_state();

        let (status, Json(items)) = handle_add(State(state.clone())).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(items[3].label, "Sans titre - Entreprise");
        assert!(items[3].visible);
        assert_eq!(
            state.store.lock().config().experience_visible,
            Some(vec![0, 2, 3])
        );
    }

    #[tokio::test]
    async fn test_update_unknown_index_is_not_found() {
        let state = loaded_state();
        let req = FieldUpdate {
            field: PositionField::Title,
            value: "CTO".into(),
        };

        let err = handle_update(State(state.clone()), Path(9), Json(req))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Edit(_)));
        assert_eq!(
            state.store.lock().parsed_data().unwrap().positions[0].title,
            "Staff Engineer"
        );
    }

    #[tokio::test]
    async fn test_toggle_visibility_round_trip() {
        let state = loaded_state();

        let Json(items) = handle_toggle_visibility(
            State(state.clone()),
            Path(1),
            Json(VisibilityToggle { checked: true }),
        )
        .await
        .unwrap();
        assert!(items.iter().all(|item| item.visible));

        let Json(items) = handle_toggle_visibility(
            State(state.clone()),
            Path(1),
            Json(VisibilityToggle { checked: false }),
        )
        .await
        .unwrap();
        assert!(!items[1].visible);
        assert_eq!(
            state.store.lock().config().experience_visible,
            Some(vec![0, 2])
        );
    }
}
