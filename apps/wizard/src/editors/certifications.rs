use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{edit_resume, with_resume, FieldUpdate};
use crate::cv::certifications::{add_certification, delete_certification, update_certification};
use crate::errors::AppError;
use crate::models::resume::{Certification, CertificationField};
use crate::state::AppState;

/// GET /api/certifications
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Certification>>, AppError> {
    let certifications = with_resume(&state.store, |data, _| data.certifications.clone())?;
    Ok(Json(certifications))
}

/// POST /api/certifications
pub async fn handle_add(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Certification>>), AppError> {
    let certifications = edit_resume(&state.store, |data, _| {
        add_certification(&mut data.certifications);
        Ok(data.certifications.clone())
    })?;
    Ok((StatusCode::CREATED, Json(certifications)))
}

/// PATCH /api/certifications/:index
pub async fn handle_update(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<FieldUpdate<CertificationField>>,
) -> Result<Json<Vec<Certification>>, AppError> {
    let certifications = edit_resume(&state.store, |data, _| {
        update_certification(&mut data.certifications, index, req.field, req.value)?;
        Ok(data.certifications.clone())
    })?;
    Ok(Json(certifications))
}

/// DELETE /api/certifications/:index
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Vec<Certification>>, AppError> {
    let certifications = edit_resume(&state.store, |data, _| {
        delete_certification(&mut data.certifications, index)?;
        Ok(data.certifications.clone())
    })?;
    Ok(Json(certifications))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app_state, sample_parsed_data, FakeBackend};

    #[tokio::test]
    async fn test_certification_lifecycle() {
        let (state, _) = app_state(FakeBackend::default());
        state
            .store
            .lock()
            .set_parsed_data(Some(sample_parsed_data()));

        let (_, Json(list)) = handle_add(State(state.clone())).await.unwrap();
        assert_eq!(list.len(), 1);

        let Json(list) = handle_update(
            State(state.clone()),
            Path(0),
            Json(FieldUpdate {
                field: CertificationField::Authority,
                value: "AWS".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(list[0].authority, "AWS");

        assert!(handle_delete(State(state.clone()), Path(3)).await.is_err());
        let Json(list) = handle_delete(State(state), Path(0)).await.unwrap();
        assert!(list.is_empty());
    }
}
