use axum::{extract::State, Json};

use super::{edit_resume, with_resume, FieldUpdate};
use crate::cv::profile::update_profile;
use crate::errors::AppError;
use crate::models::resume::{Profile, ProfileField};
use crate::state::AppState;
use crate::store::ContactInfo;

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(with_resume(&state.store, |data, _| data.profile.clone())?))
}

/// PATCH /api/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(req): Json<FieldUpdate<ProfileField>>,
) -> Result<Json<Profile>, AppError> {
    let profile = edit_resume(&state.store, |data, _| {
        update_profile(&mut data.profile, req.field, req.value);
        Ok(data.profile.clone())
    })?;
    Ok(Json(profile))
}

/// GET /api/contact
pub async fn handle_get_contact(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(state.store.lock().contact().clone())
}

/// PUT /api/contact
///
/// Values are kept as typed; blank ones fall back to the parsed profile when
/// the PDF is built.
pub async fn handle_set_contact(
    State(state): State<AppState>,
    Json(contact): Json<ContactInfo>,
) -> Json<ContactInfo> {
    let contact = ContactInfo {
        email: contact.email.trim().to_string(),
        phone: contact.phone.trim().to_string(),
        address: contact.address.trim().to_string(),
    };
    state.store.lock().set_contact(contact.clone());
    Json(contact)
}
