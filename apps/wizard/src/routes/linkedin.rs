use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::backend_client::LinkedInAuth;
use crate::errors::AppError;
use crate::services::linkedin::LinkedInStatus;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// Set by the backend when it redirects back after the OAuth dance.
    pub linkedin_auth: Option<String>,
    pub state: Option<String>,
}

/// GET /api/linkedin/auth
pub async fn handle_auth(State(state): State<AppState>) -> Result<Json<LinkedInAuth>, AppError> {
    let auth = state
        .linkedin
        .initiate_auth(&state.store, state.backend.as_ref())
        .await?;
    Ok(Json(auth))
}

/// GET /api/linkedin/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<Value>, AppError> {
    let profile = state
        .linkedin
        .get_profile(&state.store, state.backend.as_ref(), params.access_token)
        .await?;
    Ok(Json(profile))
}

/// GET /api/linkedin/status
pub async fn handle_status(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> Json<LinkedInStatus> {
    state
        .linkedin
        .check_auth_callback(
            &state.store,
            params.linkedin_auth.as_deref(),
            params.state.as_deref(),
        );
    Json(state.linkedin.status(state.backend.as_ref()).await)
}

/// POST /api/linkedin/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .linkedin
        .logout(&state.store, state.backend.as_ref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
