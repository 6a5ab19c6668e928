use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::state::AppState;
use crate::store::StateSnapshot;
use crate::workflow::stepper::{go_to_previous_step, go_to_step, Step, Transition};
use crate::workflow::wizard::{advance, reset_app};

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: Step,
    /// False when the requested step number was outside 1..=3.
    pub changed: bool,
}

/// GET /api/state
pub async fn handle_state(State(state): State<AppState>) -> Json<StateSnapshot> {
    Json(state.store.lock().snapshot())
}

/// POST /api/wizard/next
pub async fn handle_next(State(state): State<AppState>) -> Json<Transition> {
    Json(advance(&state).await)
}

/// POST /api/wizard/previous
pub async fn handle_previous(State(state): State<AppState>) -> Json<StepResponse> {
    let before = state.store.lock().step();
    let step = go_to_previous_step(&state.store);
    Json(StepResponse {
        step,
        changed: step != before,
    })
}

/// POST /api/wizard/goto/:step
pub async fn handle_goto(
    State(state): State<AppState>,
    Path(number): Path<u8>,
) -> Json<StepResponse> {
    match go_to_step(&state.store, number) {
        Some(step) => Json(StepResponse {
            step,
            changed: true,
        }),
        None => Json(StepResponse {
            step: state.store.lock().step(),
            changed: false,
        }),
    }
}

/// POST /api/wizard/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<StateSnapshot> {
    reset_app(&state);
    Json(state.store.lock().snapshot())
}
