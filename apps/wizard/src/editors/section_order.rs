use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::cv::sections::{
    move_section_down, move_section_up, reorder_section, section_overview, SectionEntry,
};
use crate::models::config::Section;
use crate::state::AppState;
use crate::store::SharedStore;

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub from: usize,
    pub to: usize,
}

fn reorder(store: &SharedStore, apply: impl FnOnce(&mut Vec<Section>)) -> Vec<SectionEntry> {
    let mut store = store.lock();
    let mut config = store.config().clone();
    apply(&mut config.section_order);
    if config.section_order != store.config().section_order {
        store.set_config(config);
    }
    section_overview(store.config(), store.parsed_data())
}

/// GET /api/sections
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<SectionEntry>> {
    let store = state.store.lock();
    Json(section_overview(store.config(), store.parsed_data()))
}

/// POST /api/sections/move
///
/// Out-of-range positions leave the order as it is.
pub async fn handle_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Json<Vec<SectionEntry>> {
    Json(reorder(&state.store, |order| {
        reorder_section(order, req.from, req.to)
    }))
}

/// POST /api/sections/:index/up
pub async fn handle_move_up(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<Vec<SectionEntry>> {
    Json(reorder(&state.store, |order| move_section_up(order, index)))
}

/// POST /api/sections/:index/down
pub async fn handle_move_down(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<Vec<SectionEntry>> {
    Json(reorder(&state.store, |order| move_section_down(order, index)))
}
