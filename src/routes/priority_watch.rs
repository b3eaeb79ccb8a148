// src/routes/priority_watch.rs

use axum::{extract::{Query, State}, http::StatusCode, Json};
use serde::Deserialize;

use crate::{models::PriorityWatch, AppState};
use super::today_or;

#[derive(Deserialize)]
pub struct WatchQ {
    pub today: Option<String>,
    pub marker: Option<String>,   // overrides PRIORITY_PROPERTY_MARKER
}

// GET /api/v1/priority-watch
pub async fn get_priority_watch(
    State(state): State<AppState>,
    Query(q): Query<WatchQ>,
) -> Result<Json<PriorityWatch>, (StatusCode, String)> {
    let today = today_or(q.today.as_deref())?;
    let marker = q.marker.as_deref().unwrap_or(&state.config.priority_marker);
    Ok(Json(state.store.priority_watch(marker, today)))
}
