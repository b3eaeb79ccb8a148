// src/routes/reservations.rs

use axum::{extract::{Query, State}, Json};
use serde::Deserialize;

use crate::{models::Reservation, AppState};

#[derive(Deserialize)]
pub struct ListQ {
    pub property_id: Option<String>,
}

pub async fn list_reservations(
    State(state): State<AppState>,
    Query(q): Query<ListQ>,
) -> Json<Vec<Reservation>> {
    let snapshot = state.store.current();
    let rows = snapshot
        .reservations
        .iter()
        .filter(|r| q.property_id.as_deref().map_or(true, |pid| r.property_id == pid))
        .cloned()
        .collect();
    Json(rows)
}
