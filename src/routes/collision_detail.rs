// src/routes/collision_detail.rs

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{collisions::expand_collision_detail, models::CollisionDetail, AppState};

#[derive(Deserialize)]
pub struct DetailBody {
    pub date: NaiveDate,
    #[serde(alias = "propertyIds")]
    pub property_ids: Vec<String>,
}

/// POST /api/v1/collision-detail
///
/// Drill-down for a day picked from the critical-days list or the priority watch.
pub async fn expand_detail(
    State(state): State<AppState>,
    Json(body): Json<DetailBody>,
) -> Json<CollisionDetail> {
    let snapshot = state.store.current();
    Json(expand_collision_detail(
        body.date,
        &body.property_ids,
        &snapshot.reservations,
        &snapshot.properties,
    ))
}
