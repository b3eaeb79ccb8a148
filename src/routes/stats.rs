// src/routes/stats.rs

use axum::{extract::{Query, State}, http::StatusCode, Json};
use serde::Deserialize;

use crate::{collisions::daily_stats, models::DailyStats, AppState};
use super::today_or;

#[derive(Deserialize)]
pub struct StatsQ {
    pub today: Option<String>,
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(q): Query<StatsQ>,
) -> Result<Json<DailyStats>, (StatusCode, String)> {
    let today = today_or(q.today.as_deref())?;
    Ok(Json(daily_stats(&state.store.current().reservations, today)))
}
