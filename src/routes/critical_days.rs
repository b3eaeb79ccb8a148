// src/routes/critical_days.rs

use axum::{extract::{Query, State}, http::StatusCode, Json};
use serde::Deserialize;

use crate::{models::CriticalDay, AppState};
use super::{bad_request, today_or};

pub const MAX_LIMIT: usize = 100;

#[derive(Deserialize)]
pub struct CriticalDaysQ {
    pub today: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/v1/critical-days
///
/// `limit` must be within `1..=MAX_LIMIT`; anything else is a 400.
pub async fn list_critical_days(
    State(state): State<AppState>,
    Query(q): Query<CriticalDaysQ>,
) -> Result<Json<Vec<CriticalDay>>, (StatusCode, String)> {
    let today = today_or(q.today.as_deref())?;
    let limit = q.limit.unwrap_or(state.config.critical_days_limit);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(bad_request(format!("limit must be between 1 and {MAX_LIMIT}, got {limit}")));
    }
    Ok(Json(state.store.critical_days(today, limit)))
}
