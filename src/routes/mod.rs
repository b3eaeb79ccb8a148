use axum::http::StatusCode;
use chrono::{Local, NaiveDate};

pub mod health;
pub mod snapshot;
pub mod properties;
pub mod reservations;
pub mod critical_days;
pub mod priority_watch;
pub mod collision_detail;
pub mod stats;

// Common error mappers
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!(error = %e, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}

pub fn bad_request<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .map_err(|e| format!("invalid date '{}': {}", s, e))
}

/// `?today=` override, else the local calendar date.
pub fn today_or(param: Option<&str>) -> Result<NaiveDate, (StatusCode, String)> {
    match param.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => parse_day(s).map_err(bad_request),
        None => Ok(Local::now().date_naive()),
    }
}
