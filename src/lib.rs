use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::{Pool, Postgres};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod collisions;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod snapshot;

#[cfg(test)]
mod tests;

use config::AppConfig;
use snapshot::SnapshotStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: Option<Pool<Postgres>>, // None: snapshots only arrive via PUT
    pub store: Arc<SnapshotStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, pool: Option<Pool<Postgres>>) -> Self {
        Self {
            pool,
            store: Arc::new(SnapshotStore::new()),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // health
        .route("/health", get(routes::health::health))
        // snapshot
        .route(
            "/api/v1/snapshot",
            get(routes::snapshot::get_snapshot).put(routes::snapshot::put_snapshot),
        )
        .route("/api/v1/snapshot/reload", post(routes::snapshot::reload_snapshot))
        // store records
        .route("/api/v1/properties", get(routes::properties::list_properties))
        .route("/api/v1/properties/:id", get(routes::properties::get_property))
        .route("/api/v1/reservations", get(routes::reservations::list_reservations))
        // turnover views
        .route("/api/v1/critical-days", get(routes::critical_days::list_critical_days))
        .route("/api/v1/priority-watch", get(routes::priority_watch::get_priority_watch))
        .route(
            "/api/v1/collision-detail",
            post(routes::collision_detail::expand_detail),
        )
        .route("/api/v1/stats", get(routes::stats::get_stats))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
