// src/routes/snapshot.rs

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    db,
    models::{SnapshotBody, SnapshotInfo, SnapshotUpdate},
    AppState,
};
use super::internal_error;

// GET /api/v1/snapshot
pub async fn get_snapshot(State(state): State<AppState>) -> Json<SnapshotInfo> {
    Json(state.store.current().info())
}

/// PUT /api/v1/snapshot
///
/// The external store pushes a full replacement; nothing is written anywhere.
pub async fn put_snapshot(
    State(state): State<AppState>,
    Json(body): Json<SnapshotBody>,
) -> Json<SnapshotUpdate> {
    let (snapshot, changed) = state.store.replace(body.properties, body.reservations);
    Json(SnapshotUpdate { changed, snapshot: snapshot.info() })
}

// POST /api/v1/snapshot/reload
pub async fn reload_snapshot(
    State(state): State<AppState>,
) -> Result<Json<SnapshotUpdate>, (StatusCode, String)> {
    let Some(pool) = state.pool.as_ref() else {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "no database configured".into()));
    };

    let (properties, reservations) = db::load_snapshot(pool).await.map_err(internal_error)?;
    let (snapshot, changed) = state.store.replace(properties, reservations);
    Ok(Json(SnapshotUpdate { changed, snapshot: snapshot.info() }))
}
