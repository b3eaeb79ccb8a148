// src/routes/properties.rs

use axum::{extract::{Path, State}, http::StatusCode, Json};

use crate::{collisions::PropertyDirectory, models::Property, AppState};

pub async fn list_properties(State(state): State<AppState>) -> Json<Vec<Property>> {
    Json(state.store.current().properties.clone())
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, (StatusCode, String)> {
    let snapshot = state.store.current();
    PropertyDirectory::new(&snapshot.properties)
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown property '{id}'")))
}
