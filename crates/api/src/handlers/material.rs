//! Handlers for material recorded against a position.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauhub_core::models::material::{Material, MaterialPatch, NewMaterial};
use bauhub_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/positions/{position_id}/material
pub async fn list_by_position(
    State(state): State<AppState>,
    Path(position_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Material>>>> {
    let material = state.services.subsystems.list_material(position_id).await?;
    Ok(Json(DataResponse { data: material }))
}

/// POST /api/v1/positions/{position_id}/material
pub async fn create(
    State(state): State<AppState>,
    Path(position_id): Path<DbId>,
    Json(input): Json<NewMaterial>,
) -> AppResult<(StatusCode, Json<DataResponse<Material>>)> {
    let material = state
        .services
        .subsystems
        .create_material(position_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: material })))
}

/// PUT /api/v1/material/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<MaterialPatch>,
) -> AppResult<Json<DataResponse<Material>>> {
    let material = state.services.subsystems.update_material(id, patch).await?;
    Ok(Json(DataResponse { data: material }))
}

/// DELETE /api/v1/material/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.services.subsystems.delete_material(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
