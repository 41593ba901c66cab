//! Handlers for positions (bill-of-quantity lines of a subsystem).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauhub_core::models::position::{NewPosition, Position, PositionPatch};
use bauhub_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/subsystems/{subsystem_id}/positions
pub async fn list_by_subsystem(
    State(state): State<AppState>,
    Path(subsystem_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Position>>>> {
    let positions = state.services.subsystems.list_positions(subsystem_id).await?;
    Ok(Json(DataResponse { data: positions }))
}

/// POST /api/v1/subsystems/{subsystem_id}/positions
pub async fn create(
    State(state): State<AppState>,
    Path(subsystem_id): Path<DbId>,
    Json(input): Json<NewPosition>,
) -> AppResult<(StatusCode, Json<DataResponse<Position>>)> {
    let position = state
        .services
        .subsystems
        .create_position(subsystem_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: position })))
}

/// PUT /api/v1/positions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PositionPatch>,
) -> AppResult<Json<DataResponse<Position>>> {
    let position = state.services.subsystems.update_position(id, patch).await?;
    Ok(Json(DataResponse { data: position }))
}

/// DELETE /api/v1/positions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.services.subsystems.delete_position(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
