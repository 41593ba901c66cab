//! Handlers for subsystems, listed and created under their project.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauhub_core::error::CoreError;
use bauhub_core::models::subsystem::{NewSubsystem, Subsystem, SubsystemPatch};
use bauhub_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/subsystems
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Subsystem>>>> {
    let subsystems = state.services.subsystems.list_subsystems(project_id).await?;
    Ok(Json(DataResponse { data: subsystems }))
}

/// POST /api/v1/projects/{project_id}/subsystems
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<NewSubsystem>,
) -> AppResult<(StatusCode, Json<DataResponse<Subsystem>>)> {
    let subsystem = state
        .services
        .subsystems
        .create_subsystem(project_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: subsystem })))
}

/// GET /api/v1/subsystems/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Subsystem>>> {
    let subsystem = state
        .services
        .subsystems
        .get_subsystem(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subsystem",
            id,
        }))?;
    Ok(Json(DataResponse { data: subsystem }))
}

/// PUT /api/v1/subsystems/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<SubsystemPatch>,
) -> AppResult<Json<DataResponse<Subsystem>>> {
    let subsystem = state.services.subsystems.update_subsystem(id, patch).await?;
    Ok(Json(DataResponse { data: subsystem }))
}

/// DELETE /api/v1/subsystems/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.services.subsystems.delete_subsystem(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
