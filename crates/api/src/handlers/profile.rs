//! Handlers for the `/profiles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauhub_core::error::CoreError;
use bauhub_core::models::user::{NewUser, User, UserPatch};
use bauhub_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/profiles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    let user = state.services.profiles.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/profiles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let users = state.services.profiles.list().await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = state
        .services
        .profiles
        .get_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<UserPatch>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = state.services.profiles.update(id, patch).await?;
    Ok(Json(DataResponse { data: user }))
}

/// DELETE /api/v1/profiles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.services.profiles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
