//! Handlers for the `/reservations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauhub_core::error::CoreError;
use bauhub_core::models::reservation::{NewReservation, Reservation, ReservationPatch};
use bauhub_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::session::CurrentSession;
use crate::state::AppState;

/// POST /api/v1/reservations
///
/// Missing `projectId` and `reservedBy` are filled from the caller's session.
pub async fn create(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(input): Json<NewReservation>,
) -> AppResult<(StatusCode, Json<DataResponse<Reservation>>)> {
    let reservation = state
        .services
        .fleet
        .create_reservation(&session, input)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reservation })))
}

/// GET /api/v1/reservations
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    let reservations = state.services.fleet.list_reservations().await?;
    Ok(Json(DataResponse { data: reservations }))
}

/// GET /api/v1/projects/{project_id}/reservations
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    let reservations = state
        .services
        .fleet
        .reservations_for_project(project_id)
        .await?;
    Ok(Json(DataResponse { data: reservations }))
}

/// GET /api/v1/reservations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let reservation = state
        .services
        .fleet
        .get_reservation(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;
    Ok(Json(DataResponse { data: reservation }))
}

/// PUT /api/v1/reservations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<ReservationPatch>,
) -> AppResult<Json<DataResponse<Reservation>>> {
    let reservation = state.services.fleet.update_reservation(id, patch).await?;
    Ok(Json(DataResponse { data: reservation }))
}

/// DELETE /api/v1/reservations/{id}
///
/// Succeeds for unknown ids. The vehicle keeps its status.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.services.fleet.delete_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
