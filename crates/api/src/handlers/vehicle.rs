//! Handlers for the `/vehicles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauhub_core::error::CoreError;
use bauhub_core::models::reservation::Reservation;
use bauhub_core::models::vehicle::{NewVehicle, Vehicle, VehiclePatch};
use bauhub_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/vehicles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewVehicle>,
) -> AppResult<(StatusCode, Json<DataResponse<Vehicle>>)> {
    let vehicle = state.services.fleet.create_vehicle(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: vehicle })))
}

/// GET /api/v1/vehicles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Vehicle>>>> {
    let vehicles = state.services.fleet.list_vehicles().await?;
    Ok(Json(DataResponse { data: vehicles }))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vehicle>>> {
    let vehicle = state
        .services
        .fleet
        .get_vehicle(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(DataResponse { data: vehicle }))
}

/// PUT /api/v1/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<VehiclePatch>,
) -> AppResult<Json<DataResponse<Vehicle>>> {
    let vehicle = state.services.fleet.update_vehicle(id, patch).await?;
    Ok(Json(DataResponse { data: vehicle }))
}

/// DELETE /api/v1/vehicles/{id}
///
/// The vehicle's reservations are removed with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.services.fleet.delete_vehicle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/vehicles/{id}/reservations
pub async fn reservations(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Reservation>>>> {
    let reservations = state.services.fleet.reservations_for_vehicle(id).await?;
    Ok(Json(DataResponse { data: reservations }))
}
