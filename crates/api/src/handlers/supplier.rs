//! Handlers for the `/suppliers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bauhub_core::error::CoreError;
use bauhub_core::models::supplier::{NewSupplier, Supplier, SupplierPatch};
use bauhub_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/suppliers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewSupplier>,
) -> AppResult<(StatusCode, Json<DataResponse<Supplier>>)> {
    let supplier = state.services.suppliers.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: supplier })))
}

/// GET /api/v1/suppliers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Supplier>>>> {
    let suppliers = state.services.suppliers.list().await?;
    Ok(Json(DataResponse { data: suppliers }))
}

/// GET /api/v1/suppliers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Supplier>>> {
    let supplier = state
        .services
        .suppliers
        .get_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supplier",
            id,
        }))?;
    Ok(Json(DataResponse { data: supplier }))
}

/// PUT /api/v1/suppliers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<SupplierPatch>,
) -> AppResult<Json<DataResponse<Supplier>>> {
    let supplier = state.services.suppliers.update(id, patch).await?;
    Ok(Json(DataResponse { data: supplier }))
}

/// DELETE /api/v1/suppliers/{id}
///
/// Material that referenced the supplier keeps existing without one.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.services.suppliers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
