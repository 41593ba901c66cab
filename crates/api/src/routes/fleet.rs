//! Routes for the vehicle fleet and its reservations.

use axum::routing::get;
use axum::Router;

use crate::handlers::{reservation, vehicle};
use crate::state::AppState;

/// ```text
/// GET    /vehicles                      -> vehicle::list
/// POST   /vehicles                      -> vehicle::create
/// GET    /vehicles/{id}                 -> vehicle::get_by_id
/// PUT    /vehicles/{id}                 -> vehicle::update
/// DELETE /vehicles/{id}                 -> vehicle::delete
/// GET    /vehicles/{id}/reservations    -> vehicle::reservations
///
/// GET    /reservations                  -> reservation::list
/// POST   /reservations                  -> reservation::create
/// GET    /reservations/{id}             -> reservation::get_by_id
/// PUT    /reservations/{id}             -> reservation::update
/// DELETE /reservations/{id}             -> reservation::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(vehicle::list).post(vehicle::create))
        .route(
            "/vehicles/{id}",
            get(vehicle::get_by_id)
                .put(vehicle::update)
                .delete(vehicle::delete),
        )
        .route("/vehicles/{id}/reservations", get(vehicle::reservations))
        .route(
            "/reservations",
            get(reservation::list).post(reservation::create),
        )
        .route(
            "/reservations/{id}",
            get(reservation::get_by_id)
                .put(reservation::update)
                .delete(reservation::delete),
        )
}
