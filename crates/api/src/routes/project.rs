//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-scoped subsystem and reservation listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::{project, reservation, subsystem};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/summary              -> summary
///
/// GET    /{id}/subsystems           -> subsystem::list_by_project
/// POST   /{id}/subsystems           -> subsystem::create
/// GET    /{id}/reservations         -> reservation::list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/summary", get(project::summary))
        .route(
            "/{id}/subsystems",
            get(subsystem::list_by_project).post(subsystem::create),
        )
        .route("/{id}/reservations", get(reservation::list_by_project))
}
