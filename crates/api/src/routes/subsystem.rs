//! Routes for the project breakdown below a project: subsystems,
//! their positions and the material recorded against those.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{material, position, subsystem};
use crate::state::AppState;

/// ```text
/// GET    /subsystems/{id}                 -> subsystem::get_by_id
/// PUT    /subsystems/{id}                 -> subsystem::update
/// DELETE /subsystems/{id}                 -> subsystem::delete
/// GET    /subsystems/{id}/positions       -> position::list_by_subsystem
/// POST   /subsystems/{id}/positions       -> position::create
///
/// PUT    /positions/{id}                  -> position::update
/// DELETE /positions/{id}                  -> position::delete
/// GET    /positions/{id}/material         -> material::list_by_position
/// POST   /positions/{id}/material         -> material::create
///
/// PUT    /material/{id}                   -> material::update
/// DELETE /material/{id}                   -> material::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/subsystems/{id}",
            get(subsystem::get_by_id)
                .put(subsystem::update)
                .delete(subsystem::delete),
        )
        .route(
            "/subsystems/{id}/positions",
            get(position::list_by_subsystem).post(position::create),
        )
        .route(
            "/positions/{id}",
            put(position::update).delete(position::delete),
        )
        .route(
            "/positions/{id}/material",
            get(material::list_by_position).post(material::create),
        )
        .route(
            "/material/{id}",
            put(material::update).delete(material::delete),
        )
}
