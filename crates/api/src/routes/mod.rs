pub mod fleet;
pub mod health;
pub mod project;
pub mod registry;
pub mod session;
pub mod subsystem;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                                  current session (GET)
/// /session/project/{id}                     select active project (POST)
///
/// /projects                                 list, create
/// /projects/{id}                            get, update, delete
/// /projects/{id}/summary                    counts + recent activity
/// /projects/{id}/subsystems                 list, create
/// /projects/{id}/reservations               list
///
/// /subsystems/{id}                          get, update, delete
/// /subsystems/{id}/positions                list, create
/// /positions/{id}                           update, delete
/// /positions/{id}/material                  list, create
/// /material/{id}                            update, delete
///
/// /suppliers                                list, create
/// /suppliers/{id}                           get, update, delete
/// /profiles                                 list, create
/// /profiles/{id}                            get, update, delete
///
/// /vehicles                                 list, create
/// /vehicles/{id}                            get, update, delete
/// /vehicles/{id}/reservations               list
/// /reservations                             list, create
/// /reservations/{id}                        get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/session", session::router())
        .nest("/projects", project::router())
        .merge(subsystem::router())
        .merge(registry::router())
        .merge(fleet::router())
}
