//! Route definitions for the `/session` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/session`.
///
/// ```text
/// GET    /                    -> current
/// POST   /project/{id}        -> select_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(session::current))
        .route("/project/{id}", post(session::select_project))
}
