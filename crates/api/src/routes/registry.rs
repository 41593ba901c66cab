//! Routes for the company-wide registers: suppliers and user profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::{profile, supplier};
use crate::state::AppState;

/// ```text
/// GET    /suppliers            -> supplier::list
/// POST   /suppliers            -> supplier::create
/// GET    /suppliers/{id}       -> supplier::get_by_id
/// PUT    /suppliers/{id}       -> supplier::update
/// DELETE /suppliers/{id}       -> supplier::delete
///
/// GET    /profiles             -> profile::list
/// POST   /profiles             -> profile::create
/// GET    /profiles/{id}        -> profile::get_by_id
/// PUT    /profiles/{id}        -> profile::update
/// DELETE /profiles/{id}        -> profile::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(supplier::list).post(supplier::create))
        .route(
            "/suppliers/{id}",
            get(supplier::get_by_id)
                .put(supplier::update)
                .delete(supplier::delete),
        )
        .route("/profiles", get(profile::list).post(profile::create))
        .route(
            "/profiles/{id}",
            get(profile::get_by_id)
                .put(profile::update)
                .delete(profile::delete),
        )
}
