//! Handlers for the caller's session.

use axum::extract::{Path, State};
use axum::Json;
use bauhub_core::models::project::Project;
use bauhub_core::models::user::User;
use bauhub_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::session::CurrentSession;
use crate::state::AppState;

/// The resolved session as seen by the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user: Option<User>,
    pub active_project: Option<Project>,
}

/// GET /api/v1/session
pub async fn current(CurrentSession(session): CurrentSession) -> Json<DataResponse<SessionView>> {
    Json(DataResponse {
        data: SessionView {
            user: session.user,
            active_project: session.active_project,
        },
    })
}

/// POST /api/v1/session/project/{id}
///
/// Validates the project and returns it. The client sends its id as
/// `x-project-id` on later requests.
pub async fn select_project(
    State(state): State<AppState>,
    CurrentSession(mut session): CurrentSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = state.services.projects.activate(&mut session, id).await?;
    Ok(Json(DataResponse { data: project }))
}
