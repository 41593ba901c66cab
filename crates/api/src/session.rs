//! Request-scoped [`Session`] extraction.
//!
//! The caller identifies itself with two optional headers:
//!
//! - `x-user-id`: profile id of the acting user
//! - `x-project-id`: id of the active project
//!
//! A header that is not a UUID is rejected with 400. A well-formed id that
//! matches no record leaves that slot of the session empty.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use bauhub_core::session::Session;
use bauhub_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const PROJECT_ID_HEADER: &str = "x-project-id";

/// The caller's session, resolved from request headers.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut session = Session::anonymous();

        if let Some(user_id) = header_id(&parts.headers, USER_ID_HEADER)? {
            session.user = state.services.profiles.get_by_id(user_id).await?;
        }
        if let Some(project_id) = header_id(&parts.headers, PROJECT_ID_HEADER)? {
            session.active_project = state.services.projects.get_by_id(project_id).await?;
        }

        Ok(CurrentSession(session))
    }
}

fn header_id(headers: &HeaderMap, name: &str) -> Result<Option<DbId>, AppError> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };
    value
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse::<DbId>().ok())
        .map(Some)
        .ok_or_else(|| AppError::BadRequest(format!("{name} must be a UUID")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    #[test]
    fn missing_header_is_none() {
        let headers = HeaderMap::new();
        assert!(header_id(&headers, USER_ID_HEADER).unwrap().is_none());
    }

    #[test]
    fn malformed_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        let err = header_id(&headers, USER_ID_HEADER).unwrap_err();
        assert_matches!(err, AppError::BadRequest(_));
    }

    #[test]
    fn uuid_header_is_parsed() {
        let id = DbId::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            PROJECT_ID_HEADER,
            HeaderValue::from_str(&id.to_string()).unwrap(),
        );
        assert_eq!(header_id(&headers, PROJECT_ID_HEADER).unwrap(), Some(id));
    }
}
