//! Per-request session context.
//!
//! Carries who is acting and which project they are working in. It is
//! built by the caller (the API layer builds one per request) and passed
//! explicitly into service calls that depend on it.

use crate::models::project::Project;
use crate::models::user::User;
use crate::types::DbId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub active_project: Option<Project>,
}

impl Session {
    /// A session with neither a user nor an active project.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.active_project = Some(project);
        self
    }

    pub fn user_id(&self) -> Option<DbId> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn active_project_id(&self) -> Option<DbId> {
        self.active_project.as_ref().map(|p| p.id)
    }

    /// Name to record as the actor on reservations and similar records.
    pub fn actor_name(&self) -> Option<String> {
        self.user.as_ref().and_then(User::display_name)
    }
}
