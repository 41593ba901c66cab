//! Project selection and CRUD.

use std::sync::Arc;

use bauhub_core::error::CoreError;
use bauhub_core::models::project::{NewProject, Project, ProjectPatch};
use bauhub_core::session::Session;
use bauhub_core::types::DbId;
use bauhub_db::mappers::project::{to_app, to_db};
use bauhub_db::Store;
use validator::Validate;

use crate::error::ServiceResult;

#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn Store>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All projects ordered by project number.
    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        let rows = self.store.list_projects().await?;
        Ok(rows.into_iter().map(to_app).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> ServiceResult<Option<Project>> {
        Ok(self.store.find_project(id).await?.map(to_app))
    }

    pub async fn create(&self, input: NewProject) -> ServiceResult<Project> {
        input.validate()?;
        let row = self.store.insert_project(&to_db(&input.into())).await?;
        tracing::info!(project_id = %row.id, number = %row.projektnummer, "Project created");
        Ok(to_app(row))
    }

    pub async fn update(&self, id: DbId, patch: ProjectPatch) -> ServiceResult<Project> {
        patch.validate()?;
        let row = self
            .store
            .update_project(id, &to_db(&patch))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })?;
        Ok(to_app(row))
    }

    /// Delete a project with its subsystems, positions and material.
    ///
    /// Deleting an unknown id succeeds without effect.
    pub async fn delete(&self, id: DbId) -> ServiceResult<()> {
        if self.store.delete_project(id).await? {
            tracing::info!(project_id = %id, "Project deleted");
        } else {
            tracing::debug!(project_id = %id, "Delete of unknown project ignored");
        }
        Ok(())
    }

    /// Make `id` the session's active project and return it.
    ///
    /// Fails with `NotFound` and leaves the session untouched when the
    /// project does not exist.
    pub async fn activate(&self, session: &mut Session, id: DbId) -> ServiceResult<Project> {
        let project = self.get_by_id(id).await?.ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
        session.active_project = Some(project.clone());
        tracing::debug!(
            project_id = %id,
            project = %project.label(),
            user_id = ?session.user_id(),
            "Active project selected",
        );
        Ok(project)
    }
}
