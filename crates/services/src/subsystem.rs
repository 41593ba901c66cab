//! Subsystems ("Teilsysteme") of a project, their positions and the
//! material recorded against each position.
//!
//! Also owns the per-project aggregates the dashboard shows: counts along
//! the ownership chain and the recent-activity stream.

use std::sync::Arc;

use bauhub_core::error::CoreError;
use bauhub_core::models::activity::{Activity, ProjectSummary};
use bauhub_core::models::material::{Material, MaterialPatch, NewMaterial};
use bauhub_core::models::position::{NewPosition, Position, PositionPatch};
use bauhub_core::models::subsystem::{NewSubsystem, Subsystem, SubsystemPatch};
use bauhub_core::types::DbId;
use bauhub_db::mappers::{activity, material, position, subsystem};
use bauhub_db::Store;
use validator::Validate;

use crate::error::ServiceResult;

/// Number of entries [`SubsystemService::summary`] includes in its
/// activity stream.
pub const SUMMARY_ACTIVITY_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct SubsystemService {
    store: Arc<dyn Store>,
}

impl SubsystemService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    // -----------------------------------------------------------------------
    // Subsystems
    // -----------------------------------------------------------------------

    /// A project's subsystems ordered by system number, then name.
    pub async fn list_subsystems(&self, project_id: DbId) -> ServiceResult<Vec<Subsystem>> {
        let rows = self.store.list_subsystems(project_id).await?;
        Ok(rows.into_iter().map(subsystem::to_app).collect())
    }

    pub async fn get_subsystem(&self, id: DbId) -> ServiceResult<Option<Subsystem>> {
        Ok(self.store.find_subsystem(id).await?.map(subsystem::to_app))
    }

    pub async fn create_subsystem(
        &self,
        project_id: DbId,
        input: NewSubsystem,
    ) -> ServiceResult<Subsystem> {
        input.validate()?;
        let mut changes = subsystem::to_db(&input.into());
        changes.projekt_id = Some(project_id);
        let row = self.store.insert_subsystem(&changes).await?;
        tracing::info!(
            subsystem_id = %row.id,
            project_id = %project_id,
            name = %row.name,
            "Subsystem created",
        );
        Ok(subsystem::to_app(row))
    }

    pub async fn update_subsystem(
        &self,
        id: DbId,
        patch: SubsystemPatch,
    ) -> ServiceResult<Subsystem> {
        patch.validate()?;
        let row = self
            .store
            .update_subsystem(id, &subsystem::to_db(&patch))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Subsystem",
                id,
            })?;
        Ok(subsystem::to_app(row))
    }

    /// Delete a subsystem with its positions and their material.
    pub async fn delete_subsystem(&self, id: DbId) -> ServiceResult<()> {
        if !self.store.delete_subsystem(id).await? {
            tracing::debug!(subsystem_id = %id, "Delete of unknown subsystem ignored");
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Positions
    // -----------------------------------------------------------------------

    pub async fn list_positions(&self, subsystem_id: DbId) -> ServiceResult<Vec<Position>> {
        let rows = self.store.list_positions(subsystem_id).await?;
        Ok(rows.into_iter().map(position::to_app).collect())
    }

    pub async fn get_position(&self, id: DbId) -> ServiceResult<Option<Position>> {
        Ok(self.store.find_position(id).await?.map(position::to_app))
    }

    pub async fn create_position(
        &self,
        subsystem_id: DbId,
        input: NewPosition,
    ) -> ServiceResult<Position> {
        input.validate()?;
        let mut changes = position::to_db(&input.into());
        changes.teilsystem_id = Some(subsystem_id);
        let row = self.store.insert_position(&changes).await?;
        tracing::info!(position_id = %row.id, subsystem_id = %subsystem_id, "Position created");
        Ok(position::to_app(row))
    }

    pub async fn update_position(&self, id: DbId, patch: PositionPatch) -> ServiceResult<Position> {
        patch.validate()?;
        let row = self
            .store
            .update_position(id, &position::to_db(&patch))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Position",
                id,
            })?;
        Ok(position::to_app(row))
    }

    pub async fn delete_position(&self, id: DbId) -> ServiceResult<()> {
        if !self.store.delete_position(id).await? {
            tracing::debug!(position_id = %id, "Delete of unknown position ignored");
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Material
    // -----------------------------------------------------------------------

    pub async fn list_material(&self, position_id: DbId) -> ServiceResult<Vec<Material>> {
        let rows = self.store.list_material(position_id).await?;
        Ok(rows.into_iter().map(material::to_app).collect())
    }

    pub async fn get_material(&self, id: DbId) -> ServiceResult<Option<Material>> {
        Ok(self.store.find_material(id).await?.map(material::to_app))
    }

    pub async fn create_material(
        &self,
        position_id: DbId,
        input: NewMaterial,
    ) -> ServiceResult<Material> {
        input.validate()?;
        let mut patch = MaterialPatch::from(input);
        patch.position_id = Some(position_id);
        let row = self.store.insert_material(&material::to_db(&patch)).await?;
        tracing::info!(
            material_id = %row.id,
            position_id = %position_id,
            supplier_id = ?row.lieferant_id,
            "Material recorded",
        );
        Ok(material::to_app(row))
    }

    pub async fn update_material(&self, id: DbId, patch: MaterialPatch) -> ServiceResult<Material> {
        patch.validate()?;
        let row = self
            .store
            .update_material(id, &material::to_db(&patch))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Material",
                id,
            })?;
        Ok(material::to_app(row))
    }

    pub async fn delete_material(&self, id: DbId) -> ServiceResult<()> {
        if !self.store.delete_material(id).await? {
            tracing::debug!(material_id = %id, "Delete of unknown material ignored");
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Aggregates
    // -----------------------------------------------------------------------

    pub async fn subsystem_count(&self, project_id: DbId) -> ServiceResult<i64> {
        Ok(self.store.count_subsystems(project_id).await?)
    }

    /// Positions of all subsystems of the project.
    pub async fn position_count(&self, project_id: DbId) -> ServiceResult<i64> {
        Ok(self.store.count_positions(project_id).await?)
    }

    /// Material under all positions of the project. Material not assigned
    /// to a position is not counted.
    pub async fn material_count(&self, project_id: DbId) -> ServiceResult<i64> {
        Ok(self.store.count_material(project_id).await?)
    }

    /// The `limit` most recent creations under a project, newest first.
    pub async fn recent_activity(
        &self,
        project_id: DbId,
        limit: i64,
    ) -> ServiceResult<Vec<Activity>> {
        let rows = self.store.recent_activity(project_id, limit.max(0)).await?;
        Ok(rows.into_iter().map(activity::to_app).collect())
    }

    /// Counts and recent activity for a project's dashboard.
    pub async fn summary(&self, project_id: DbId) -> ServiceResult<ProjectSummary> {
        Ok(ProjectSummary {
            project_id,
            subsystem_count: self.subsystem_count(project_id).await?,
            position_count: self.position_count(project_id).await?,
            material_count: self.material_count(project_id).await?,
            recent_activity: self
                .recent_activity(project_id, SUMMARY_ACTIVITY_LIMIT)
                .await?,
        })
    }
}
