//! [`Store`](super::Store) backed by PostgreSQL.

use async_trait::async_trait;
use bauhub_core::types::DbId;
use sqlx::PgPool;

use super::{
    ProfileStore, ProjectStore, ReservationStore, ReservedVehicle, SubsystemStore, SupplierStore,
    VehicleStore,
};
use crate::error::StoreError;
use crate::models::activity::ActivityRow;
use crate::models::material::{MaterialChanges, MaterialRow};
use crate::models::position::{PositionChanges, PositionRow};
use crate::models::profile::{ProfileChanges, ProfileRow};
use crate::models::project::{ProjectChanges, ProjectRow};
use crate::models::reservation::{ReservationChanges, ReservationRow};
use crate::models::subsystem::{SubsystemChanges, SubsystemRow};
use crate::models::supplier::{SupplierChanges, SupplierRow};
use crate::models::vehicle::{VehicleChanges, VehicleRow};
use crate::repositories::{
    ActivityRepo, MaterialRepo, PositionRepo, ProfileRepo, ProjectRepo, ReservationRepo,
    SubsystemRepo, SupplierRepo, VehicleRepo,
};

/// Delegates every operation to the SQL repositories on a shared pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn list_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project(&self, id: DbId) -> Result<Option<ProjectRow>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_project(&self, changes: &ProjectChanges) -> Result<ProjectRow, StoreError> {
        Ok(ProjectRepo::create(&self.pool, changes).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        changes: &ProjectChanges,
    ) -> Result<Option<ProjectRow>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::hard_delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl SubsystemStore for PgStore {
    async fn list_subsystems(&self, project_id: DbId) -> Result<Vec<SubsystemRow>, StoreError> {
        Ok(SubsystemRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn find_subsystem(&self, id: DbId) -> Result<Option<SubsystemRow>, StoreError> {
        Ok(SubsystemRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_subsystem(
        &self,
        changes: &SubsystemChanges,
    ) -> Result<SubsystemRow, StoreError> {
        Ok(SubsystemRepo::create(&self.pool, changes).await?)
    }

    async fn update_subsystem(
        &self,
        id: DbId,
        changes: &SubsystemChanges,
    ) -> Result<Option<SubsystemRow>, StoreError> {
        Ok(SubsystemRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_subsystem(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(SubsystemRepo::hard_delete(&self.pool, id).await?)
    }

    async fn list_positions(&self, subsystem_id: DbId) -> Result<Vec<PositionRow>, StoreError> {
        Ok(PositionRepo::list_by_subsystem(&self.pool, subsystem_id).await?)
    }

    async fn find_position(&self, id: DbId) -> Result<Option<PositionRow>, StoreError> {
        Ok(PositionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_position(&self, changes: &PositionChanges) -> Result<PositionRow, StoreError> {
        Ok(PositionRepo::create(&self.pool, changes).await?)
    }

    async fn update_position(
        &self,
        id: DbId,
        changes: &PositionChanges,
    ) -> Result<Option<PositionRow>, StoreError> {
        Ok(PositionRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_position(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(PositionRepo::hard_delete(&self.pool, id).await?)
    }

    async fn list_material(&self, position_id: DbId) -> Result<Vec<MaterialRow>, StoreError> {
        Ok(MaterialRepo::list_by_position(&self.pool, position_id).await?)
    }

    async fn find_material(&self, id: DbId) -> Result<Option<MaterialRow>, StoreError> {
        Ok(MaterialRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_material(&self, changes: &MaterialChanges) -> Result<MaterialRow, StoreError> {
        Ok(MaterialRepo::create(&self.pool, changes).await?)
    }

    async fn update_material(
        &self,
        id: DbId,
        changes: &MaterialChanges,
    ) -> Result<Option<MaterialRow>, StoreError> {
        Ok(MaterialRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_material(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(MaterialRepo::hard_delete(&self.pool, id).await?)
    }

    async fn count_subsystems(&self, project_id: DbId) -> Result<i64, StoreError> {
        Ok(SubsystemRepo::count_subsystems(&self.pool, project_id).await?)
    }

    async fn count_positions(&self, project_id: DbId) -> Result<i64, StoreError> {
        Ok(SubsystemRepo::count_positions(&self.pool, project_id).await?)
    }

    async fn count_material(&self, project_id: DbId) -> Result<i64, StoreError> {
        Ok(SubsystemRepo::count_material(&self.pool, project_id).await?)
    }

    async fn recent_activity(
        &self,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRow>, StoreError> {
        Ok(ActivityRepo::recent_for_project(&self.pool, project_id, limit).await?)
    }
}

#[async_trait]
impl SupplierStore for PgStore {
    async fn list_suppliers(&self) -> Result<Vec<SupplierRow>, StoreError> {
        Ok(SupplierRepo::list(&self.pool).await?)
    }

    async fn find_supplier(&self, id: DbId) -> Result<Option<SupplierRow>, StoreError> {
        Ok(SupplierRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_supplier(&self, changes: &SupplierChanges) -> Result<SupplierRow, StoreError> {
        Ok(SupplierRepo::create(&self.pool, changes).await?)
    }

    async fn update_supplier(
        &self,
        id: DbId,
        changes: &SupplierChanges,
    ) -> Result<Option<SupplierRow>, StoreError> {
        Ok(SupplierRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_supplier(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(SupplierRepo::hard_delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl VehicleStore for PgStore {
    async fn list_vehicles(&self) -> Result<Vec<VehicleRow>, StoreError> {
        Ok(VehicleRepo::list(&self.pool).await?)
    }

    async fn find_vehicle(&self, id: DbId) -> Result<Option<VehicleRow>, StoreError> {
        Ok(VehicleRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_vehicle(&self, changes: &VehicleChanges) -> Result<VehicleRow, StoreError> {
        Ok(VehicleRepo::create(&self.pool, changes).await?)
    }

    async fn update_vehicle(
        &self,
        id: DbId,
        changes: &VehicleChanges,
    ) -> Result<Option<VehicleRow>, StoreError> {
        Ok(VehicleRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_vehicle(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(VehicleRepo::hard_delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl ReservationStore for PgStore {
    async fn list_reservations(&self) -> Result<Vec<ReservationRow>, StoreError> {
        Ok(ReservationRepo::list(&self.pool).await?)
    }

    async fn list_reservations_for_vehicle(
        &self,
        vehicle_id: DbId,
    ) -> Result<Vec<ReservationRow>, StoreError> {
        Ok(ReservationRepo::list_by_vehicle(&self.pool, vehicle_id).await?)
    }

    async fn list_reservations_for_project(
        &self,
        project_id: DbId,
    ) -> Result<Vec<ReservationRow>, StoreError> {
        Ok(ReservationRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn find_reservation(&self, id: DbId) -> Result<Option<ReservationRow>, StoreError> {
        Ok(ReservationRepo::find_by_id(&self.pool, id).await?)
    }

    async fn reserve_vehicle(
        &self,
        changes: &ReservationChanges,
    ) -> Result<ReservedVehicle, StoreError> {
        let (reservation, vehicle_status_changed) =
            ReservationRepo::reserve_vehicle(&self.pool, changes).await?;
        tracing::debug!(
            reservation_id = %reservation.id,
            vehicle_id = %reservation.fahrzeug_id,
            vehicle_status_changed,
            "Vehicle reservation committed",
        );
        Ok(ReservedVehicle {
            reservation,
            vehicle_status_changed,
        })
    }

    async fn update_reservation(
        &self,
        id: DbId,
        changes: &ReservationChanges,
    ) -> Result<Option<ReservationRow>, StoreError> {
        Ok(ReservationRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_reservation(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ReservationRepo::hard_delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn list_profiles(&self) -> Result<Vec<ProfileRow>, StoreError> {
        Ok(ProfileRepo::list(&self.pool).await?)
    }

    async fn find_profile(&self, id: DbId) -> Result<Option<ProfileRow>, StoreError> {
        Ok(ProfileRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_profile(&self, changes: &ProfileChanges) -> Result<ProfileRow, StoreError> {
        Ok(ProfileRepo::create(&self.pool, changes).await?)
    }

    async fn update_profile(
        &self,
        id: DbId,
        changes: &ProfileChanges,
    ) -> Result<Option<ProfileRow>, StoreError> {
        Ok(ProfileRepo::update(&self.pool, id, changes).await?)
    }

    async fn delete_profile(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProfileRepo::hard_delete(&self.pool, id).await?)
    }
}
