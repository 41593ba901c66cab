//! The store seam between services and persistence.
//!
//! One trait per aggregate, all speaking row types and `*Changes`
//! partials. [`Store`] is the union of them and is what services hold
//! (as `Arc<dyn Store>`). Two backends implement it:
//!
//! - [`PgStore`]: PostgreSQL through the SQL repositories.
//! - [`MemoryStore`]: in-process tables enforcing the same keys, defaults
//!   and cascades, for tests and local runs without a database.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use bauhub_core::types::DbId;

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

/// Result of [`ReservationStore::reserve_vehicle`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReservedVehicle {
    pub reservation: ReservationRow,
    /// `false` when the vehicle was already `reserviert`.
    pub vehicle_status_changed: bool,
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectRow>, StoreError>;
    async fn find_project(&self, id: DbId) -> Result<Option<ProjectRow>, StoreError>;
    async fn insert_project(&self, changes: &ProjectChanges) -> Result<ProjectRow, StoreError>;
    async fn update_project(
        &self,
        id: DbId,
        changes: &ProjectChanges,
    ) -> Result<Option<ProjectRow>, StoreError>;
    /// Returns `false` when no row matched.
    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError>;
}

/// Subsystems, their positions and material, and the per-project
/// aggregates over that chain.
#[async_trait]
pub trait SubsystemStore: Send + Sync {
    async fn list_subsystems(&self, project_id: DbId) -> Result<Vec<SubsystemRow>, StoreError>;
    async fn find_subsystem(&self, id: DbId) -> Result<Option<SubsystemRow>, StoreError>;
    async fn insert_subsystem(
        &self,
        changes: &SubsystemChanges,
    ) -> Result<SubsystemRow, StoreError>;
    async fn update_subsystem(
        &self,
        id: DbId,
        changes: &SubsystemChanges,
    ) -> Result<Option<SubsystemRow>, StoreError>;
    async fn delete_subsystem(&self, id: DbId) -> Result<bool, StoreError>;

    async fn list_positions(&self, subsystem_id: DbId) -> Result<Vec<PositionRow>, StoreError>;
    async fn find_position(&self, id: DbId) -> Result<Option<PositionRow>, StoreError>;
    async fn insert_position(&self, changes: &PositionChanges) -> Result<PositionRow, StoreError>;
    async fn update_position(
        &self,
        id: DbId,
        changes: &PositionChanges,
    ) -> Result<Option<PositionRow>, StoreError>;
    async fn delete_position(&self, id: DbId) -> Result<bool, StoreError>;

    async fn list_material(&self, position_id: DbId) -> Result<Vec<MaterialRow>, StoreError>;
    async fn find_material(&self, id: DbId) -> Result<Option<MaterialRow>, StoreError>;
    async fn insert_material(&self, changes: &MaterialChanges) -> Result<MaterialRow, StoreError>;
    async fn update_material(
        &self,
        id: DbId,
        changes: &MaterialChanges,
    ) -> Result<Option<MaterialRow>, StoreError>;
    async fn delete_material(&self, id: DbId) -> Result<bool, StoreError>;

    async fn count_subsystems(&self, project_id: DbId) -> Result<i64, StoreError>;
    async fn count_positions(&self, project_id: DbId) -> Result<i64, StoreError>;
    async fn count_material(&self, project_id: DbId) -> Result<i64, StoreError>;
    /// Newest `limit` subsystem/position/material creations under a project.
    async fn recent_activity(
        &self,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRow>, StoreError>;
}

#[async_trait]
pub trait SupplierStore: Send + Sync {
    async fn list_suppliers(&self) -> Result<Vec<SupplierRow>, StoreError>;
    async fn find_supplier(&self, id: DbId) -> Result<Option<SupplierRow>, StoreError>;
    async fn insert_supplier(&self, changes: &SupplierChanges) -> Result<SupplierRow, StoreError>;
    async fn update_supplier(
        &self,
        id: DbId,
        changes: &SupplierChanges,
    ) -> Result<Option<SupplierRow>, StoreError>;
    async fn delete_supplier(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn list_vehicles(&self) -> Result<Vec<VehicleRow>, StoreError>;
    async fn find_vehicle(&self, id: DbId) -> Result<Option<VehicleRow>, StoreError>;
    async fn insert_vehicle(&self, changes: &VehicleChanges) -> Result<VehicleRow, StoreError>;
    async fn update_vehicle(
        &self,
        id: DbId,
        changes: &VehicleChanges,
    ) -> Result<Option<VehicleRow>, StoreError>;
    async fn delete_vehicle(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn list_reservations(&self) -> Result<Vec<ReservationRow>, StoreError>;
    async fn list_reservations_for_vehicle(
        &self,
        vehicle_id: DbId,
    ) -> Result<Vec<ReservationRow>, StoreError>;
    async fn list_reservations_for_project(
        &self,
        project_id: DbId,
    ) -> Result<Vec<ReservationRow>, StoreError>;
    async fn find_reservation(&self, id: DbId) -> Result<Option<ReservationRow>, StoreError>;
    /// Insert the reservation and set its vehicle to `reserviert` as one
    /// atomic operation.
    async fn reserve_vehicle(
        &self,
        changes: &ReservationChanges,
    ) -> Result<ReservedVehicle, StoreError>;
    async fn update_reservation(
        &self,
        id: DbId,
        changes: &ReservationChanges,
    ) -> Result<Option<ReservationRow>, StoreError>;
    async fn delete_reservation(&self, id: DbId) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn list_profiles(&self) -> Result<Vec<ProfileRow>, StoreError>;
    async fn find_profile(&self, id: DbId) -> Result<Option<ProfileRow>, StoreError>;
    async fn insert_profile(&self, changes: &ProfileChanges) -> Result<ProfileRow, StoreError>;
    async fn update_profile(
        &self,
        id: DbId,
        changes: &ProfileChanges,
    ) -> Result<Option<ProfileRow>, StoreError>;
    async fn delete_profile(&self, id: DbId) -> Result<bool, StoreError>;
}

/// Every store capability the services need.
pub trait Store:
    ProjectStore + SubsystemStore + SupplierStore + VehicleStore + ReservationStore + ProfileStore
{
}

impl<T> Store for T where
    T: ProjectStore + SubsystemStore + SupplierStore + VehicleStore + ReservationStore + ProfileStore
{
}
