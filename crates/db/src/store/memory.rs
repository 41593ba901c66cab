//! [`Store`](super::Store) held in process memory.
//!
//! Tables live behind one `tokio::sync::RwLock`; every write takes the
//! write lock for its whole duration, so multi-row operations
//! (cascades, [`reserve_vehicle`](super::ReservationStore::reserve_vehicle))
//! are atomic. Keys, column defaults, unique constraints, foreign keys and
//! `ON DELETE` actions follow the migrations.

use std::cmp::Reverse;

use async_trait::async_trait;
use bauhub_core::status::VehicleStatus;
use bauhub_core::types::{DbId, Timestamp};
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use super::{
    ProfileStore, ProjectStore, ReservationStore, ReservedVehicle, SubsystemStore, SupplierStore,
    VehicleStore,
};
use crate::error::StoreError;
use crate::models::activity::{ActivityRow, ActivitySource};
use crate::models::material::{self, MaterialChanges, MaterialRow};
use crate::models::position::{self, PositionChanges, PositionRow};
use crate::models::profile::{ProfileChanges, ProfileRow};
use crate::models::project::{ProjectChanges, ProjectRow};
use crate::models::reservation::{self, ReservationChanges, ReservationRow};
use crate::models::subsystem::{self, SubsystemChanges, SubsystemRow};
use crate::models::supplier::{SupplierChanges, SupplierRow};
use crate::models::vehicle::{VehicleChanges, VehicleRow};

const UQ_PROJECT_NUMBER: &str = "uq_projekte_projektnummer";
const UQ_INVENTORY_NUMBER: &str = "uq_fahrzeuge_inventarnummer";
const PK_PROFILES: &str = "profiles_pkey";

#[derive(Debug, Default)]
struct Tables {
    projects: Vec<ProjectRow>,
    subsystems: Vec<SubsystemRow>,
    positions: Vec<PositionRow>,
    material: Vec<MaterialRow>,
    suppliers: Vec<SupplierRow>,
    vehicles: Vec<VehicleRow>,
    reservations: Vec<ReservationRow>,
    profiles: Vec<ProfileRow>,
    last_timestamp: Option<Timestamp>,
}

impl Tables {
    /// Wall-clock time, bumped so that no two writes share a timestamp.
    fn now(&mut self) -> Timestamp {
        let mut now = Utc::now();
        if let Some(last) = self.last_timestamp {
            if now <= last {
                now = last + Duration::microseconds(1);
            }
        }
        self.last_timestamp = Some(now);
        now
    }

    fn has_project(&self, id: DbId) -> bool {
        self.projects.iter().any(|r| r.id == id)
    }

    fn has_subsystem(&self, id: DbId) -> bool {
        self.subsystems.iter().any(|r| r.id == id)
    }

    fn has_position(&self, id: DbId) -> bool {
        self.positions.iter().any(|r| r.id == id)
    }

    fn has_supplier(&self, id: DbId) -> bool {
        self.suppliers.iter().any(|r| r.id == id)
    }

    fn has_vehicle(&self, id: DbId) -> bool {
        self.vehicles.iter().any(|r| r.id == id)
    }

    fn check_project_number(&self, number: &str, own_id: Option<DbId>) -> Result<(), StoreError> {
        let taken = self
            .projects
            .iter()
            .any(|r| r.projektnummer == number && Some(r.id) != own_id);
        if taken {
            return Err(StoreError::UniqueViolation {
                constraint: UQ_PROJECT_NUMBER,
            });
        }
        Ok(())
    }

    fn check_inventory_number(
        &self,
        number: &str,
        own_id: Option<DbId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .vehicles
            .iter()
            .any(|r| r.inventarnummer == number && Some(r.id) != own_id);
        if taken {
            return Err(StoreError::UniqueViolation {
                constraint: UQ_INVENTORY_NUMBER,
            });
        }
        Ok(())
    }

    fn check_subsystem_refs(&self, changes: &SubsystemChanges) -> Result<(), StoreError> {
        match changes.projekt_id {
            Some(id) if !self.has_project(id) => Err(fk(subsystem::TABLE, "projekt_id")),
            _ => Ok(()),
        }
    }

    fn check_position_refs(&self, changes: &PositionChanges) -> Result<(), StoreError> {
        match changes.teilsystem_id {
            Some(id) if !self.has_subsystem(id) => Err(fk(position::TABLE, "teilsystem_id")),
            _ => Ok(()),
        }
    }

    fn check_material_refs(&self, changes: &MaterialChanges) -> Result<(), StoreError> {
        if let Some(id) = changes.position_id {
            if !self.has_position(id) {
                return Err(fk(material::TABLE, "position_id"));
            }
        }
        if let Some(id) = changes.lieferant_id {
            if !self.has_supplier(id) {
                return Err(fk(material::TABLE, "lieferant_id"));
            }
        }
        Ok(())
    }

    fn check_reservation_refs(&self, changes: &ReservationChanges) -> Result<(), StoreError> {
        if let Some(id) = changes.fahrzeug_id {
            if !self.has_vehicle(id) {
                return Err(fk(reservation::TABLE, "fahrzeug_id"));
            }
        }
        if let Some(id) = changes.projekt_id {
            if !self.has_project(id) {
                return Err(fk(reservation::TABLE, "projekt_id"));
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Cascades
    // -----------------------------------------------------------------------

    fn remove_positions_where(&mut self, pred: impl Fn(&PositionRow) -> bool) {
        let removed: Vec<DbId> = self
            .positions
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.id)
            .collect();
        self.positions.retain(|r| !removed.contains(&r.id));
        self.material
            .retain(|m| m.position_id.map_or(true, |p| !removed.contains(&p)));
    }

    fn remove_subsystems_where(&mut self, pred: impl Fn(&SubsystemRow) -> bool) {
        let removed: Vec<DbId> = self
            .subsystems
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.id)
            .collect();
        self.subsystems.retain(|r| !removed.contains(&r.id));
        self.remove_positions_where(|p| removed.contains(&p.teilsystem_id));
    }

    /// Positions under a project, through their subsystem.
    fn project_position_ids(&self, project_id: DbId) -> Vec<DbId> {
        let subsystem_ids: Vec<DbId> = self
            .subsystems
            .iter()
            .filter(|s| s.projekt_id == project_id)
            .map(|s| s.id)
            .collect();
        self.positions
            .iter()
            .filter(|p| subsystem_ids.contains(&p.teilsystem_id))
            .map(|p| p.id)
            .collect()
    }
}

fn fk(table: &'static str, column: &'static str) -> StoreError {
    StoreError::ForeignKey { table, column }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// In-process store with the same observable semantics as [`PgStore`](super::PgStore).
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
        let mut rows = self.tables.read().await.projects.clone();
        rows.sort_by(|a, b| a.projektnummer.cmp(&b.projektnummer));
        Ok(rows)
    }

    async fn find_project(&self, id: DbId) -> Result<Option<ProjectRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_project(&self, changes: &ProjectChanges) -> Result<ProjectRow, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = ProjectRow::from_insert(DbId::new_v4(), now, changes)?;
        tables.check_project_number(&row.projektnummer, None)?;
        tables.projects.push(row.clone());
        Ok(row)
    }

    async fn update_project(
        &self,
        id: DbId,
        changes: &ProjectChanges,
    ) -> Result<Option<ProjectRow>, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.has_project(id) {
            return Ok(None);
        }
        if let Some(number) = &changes.projektnummer {
            tables.check_project_number(number, Some(id))?;
        }
        let now = tables.now();
        let row = tables.projects.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row, now);
            row.clone()
        }))
    }

    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.projects.len();
        tables.projects.retain(|r| r.id != id);
        if tables.projects.len() == before {
            return Ok(false);
        }
        let subsystems_before = tables.subsystems.len();
        tables.remove_subsystems_where(|s| s.projekt_id == id);
        tracing::debug!(
            project_id = %id,
            subsystems_removed = subsystems_before - tables.subsystems.len(),
            "Project removed with its subsystems",
        );
        for reservation in tables.reservations.iter_mut() {
            if reservation.projekt_id == Some(id) {
                reservation.projekt_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl SubsystemStore for MemoryStore {
    async fn list_subsystems(&self, project_id: DbId) -> Result<Vec<SubsystemRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<SubsystemRow> = tables
            .subsystems
            .iter()
            .filter(|r| r.projekt_id == project_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.teilsystem_nummer
                .cmp(&b.teilsystem_nummer)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(rows)
    }

    async fn find_subsystem(&self, id: DbId) -> Result<Option<SubsystemRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.subsystems.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_subsystem(
        &self,
        changes: &SubsystemChanges,
    ) -> Result<SubsystemRow, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = SubsystemRow::from_insert(DbId::new_v4(), now, changes)?;
        tables.check_subsystem_refs(changes)?;
        tables.subsystems.push(row.clone());
        Ok(row)
    }

    async fn update_subsystem(
        &self,
        id: DbId,
        changes: &SubsystemChanges,
    ) -> Result<Option<SubsystemRow>, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.has_subsystem(id) {
            return Ok(None);
        }
        tables.check_subsystem_refs(changes)?;
        let row = tables.subsystems.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_subsystem(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let existed = tables.has_subsystem(id);
        tables.remove_subsystems_where(|s| s.id == id);
        Ok(existed)
    }

    async fn list_positions(&self, subsystem_id: DbId) -> Result<Vec<PositionRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<PositionRow> = tables
            .positions
            .iter()
            .filter(|r| r.teilsystem_id == subsystem_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.created_at);
        Ok(rows)
    }

    async fn find_position(&self, id: DbId) -> Result<Option<PositionRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.positions.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_position(&self, changes: &PositionChanges) -> Result<PositionRow, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = PositionRow::from_insert(DbId::new_v4(), now, changes)?;
        tables.check_position_refs(changes)?;
        tables.positions.push(row.clone());
        Ok(row)
    }

    async fn update_position(
        &self,
        id: DbId,
        changes: &PositionChanges,
    ) -> Result<Option<PositionRow>, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.has_position(id) {
            return Ok(None);
        }
        tables.check_position_refs(changes)?;
        let row = tables.positions.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_position(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let existed = tables.has_position(id);
        tables.remove_positions_where(|p| p.id == id);
        Ok(existed)
    }

    async fn list_material(&self, position_id: DbId) -> Result<Vec<MaterialRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<MaterialRow> = tables
            .material
            .iter()
            .filter(|r| r.position_id == Some(position_id))
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.created_at);
        Ok(rows)
    }

    async fn find_material(&self, id: DbId) -> Result<Option<MaterialRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.material.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_material(&self, changes: &MaterialChanges) -> Result<MaterialRow, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = MaterialRow::from_insert(DbId::new_v4(), now, changes)?;
        tables.check_material_refs(changes)?;
        tables.material.push(row.clone());
        Ok(row)
    }

    async fn update_material(
        &self,
        id: DbId,
        changes: &MaterialChanges,
    ) -> Result<Option<MaterialRow>, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.material.iter().any(|r| r.id == id) {
            return Ok(None);
        }
        tables.check_material_refs(changes)?;
        let row = tables.material.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_material(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.material.len();
        tables.material.retain(|r| r.id != id);
        Ok(tables.material.len() < before)
    }

    async fn count_subsystems(&self, project_id: DbId) -> Result<i64, StoreError> {
        let tables = self.tables.read().await;
        let n = tables
            .subsystems
            .iter()
            .filter(|s| s.projekt_id == project_id)
            .count();
        Ok(count(n))
    }

    async fn count_positions(&self, project_id: DbId) -> Result<i64, StoreError> {
        let tables = self.tables.read().await;
        Ok(count(tables.project_position_ids(project_id).len()))
    }

    async fn count_material(&self, project_id: DbId) -> Result<i64, StoreError> {
        let tables = self.tables.read().await;
        let position_ids = tables.project_position_ids(project_id);
        let n = tables
            .material
            .iter()
            .filter(|m| m.position_id.is_some_and(|p| position_ids.contains(&p)))
            .count();
        Ok(count(n))
    }

    async fn recent_activity(
        &self,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRow>, StoreError> {
        let tables = self.tables.read().await;
        let position_ids = tables.project_position_ids(project_id);

        let subsystems = tables
            .subsystems
            .iter()
            .filter(|s| s.projekt_id == project_id)
            .map(|s| (ActivitySource::Subsystem, s.id, &s.name, s.created_at));
        let positions = tables
            .positions
            .iter()
            .filter(|p| position_ids.contains(&p.id))
            .map(|p| (ActivitySource::Position, p.id, &p.name, p.created_at));
        let material = tables
            .material
            .iter()
            .filter(|m| m.position_id.is_some_and(|p| position_ids.contains(&p)))
            .map(|m| (ActivitySource::Material, m.id, &m.name, m.created_at));

        let mut rows: Vec<ActivityRow> = subsystems
            .chain(positions)
            .chain(material)
            .map(|(source, id, name, created_at)| ActivityRow {
                source,
                id,
                name: name.clone(),
                created_at,
            })
            .collect();
        rows.sort_by_key(|r| (Reverse(r.created_at), r.id));
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }
}

#[async_trait]
impl SupplierStore for MemoryStore {
    async fn list_suppliers(&self) -> Result<Vec<SupplierRow>, StoreError> {
        let mut rows = self.tables.read().await.suppliers.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_supplier(&self, id: DbId) -> Result<Option<SupplierRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.suppliers.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_supplier(&self, changes: &SupplierChanges) -> Result<SupplierRow, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = SupplierRow::from_insert(DbId::new_v4(), now, changes)?;
        tables.suppliers.push(row.clone());
        Ok(row)
    }

    async fn update_supplier(
        &self,
        id: DbId,
        changes: &SupplierChanges,
    ) -> Result<Option<SupplierRow>, StoreError> {
        let mut tables = self.tables.write().await;
        let row = tables.suppliers.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_supplier(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.suppliers.len();
        tables.suppliers.retain(|r| r.id != id);
        if tables.suppliers.len() == before {
            return Ok(false);
        }
        for material in tables.material.iter_mut() {
            if material.lieferant_id == Some(id) {
                material.lieferant_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl VehicleStore for MemoryStore {
    async fn list_vehicles(&self) -> Result<Vec<VehicleRow>, StoreError> {
        let mut rows = self.tables.read().await.vehicles.clone();
        rows.sort_by(|a, b| a.bezeichnung.cmp(&b.bezeichnung));
        Ok(rows)
    }

    async fn find_vehicle(&self, id: DbId) -> Result<Option<VehicleRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.vehicles.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_vehicle(&self, changes: &VehicleChanges) -> Result<VehicleRow, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = VehicleRow::from_insert(DbId::new_v4(), now, changes)?;
        tables.check_inventory_number(&row.inventarnummer, None)?;
        tables.vehicles.push(row.clone());
        Ok(row)
    }

    async fn update_vehicle(
        &self,
        id: DbId,
        changes: &VehicleChanges,
    ) -> Result<Option<VehicleRow>, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.has_vehicle(id) {
            return Ok(None);
        }
        if let Some(number) = &changes.inventarnummer {
            tables.check_inventory_number(number, Some(id))?;
        }
        let row = tables.vehicles.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_vehicle(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.vehicles.len();
        tables.vehicles.retain(|r| r.id != id);
        if tables.vehicles.len() == before {
            return Ok(false);
        }
        tables.reservations.retain(|r| r.fahrzeug_id != id);
        Ok(true)
    }
}

fn sort_reservations(rows: &mut [ReservationRow]) {
    rows.sort_by_key(|r| (r.reserviert_ab, r.created_at));
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn list_reservations(&self) -> Result<Vec<ReservationRow>, StoreError> {
        let mut rows = self.tables.read().await.reservations.clone();
        sort_reservations(&mut rows);
        Ok(rows)
    }

    async fn list_reservations_for_vehicle(
        &self,
        vehicle_id: DbId,
    ) -> Result<Vec<ReservationRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<ReservationRow> = tables
            .reservations
            .iter()
            .filter(|r| r.fahrzeug_id == vehicle_id)
            .cloned()
            .collect();
        sort_reservations(&mut rows);
        Ok(rows)
    }

    async fn list_reservations_for_project(
        &self,
        project_id: DbId,
    ) -> Result<Vec<ReservationRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<ReservationRow> = tables
            .reservations
            .iter()
            .filter(|r| r.projekt_id == Some(project_id))
            .cloned()
            .collect();
        sort_reservations(&mut rows);
        Ok(rows)
    }

    async fn find_reservation(&self, id: DbId) -> Result<Option<ReservationRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn reserve_vehicle(
        &self,
        changes: &ReservationChanges,
    ) -> Result<ReservedVehicle, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let reservation = ReservationRow::from_insert(DbId::new_v4(), now, changes)?;
        tables.check_reservation_refs(changes)?;

        let mut vehicle_status_changed = false;
        if let Some(vehicle) = tables
            .vehicles
            .iter_mut()
            .find(|v| v.id == reservation.fahrzeug_id)
        {
            if vehicle.status != VehicleStatus::Reserved {
                vehicle.status = VehicleStatus::Reserved;
                vehicle_status_changed = true;
            }
        }
        tables.reservations.push(reservation.clone());

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
        let mut tables = self.tables.write().await;
        if !tables.reservations.iter().any(|r| r.id == id) {
            return Ok(None);
        }
        tables.check_reservation_refs(changes)?;
        let row = tables.reservations.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_reservation(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.reservations.len();
        tables.reservations.retain(|r| r.id != id);
        Ok(tables.reservations.len() < before)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn list_profiles(&self) -> Result<Vec<ProfileRow>, StoreError> {
        let mut rows = self.tables.read().await.profiles.clone();
        rows.sort_by(|a, b| {
            a.nachname
                .cmp(&b.nachname)
                .then_with(|| a.vorname.cmp(&b.vorname))
        });
        Ok(rows)
    }

    async fn find_profile(&self, id: DbId) -> Result<Option<ProfileRow>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.profiles.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_profile(&self, changes: &ProfileChanges) -> Result<ProfileRow, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = ProfileRow::from_insert(now, changes)?;
        if tables.profiles.iter().any(|r| r.id == row.id) {
            return Err(StoreError::UniqueViolation {
                constraint: PK_PROFILES,
            });
        }
        tables.profiles.push(row.clone());
        Ok(row)
    }

    async fn update_profile(
        &self,
        id: DbId,
        changes: &ProfileChanges,
    ) -> Result<Option<ProfileRow>, StoreError> {
        let mut tables = self.tables.write().await;
        let now = tables.now();
        let row = tables.profiles.iter_mut().find(|r| r.id == id);
        Ok(row.map(|row| {
            changes.apply_to(row, now);
            row.clone()
        }))
    }

    async fn delete_profile(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.profiles.len();
        tables.profiles.retain(|r| r.id != id);
        Ok(tables.profiles.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
