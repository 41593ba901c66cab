//! Fleet: vehicles and their reservations.

use std::sync::Arc;

use bauhub_core::error::CoreError;
use bauhub_core::models::reservation::{
    validate_date_range, NewReservation, Reservation, ReservationPatch,
};
use bauhub_core::models::vehicle::{NewVehicle, Vehicle, VehiclePatch};
use bauhub_core::session::Session;
use bauhub_core::types::{Date, DbId};
use bauhub_db::mappers::{reservation, vehicle};
use bauhub_db::Store;
use validator::Validate;

use crate::error::ServiceResult;

#[derive(Clone)]
pub struct FleetService {
    store: Arc<dyn Store>,
}

impl FleetService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    // -----------------------------------------------------------------------
    // Vehicles
    // -----------------------------------------------------------------------

    /// The whole fleet ordered by designation.
    pub async fn list_vehicles(&self) -> ServiceResult<Vec<Vehicle>> {
        let rows = self.store.list_vehicles().await?;
        Ok(rows.into_iter().map(vehicle::to_app).collect())
    }

    pub async fn get_vehicle(&self, id: DbId) -> ServiceResult<Option<Vehicle>> {
        Ok(self.store.find_vehicle(id).await?.map(vehicle::to_app))
    }

    pub async fn create_vehicle(&self, input: NewVehicle) -> ServiceResult<Vehicle> {
        input.validate()?;
        let row = self.store.insert_vehicle(&vehicle::to_db(&input.into())).await?;
        tracing::info!(
            vehicle_id = %row.id,
            inventory_number = %row.inventarnummer,
            category = %row.kategorie,
            "Vehicle created",
        );
        Ok(vehicle::to_app(row))
    }

    pub async fn update_vehicle(&self, id: DbId, patch: VehiclePatch) -> ServiceResult<Vehicle> {
        patch.validate()?;
        let row = self
            .store
            .update_vehicle(id, &vehicle::to_db(&patch))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Vehicle",
                id,
            })?;
        Ok(vehicle::to_app(row))
    }

    /// Delete a vehicle together with its reservations.
    pub async fn delete_vehicle(&self, id: DbId) -> ServiceResult<()> {
        if self.store.delete_vehicle(id).await? {
            tracing::info!(vehicle_id = %id, "Vehicle deleted");
        } else {
            tracing::debug!(vehicle_id = %id, "Delete of unknown vehicle ignored");
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reservations
    // -----------------------------------------------------------------------

    /// All reservations ordered by start date.
    pub async fn list_reservations(&self) -> ServiceResult<Vec<Reservation>> {
        let rows = self.store.list_reservations().await?;
        Ok(rows.into_iter().map(reservation::to_app).collect())
    }

    pub async fn reservations_for_vehicle(&self, vehicle_id: DbId) -> ServiceResult<Vec<Reservation>> {
        let rows = self.store.list_reservations_for_vehicle(vehicle_id).await?;
        Ok(rows.into_iter().map(reservation::to_app).collect())
    }

    pub async fn reservations_for_project(&self, project_id: DbId) -> ServiceResult<Vec<Reservation>> {
        let rows = self.store.list_reservations_for_project(project_id).await?;
        Ok(rows.into_iter().map(reservation::to_app).collect())
    }

    pub async fn get_reservation(&self, id: DbId) -> ServiceResult<Option<Reservation>> {
        Ok(self.store.find_reservation(id).await?.map(reservation::to_app))
    }

    /// Reserve a vehicle and mark it `reserviert` if it is not already.
    ///
    /// Omitted `project_id` and `reserved_by` are taken from the session.
    /// Overlapping reservations are accepted; they are only logged.
    pub async fn create_reservation(
        &self,
        session: &Session,
        input: NewReservation,
    ) -> ServiceResult<Reservation> {
        input.validate()?;
        validate_date_range(input.starts_on, input.ends_on)?;

        let mut patch = ReservationPatch::from(input);
        if patch.project_id.is_none() {
            patch.project_id = session.active_project_id();
        }
        if patch.reserved_by.is_none() {
            patch.reserved_by = session.actor_name();
        }

        if let (Some(vehicle_id), Some(starts_on)) = (patch.vehicle_id, patch.starts_on) {
            self.warn_on_overlap(vehicle_id, starts_on, patch.ends_on).await?;
        }

        let reserved = self
            .store
            .reserve_vehicle(&reservation::to_db(&patch))
            .await?;
        tracing::info!(
            reservation_id = %reserved.reservation.id,
            vehicle_id = %reserved.reservation.fahrzeug_id,
            project_id = ?reserved.reservation.projekt_id,
            vehicle_status_changed = reserved.vehicle_status_changed,
            "Vehicle reserved",
        );
        Ok(reservation::to_app(reserved.reservation))
    }

    /// Update a reservation. Dates are checked against the stored row so a
    /// patch touching only one end cannot invert the range.
    pub async fn update_reservation(
        &self,
        id: DbId,
        patch: ReservationPatch,
    ) -> ServiceResult<Reservation> {
        patch.validate()?;
        let not_found = || CoreError::NotFound {
            entity: "Reservation",
            id,
        };

        if patch.starts_on.is_some() || patch.ends_on.is_some() {
            let current = self.store.find_reservation(id).await?.ok_or_else(not_found)?;
            validate_date_range(
                patch.starts_on.unwrap_or(current.reserviert_ab),
                patch.ends_on.or(current.reserviert_bis),
            )?;
        }

        let row = self
            .store
            .update_reservation(id, &reservation::to_db(&patch))
            .await?
            .ok_or_else(not_found)?;
        Ok(reservation::to_app(row))
    }

    /// Delete a reservation. The vehicle keeps its status.
    ///
    /// Deleting an unknown id succeeds without effect.
    pub async fn delete_reservation(&self, id: DbId) -> ServiceResult<()> {
        if !self.store.delete_reservation(id).await? {
            tracing::debug!(reservation_id = %id, "Delete of unknown reservation ignored");
        }
        Ok(())
    }

    async fn warn_on_overlap(
        &self,
        vehicle_id: DbId,
        starts_on: Date,
        ends_on: Option<Date>,
    ) -> ServiceResult<()> {
        let overlapping = self
            .reservations_for_vehicle(vehicle_id)
            .await?
            .iter()
            .filter(|r| r.overlaps(starts_on, ends_on))
            .count();
        if overlapping > 0 {
            tracing::warn!(
                vehicle_id = %vehicle_id,
                %starts_on,
                ends_on = ?ends_on,
                overlapping,
                "Reservation overlaps existing reservations of the vehicle",
            );
        }
        Ok(())
    }
}
