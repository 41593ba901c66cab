//! Repository for the `fahrzeug_reservierungen` table.

use bauhub_core::status::VehicleStatus;
use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::{ReservationChanges, ReservationRow};

const COLUMNS: &str = "id, fahrzeug_id, projekt_id, baustelle, reserviert_ab, reserviert_bis, \
     reserviert_durch, bemerkung, created_at";

/// Provides CRUD operations for vehicle reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a reservation and mark its vehicle reserved, in one transaction.
    ///
    /// Returns the created row and whether the vehicle status changed. A
    /// vehicle that is already `reserviert` is left untouched. A missing
    /// vehicle fails the insert with a foreign-key violation and nothing
    /// is written.
    pub async fn reserve_vehicle(
        pool: &PgPool,
        input: &ReservationChanges,
    ) -> Result<(ReservationRow, bool), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO fahrzeug_reservierungen (fahrzeug_id, projekt_id, baustelle,
                reserviert_ab, reserviert_bis, reserviert_durch, bemerkung)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let reservation = sqlx::query_as::<_, ReservationRow>(&insert_query)
            .bind(input.fahrzeug_id)
            .bind(input.projekt_id)
            .bind(&input.baustelle)
            .bind(input.reserviert_ab)
            .bind(input.reserviert_bis)
            .bind(&input.reserviert_durch)
            .bind(&input.bemerkung)
            .fetch_one(&mut *tx)
            .await?;

        let reserved = VehicleStatus::Reserved.as_str();
        let result = sqlx::query("UPDATE fahrzeuge SET status = $2 WHERE id = $1 AND status <> $2")
            .bind(reservation.fahrzeug_id)
            .bind(reserved)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((reservation, result.rows_affected() > 0))
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ReservationRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fahrzeug_reservierungen WHERE id = $1");
        sqlx::query_as::<_, ReservationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reservations ordered by start date.
    pub async fn list(pool: &PgPool) -> Result<Vec<ReservationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fahrzeug_reservierungen ORDER BY reserviert_ab, created_at"
        );
        sqlx::query_as::<_, ReservationRow>(&query).fetch_all(pool).await
    }

    pub async fn list_by_vehicle(
        pool: &PgPool,
        vehicle_id: DbId,
    ) -> Result<Vec<ReservationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fahrzeug_reservierungen WHERE fahrzeug_id = $1
             ORDER BY reserviert_ab, created_at"
        );
        sqlx::query_as::<_, ReservationRow>(&query)
            .bind(vehicle_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ReservationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fahrzeug_reservierungen WHERE projekt_id = $1
             ORDER BY reserviert_ab, created_at"
        );
        sqlx::query_as::<_, ReservationRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a reservation. Only non-`None` fields in `input` are applied.
    ///
    /// Does not touch the vehicle status, even when the reservation moves
    /// to another vehicle.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ReservationChanges,
    ) -> Result<Option<ReservationRow>, sqlx::Error> {
        let query = format!(
            "UPDATE fahrzeug_reservierungen SET
                fahrzeug_id = COALESCE($2, fahrzeug_id),
                projekt_id = COALESCE($3, projekt_id),
                baustelle = COALESCE($4, baustelle),
                reserviert_ab = COALESCE($5, reserviert_ab),
                reserviert_bis = COALESCE($6, reserviert_bis),
                reserviert_durch = COALESCE($7, reserviert_durch),
                bemerkung = COALESCE($8, bemerkung)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReservationRow>(&query)
            .bind(id)
            .bind(input.fahrzeug_id)
            .bind(input.projekt_id)
            .bind(&input.baustelle)
            .bind(input.reserviert_ab)
            .bind(input.reserviert_bis)
            .bind(&input.reserviert_durch)
            .bind(&input.bemerkung)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a reservation. The vehicle status is not reset.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fahrzeug_reservierungen WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
