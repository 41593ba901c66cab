//! Repository for the `fahrzeuge` table.

use bauhub_core::status::{VehicleCategory, VehicleStatus};
use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle::{VehicleChanges, VehicleRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, bezeichnung, kategorie, inventarnummer, fabrikat, typ, \
     seriennummer, farbe, kennzeichen, plattformhoehe, masse, leistung, gewicht, reichweite, \
     nutzlast, antrieb, baujahr, spez_hinweis, kaufjahr, geprueft_bis, abgaswartung, status, \
     bemerkung, created_at";

/// Provides CRUD operations for fleet vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `verfuegbar`.
    pub async fn create(pool: &PgPool, input: &VehicleChanges) -> Result<VehicleRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO fahrzeuge (bezeichnung, kategorie, inventarnummer, fabrikat, typ,
                seriennummer, farbe, kennzeichen, plattformhoehe, masse, leistung, gewicht,
                reichweite, nutzlast, antrieb, baujahr, spez_hinweis, kaufjahr, geprueft_bis,
                abgaswartung, status, bemerkung)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                $17, $18, $19, $20, COALESCE($21, 'verfuegbar'), $22)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VehicleRow>(&query)
            .bind(&input.bezeichnung)
            .bind(input.kategorie.map(VehicleCategory::as_str))
            .bind(&input.inventarnummer)
            .bind(&input.fabrikat)
            .bind(&input.typ)
            .bind(&input.seriennummer)
            .bind(&input.farbe)
            .bind(&input.kennzeichen)
            .bind(&input.plattformhoehe)
            .bind(&input.masse)
            .bind(&input.leistung)
            .bind(&input.gewicht)
            .bind(&input.reichweite)
            .bind(&input.nutzlast)
            .bind(&input.antrieb)
            .bind(input.baujahr)
            .bind(&input.spez_hinweis)
            .bind(&input.kaufjahr)
            .bind(&input.geprueft_bis)
            .bind(&input.abgaswartung)
            .bind(input.status.map(VehicleStatus::as_str))
            .bind(&input.bemerkung)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VehicleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fahrzeuge WHERE id = $1");
        sqlx::query_as::<_, VehicleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the whole fleet ordered by designation.
    pub async fn list(pool: &PgPool) -> Result<Vec<VehicleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fahrzeuge ORDER BY bezeichnung");
        sqlx::query_as::<_, VehicleRow>(&query).fetch_all(pool).await
    }

    /// Update a vehicle. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VehicleChanges,
    ) -> Result<Option<VehicleRow>, sqlx::Error> {
        let query = format!(
            "UPDATE fahrzeuge SET
                bezeichnung = COALESCE($2, bezeichnung),
                kategorie = COALESCE($3, kategorie),
                inventarnummer = COALESCE($4, inventarnummer),
                fabrikat = COALESCE($5, fabrikat),
                typ = COALESCE($6, typ),
                seriennummer = COALESCE($7, seriennummer),
                farbe = COALESCE($8, farbe),
                kennzeichen = COALESCE($9, kennzeichen),
                plattformhoehe = COALESCE($10, plattformhoehe),
                masse = COALESCE($11, masse),
                leistung = COALESCE($12, leistung),
                gewicht = COALESCE($13, gewicht),
                reichweite = COALESCE($14, reichweite),
                nutzlast = COALESCE($15, nutzlast),
                antrieb = COALESCE($16, antrieb),
                baujahr = COALESCE($17, baujahr),
                spez_hinweis = COALESCE($18, spez_hinweis),
                kaufjahr = COALESCE($19, kaufjahr),
                geprueft_bis = COALESCE($20, geprueft_bis),
                abgaswartung = COALESCE($21, abgaswartung),
                status = COALESCE($22, status),
                bemerkung = COALESCE($23, bemerkung)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VehicleRow>(&query)
            .bind(id)
            .bind(&input.bezeichnung)
            .bind(input.kategorie.map(VehicleCategory::as_str))
            .bind(&input.inventarnummer)
            .bind(&input.fabrikat)
            .bind(&input.typ)
            .bind(&input.seriennummer)
            .bind(&input.farbe)
            .bind(&input.kennzeichen)
            .bind(&input.plattformhoehe)
            .bind(&input.masse)
            .bind(&input.leistung)
            .bind(&input.gewicht)
            .bind(&input.reichweite)
            .bind(&input.nutzlast)
            .bind(&input.antrieb)
            .bind(input.baujahr)
            .bind(&input.spez_hinweis)
            .bind(&input.kaufjahr)
            .bind(&input.geprueft_bis)
            .bind(&input.abgaswartung)
            .bind(input.status.map(VehicleStatus::as_str))
            .bind(&input.bemerkung)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a vehicle. Its reservations cascade.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fahrzeuge WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
