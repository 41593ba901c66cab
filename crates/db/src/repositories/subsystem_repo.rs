//! Repository for the `teilsysteme` table, plus the per-project counts
//! along the material → position → subsystem → project chain.

use bauhub_core::status::ItemStatus;
use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::subsystem::{SubsystemChanges, SubsystemRow};

const COLUMNS: &str = "id, projekt_id, ks, teilsystem_nummer, name, beschreibung, bemerkung, \
     eroeffnet_am, eroeffnet_durch, montagetermin, lieferfrist, abgabe_planer, plan_status, \
     wema_link, status, created_at";

/// Provides CRUD operations and counts for subsystems.
pub struct SubsystemRepo;

impl SubsystemRepo {
    /// Insert a new subsystem, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &SubsystemChanges,
    ) -> Result<SubsystemRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO teilsysteme (projekt_id, ks, teilsystem_nummer, name, beschreibung,
                bemerkung, eroeffnet_am, eroeffnet_durch, montagetermin, lieferfrist,
                abgabe_planer, plan_status, wema_link, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                COALESCE($14, 'offen'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubsystemRow>(&query)
            .bind(input.projekt_id)
            .bind(&input.ks)
            .bind(&input.teilsystem_nummer)
            .bind(&input.name)
            .bind(&input.beschreibung)
            .bind(&input.bemerkung)
            .bind(input.eroeffnet_am)
            .bind(&input.eroeffnet_durch)
            .bind(input.montagetermin)
            .bind(input.lieferfrist)
            .bind(input.abgabe_planer)
            .bind(&input.plan_status)
            .bind(&input.wema_link)
            .bind(input.status.map(ItemStatus::as_str))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SubsystemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teilsysteme WHERE id = $1");
        sqlx::query_as::<_, SubsystemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's subsystems ordered by system number, then name.
    ///
    /// Subsystems without a number sort first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SubsystemRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teilsysteme WHERE projekt_id = $1
             ORDER BY teilsystem_nummer NULLS FIRST, name"
        );
        sqlx::query_as::<_, SubsystemRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a subsystem. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SubsystemChanges,
    ) -> Result<Option<SubsystemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE teilsysteme SET
                projekt_id = COALESCE($2, projekt_id),
                ks = COALESCE($3, ks),
                teilsystem_nummer = COALESCE($4, teilsystem_nummer),
                name = COALESCE($5, name),
                beschreibung = COALESCE($6, beschreibung),
                bemerkung = COALESCE($7, bemerkung),
                eroeffnet_am = COALESCE($8, eroeffnet_am),
                eroeffnet_durch = COALESCE($9, eroeffnet_durch),
                montagetermin = COALESCE($10, montagetermin),
                lieferfrist = COALESCE($11, lieferfrist),
                abgabe_planer = COALESCE($12, abgabe_planer),
                plan_status = COALESCE($13, plan_status),
                wema_link = COALESCE($14, wema_link),
                status = COALESCE($15, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubsystemRow>(&query)
            .bind(id)
            .bind(input.projekt_id)
            .bind(&input.ks)
            .bind(&input.teilsystem_nummer)
            .bind(&input.name)
            .bind(&input.beschreibung)
            .bind(&input.bemerkung)
            .bind(input.eroeffnet_am)
            .bind(&input.eroeffnet_durch)
            .bind(input.montagetermin)
            .bind(input.lieferfrist)
            .bind(input.abgabe_planer)
            .bind(&input.plan_status)
            .bind(&input.wema_link)
            .bind(input.status.map(ItemStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a subsystem. Positions and their material cascade.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teilsysteme WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Counts
    // -----------------------------------------------------------------------

    pub async fn count_subsystems(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM teilsysteme WHERE projekt_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    pub async fn count_positions(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM positionen p
             JOIN teilsysteme t ON t.id = p.teilsystem_id
             WHERE t.projekt_id = $1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }

    /// Count material through its position and subsystem. Material without
    /// a position belongs to no project and is never counted.
    pub async fn count_material(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM material m
             JOIN positionen p ON p.id = m.position_id
             JOIN teilsysteme t ON t.id = p.teilsystem_id
             WHERE t.projekt_id = $1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }
}
