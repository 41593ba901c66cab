//! Repository for the `material` table.

use bauhub_core::status::ItemStatus;
use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::material::{MaterialChanges, MaterialRow};

const COLUMNS: &str =
    "id, position_id, lieferant_id, name, hersteller, artikelnummer, status, created_at";

/// Provides CRUD operations for material records.
pub struct MaterialRepo;

impl MaterialRepo {
    pub async fn create(pool: &PgPool, input: &MaterialChanges) -> Result<MaterialRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO material (position_id, lieferant_id, name, hersteller, artikelnummer,
                status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'offen'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialRow>(&query)
            .bind(input.position_id)
            .bind(input.lieferant_id)
            .bind(&input.name)
            .bind(&input.hersteller)
            .bind(&input.artikelnummer)
            .bind(input.status.map(ItemStatus::as_str))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MaterialRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM material WHERE id = $1");
        sqlx::query_as::<_, MaterialRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the material recorded against a position in creation order.
    pub async fn list_by_position(
        pool: &PgPool,
        position_id: DbId,
    ) -> Result<Vec<MaterialRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM material WHERE position_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, MaterialRow>(&query)
            .bind(position_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MaterialChanges,
    ) -> Result<Option<MaterialRow>, sqlx::Error> {
        let query = format!(
            "UPDATE material SET
                position_id = COALESCE($2, position_id),
                lieferant_id = COALESCE($3, lieferant_id),
                name = COALESCE($4, name),
                hersteller = COALESCE($5, hersteller),
                artikelnummer = COALESCE($6, artikelnummer),
                status = COALESCE($7, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialRow>(&query)
            .bind(id)
            .bind(input.position_id)
            .bind(input.lieferant_id)
            .bind(&input.name)
            .bind(&input.hersteller)
            .bind(&input.artikelnummer)
            .bind(input.status.map(ItemStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM material WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
