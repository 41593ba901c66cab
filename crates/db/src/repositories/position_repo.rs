//! Repository for the `positionen` table.

use bauhub_core::status::ItemStatus;
use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::position::{PositionChanges, PositionRow};

const COLUMNS: &str = "id, teilsystem_id, name, menge, einheit, status, created_at";

/// Provides CRUD operations for positions.
pub struct PositionRepo;

impl PositionRepo {
    pub async fn create(pool: &PgPool, input: &PositionChanges) -> Result<PositionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO positionen (teilsystem_id, name, menge, einheit, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'offen'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PositionRow>(&query)
            .bind(input.teilsystem_id)
            .bind(&input.name)
            .bind(input.menge)
            .bind(&input.einheit)
            .bind(input.status.map(ItemStatus::as_str))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PositionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positionen WHERE id = $1");
        sqlx::query_as::<_, PositionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the positions of a subsystem in creation order.
    pub async fn list_by_subsystem(
        pool: &PgPool,
        subsystem_id: DbId,
    ) -> Result<Vec<PositionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM positionen WHERE teilsystem_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, PositionRow>(&query)
            .bind(subsystem_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PositionChanges,
    ) -> Result<Option<PositionRow>, sqlx::Error> {
        let query = format!(
            "UPDATE positionen SET
                teilsystem_id = COALESCE($2, teilsystem_id),
                name = COALESCE($3, name),
                menge = COALESCE($4, menge),
                einheit = COALESCE($5, einheit),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PositionRow>(&query)
            .bind(id)
            .bind(input.teilsystem_id)
            .bind(&input.name)
            .bind(input.menge)
            .bind(&input.einheit)
            .bind(input.status.map(ItemStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM positionen WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
