//! Repository for the `lieferanten` table.

use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::supplier::{SupplierChanges, SupplierRow};

const COLUMNS: &str = "id, name, kontakt, email, telefon, adresse, notizen, created_at";

/// Provides CRUD operations for suppliers.
pub struct SupplierRepo;

impl SupplierRepo {
    pub async fn create(pool: &PgPool, input: &SupplierChanges) -> Result<SupplierRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO lieferanten (name, kontakt, email, telefon, adresse, notizen)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupplierRow>(&query)
            .bind(&input.name)
            .bind(&input.kontakt)
            .bind(&input.email)
            .bind(&input.telefon)
            .bind(&input.adresse)
            .bind(&input.notizen)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SupplierRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lieferanten WHERE id = $1");
        sqlx::query_as::<_, SupplierRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all suppliers ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<SupplierRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lieferanten ORDER BY name");
        sqlx::query_as::<_, SupplierRow>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SupplierChanges,
    ) -> Result<Option<SupplierRow>, sqlx::Error> {
        let query = format!(
            "UPDATE lieferanten SET
                name = COALESCE($2, name),
                kontakt = COALESCE($3, kontakt),
                email = COALESCE($4, email),
                telefon = COALESCE($5, telefon),
                adresse = COALESCE($6, adresse),
                notizen = COALESCE($7, notizen)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupplierRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kontakt)
            .bind(&input.email)
            .bind(&input.telefon)
            .bind(&input.adresse)
            .bind(&input.notizen)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a supplier. Material keeps its row with
    /// `lieferant_id` set to `NULL`.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lieferanten WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
