//! Repository for the `projekte` table.

use bauhub_core::status::ProjectStatus;
use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{ProjectChanges, ProjectRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, projektnummer, projektname, strasse, plz, ort, kanton, status, \
     image_url, created_by, projektleiter, deviseur, bim_konstrukteur, bauleiter, polier, \
     einkauf, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `offen`.
    pub async fn create(pool: &PgPool, input: &ProjectChanges) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projekte (projektnummer, projektname, strasse, plz, ort, kanton, status,
                image_url, created_by, projektleiter, deviseur, bim_konstrukteur, bauleiter,
                polier, einkauf)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'offen'), $8, $9, $10, $11, $12, $13,
                $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.projektnummer)
            .bind(&input.projektname)
            .bind(&input.strasse)
            .bind(&input.plz)
            .bind(&input.ort)
            .bind(&input.kanton)
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(&input.image_url)
            .bind(input.created_by)
            .bind(&input.projektleiter)
            .bind(&input.deviseur)
            .bind(&input.bim_konstrukteur)
            .bind(&input.bauleiter)
            .bind(&input.polier)
            .bind(&input.einkauf)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projekte WHERE id = $1");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by project number.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projekte ORDER BY projektnummer");
        sqlx::query_as::<_, ProjectRow>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectChanges,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!(
            "UPDATE projekte SET
                projektnummer = COALESCE($2, projektnummer),
                projektname = COALESCE($3, projektname),
                strasse = COALESCE($4, strasse),
                plz = COALESCE($5, plz),
                ort = COALESCE($6, ort),
                kanton = COALESCE($7, kanton),
                status = COALESCE($8, status),
                image_url = COALESCE($9, image_url),
                created_by = COALESCE($10, created_by),
                projektleiter = COALESCE($11, projektleiter),
                deviseur = COALESCE($12, deviseur),
                bim_konstrukteur = COALESCE($13, bim_konstrukteur),
                bauleiter = COALESCE($14, bauleiter),
                polier = COALESCE($15, polier),
                einkauf = COALESCE($16, einkauf),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.projektnummer)
            .bind(&input.projektname)
            .bind(&input.strasse)
            .bind(&input.plz)
            .bind(&input.ort)
            .bind(&input.kanton)
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(&input.image_url)
            .bind(input.created_by)
            .bind(&input.projektleiter)
            .bind(&input.deviseur)
            .bind(&input.bim_konstrukteur)
            .bind(&input.bauleiter)
            .bind(&input.polier)
            .bind(&input.einkauf)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Subsystems (and through them positions and material) cascade;
    /// reservations keep their row with `projekt_id` set to `NULL`.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projekte WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
