//! Repository for the `profiles` table.

use bauhub_core::status::UserRole;
use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{ProfileChanges, ProfileRow};

const COLUMNS: &str =
    "id, vorname, nachname, email, abteilung, rolle, avatar_url, created_at, updated_at";

/// Provides CRUD operations for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile under the id supplied in `input`.
    ///
    /// If `rolle` is `None` in the input, defaults to `mitarbeiter`.
    pub async fn create(pool: &PgPool, input: &ProfileChanges) -> Result<ProfileRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, vorname, nachname, email, abteilung, rolle, avatar_url)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'mitarbeiter'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(input.id)
            .bind(&input.vorname)
            .bind(&input.nachname)
            .bind(&input.email)
            .bind(&input.abteilung)
            .bind(input.rolle.map(UserRole::as_str))
            .bind(&input.avatar_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all profiles ordered by last name, then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProfileRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles ORDER BY nachname NULLS FIRST, vorname NULLS FIRST"
        );
        sqlx::query_as::<_, ProfileRow>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProfileChanges,
    ) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                vorname = COALESCE($2, vorname),
                nachname = COALESCE($3, nachname),
                email = COALESCE($4, email),
                abteilung = COALESCE($5, abteilung),
                rolle = COALESCE($6, rolle),
                avatar_url = COALESCE($7, avatar_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .bind(&input.vorname)
            .bind(&input.nachname)
            .bind(&input.email)
            .bind(&input.abteilung)
            .bind(input.rolle.map(UserRole::as_str))
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
