//! Recent-activity stream for a project: creations of subsystems,
//! positions and material, newest first.

use bauhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::ActivityRow;

pub struct ActivityRepo;

impl ActivityRepo {
    /// The `limit` most recent creations under `project_id`.
    pub async fn recent_for_project(
        pool: &PgPool,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRow>, sqlx::Error> {
        sqlx::query_as::<_, ActivityRow>(
            "SELECT source, id, name, created_at FROM (
                SELECT 'teilsystem' AS source, t.id, t.name, t.created_at
                  FROM teilsysteme t
                 WHERE t.projekt_id = $1
                UNION ALL
                SELECT 'position' AS source, p.id, p.name, p.created_at
                  FROM positionen p
                  JOIN teilsysteme t ON t.id = p.teilsystem_id
                 WHERE t.projekt_id = $1
                UNION ALL
                SELECT 'material' AS source, m.id, m.name, m.created_at
                  FROM material m
                  JOIN positionen p ON p.id = m.position_id
                  JOIN teilsysteme t ON t.id = p.teilsystem_id
                 WHERE t.projekt_id = $1
             ) activity
             ORDER BY created_at DESC, id
             LIMIT $2",
        )
        .bind(project_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
