use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::Team;

/// Repository for Team database operations
pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List teams, best standing first
    pub async fn list(&self, pagination: &PaginationParams) -> Result<(Vec<Team>, i64)> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, points, created_at
            FROM teams
            ORDER BY points DESC, name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams")
            .fetch_one(self.pool)
            .await?;

        Ok((teams, total))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, points, created_at
            FROM teams
            WHERE team_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Team", id))
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, points)
            VALUES ($1, $2)
            RETURNING team_id, name, points, created_at
            "#,
        )
        .bind(&req.name)
        .bind(req.points.unwrap_or(0))
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Team name already exists"))?;

        Ok(team)
    }

    pub async fn update(&self, existing: &Team, req: &UpdateTeamRequest) -> Result<Team> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let points = req.points.unwrap_or(existing.points);

        sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $2,
                points = $3
            WHERE team_id = $1
            RETURNING team_id, name, points, created_at
            "#,
        )
        .bind(existing.team_id)
        .bind(name)
        .bind(points)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Team name already exists"))?
        .ok_or_else(|| StorageError::not_found("Team", existing.team_id))
    }

    /// Delete a team and its participants. Fails while matches or events still reference it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE team_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e)
                    .on_constraint("Team is still referenced by matches or sport events")
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Team", id));
        }

        Ok(())
    }
}
