use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Goal;

/// Which side of a match a team plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Repository for Goal database operations
pub struct GoalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GoalRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Goal> {
        sqlx::query_as::<_, Goal>(
            r#"
            SELECT goal_id, match_id, participant_id, team_id, scored_at
            FROM goals
            WHERE goal_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Goal", id))
    }

    pub async fn list_by_match(&self, match_id: Uuid) -> Result<Vec<Goal>> {
        let goals = sqlx::query_as::<_, Goal>(
            r#"
            SELECT goal_id, match_id, participant_id, team_id, scored_at
            FROM goals
            WHERE match_id = $1
            ORDER BY scored_at ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        Ok(goals)
    }

    pub async fn list_by_participant(&self, participant_id: Uuid) -> Result<Vec<Goal>> {
        let goals = sqlx::query_as::<_, Goal>(
            r#"
            SELECT goal_id, match_id, participant_id, team_id, scored_at
            FROM goals
            WHERE participant_id = $1
            ORDER BY scored_at ASC
            "#,
        )
        .bind(participant_id)
        .fetch_all(self.pool)
        .await?;

        Ok(goals)
    }

    /// Insert a goal and bump the scoring side's score in one transaction
    pub async fn insert(
        &self,
        match_id: Uuid,
        participant_id: Uuid,
        team_id: Uuid,
        side: Side,
        scored_at: NaiveDateTime,
    ) -> Result<Goal> {
        let mut tx = self.pool.begin().await?;

        let goal = sqlx::query_as::<_, Goal>(
            r#"
            INSERT INTO goals (match_id, participant_id, team_id, scored_at)
            VALUES ($1, $2, $3, $4)
            RETURNING goal_id, match_id, participant_id, team_id, scored_at
            "#,
        )
        .bind(match_id)
        .bind(participant_id)
        .bind(team_id)
        .bind(scored_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Match or participant no longer exists"))?;

        let score_update = match side {
            Side::A => "UPDATE matches SET score_a = score_a + 1 WHERE match_id = $1",
            Side::B => "UPDATE matches SET score_b = score_b + 1 WHERE match_id = $1",
        };
        let result = sqlx::query(score_update)
            .bind(match_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Match", match_id));
        }

        tx.commit().await?;

        Ok(goal)
    }
}
