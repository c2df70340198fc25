use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchStatus, Modality, Sport};

const MATCH_COLUMNS: &str = "match_id, sport, team_a_id, team_b_id, score_a, score_b, modality, \
     status, start_time, end_time, sport_event_id, created_at";

/// Fully resolved column values of a match, ready to be written
#[derive(Debug, Clone)]
pub struct MatchFields {
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub score_a: i32,
    pub score_b: i32,
    pub modality: Modality,
    pub status: MatchStatus,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub sport_event_id: Option<Uuid>,
}

/// Repository over the single `matches` table shared by every sport
pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pagination: &PaginationParams) -> Result<(Vec<Match>, i64)> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches \
             ORDER BY start_time DESC NULLS LAST, created_at DESC \
             LIMIT $1 OFFSET $2"
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches")
            .fetch_one(self.pool)
            .await?;

        Ok((matches, total))
    }

    /// All matches carrying the given discriminator
    pub async fn list_by_sport(&self, sport: Sport) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches \
             WHERE sport = $1 \
             ORDER BY start_time DESC NULLS LAST, created_at DESC"
        ))
        .bind(sport)
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    /// Matches a team plays in, on either side
    pub async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches \
             WHERE team_a_id = $1 OR team_b_id = $1 \
             ORDER BY start_time DESC NULLS LAST, created_at DESC"
        ))
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches \
             WHERE sport_event_id = $1 \
             ORDER BY start_time ASC NULLS LAST, created_at ASC"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        let m = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Match", id))?;

        Ok(m)
    }

    /// Fetch only the discriminator of a match, without hydrating the row
    pub async fn find_sport_by_id(&self, id: Uuid) -> Result<String> {
        sqlx::query_scalar::<_, String>("SELECT sport FROM matches WHERE match_id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("Match", id))
    }

    /// Ids of the participants listed on a match
    pub async fn participant_ids(&self, match_id: Uuid) -> Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT participant_id FROM match_participants WHERE match_id = $1",
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    /// Insert a match row tagged with `sport` together with its roster
    pub async fn insert(
        &self,
        sport: Sport,
        fields: &MatchFields,
        participant_ids: &[Uuid],
    ) -> Result<Match> {
        let mut tx = self.pool.begin().await?;

        let m = sqlx::query_as::<_, Match>(&format!(
            "INSERT INTO matches (sport, team_a_id, team_b_id, score_a, score_b, modality, \
                                  status, start_time, end_time, sport_event_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {MATCH_COLUMNS}"
        ))
        .bind(sport)
        .bind(fields.team_a_id)
        .bind(fields.team_b_id)
        .bind(fields.score_a)
        .bind(fields.score_b)
        .bind(fields.modality)
        .bind(fields.status)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(fields.sport_event_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO match_participants (match_id, participant_id)
            SELECT $1, UNNEST($2::uuid[])
            "#,
        )
        .bind(m.match_id)
        .bind(participant_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Roster lists a participant twice"))?;

        tx.commit().await?;

        Ok(m)
    }

    /// Rewrite the mutable columns of a match; the roster is replaced when given
    pub async fn update(
        &self,
        id: Uuid,
        fields: &MatchFields,
        participant_ids: Option<&[Uuid]>,
    ) -> Result<Match> {
        let mut tx = self.pool.begin().await?;

        let m = sqlx::query_as::<_, Match>(&format!(
            "UPDATE matches \
             SET team_a_id = $2, team_b_id = $3, score_a = $4, score_b = $5, modality = $6, \
                 status = $7, start_time = $8, end_time = $9, sport_event_id = $10 \
             WHERE match_id = $1 \
             RETURNING {MATCH_COLUMNS}"
        ))
        .bind(id)
        .bind(fields.team_a_id)
        .bind(fields.team_b_id)
        .bind(fields.score_a)
        .bind(fields.score_b)
        .bind(fields.modality)
        .bind(fields.status)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(fields.sport_event_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StorageError::not_found("Match", id))?;

        if let Some(ids) = participant_ids {
            sqlx::query("DELETE FROM match_participants WHERE match_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            sqlx::query(
                r#"
                INSERT INTO match_participants (match_id, participant_id)
                SELECT $1, UNNEST($2::uuid[])
                "#,
            )
            .bind(id)
            .bind(ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::from(e).on_constraint("Roster lists a participant twice"))?;
        }

        tx.commit().await?;

        Ok(m)
    }

    /// Delete a match; goals, cards and roster entries go with it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM matches WHERE match_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Match", id));
        }

        Ok(())
    }
}
