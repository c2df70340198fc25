use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{CardColor, PenaltyCard};

/// Repository for PenaltyCard database operations
pub struct PenaltyCardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PenaltyCardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<PenaltyCard> {
        let card = sqlx::query_as::<_, PenaltyCard>(
            r#"
            SELECT card_id, match_id, participant_id, team_id, color, issued_at
            FROM penalty_cards
            WHERE card_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Penalty card", id))?;

        Ok(card)
    }

    pub async fn list_by_match(&self, match_id: Uuid) -> Result<Vec<PenaltyCard>> {
        let cards = sqlx::query_as::<_, PenaltyCard>(
            r#"
            SELECT card_id, match_id, participant_id, team_id, color, issued_at
            FROM penalty_cards
            WHERE match_id = $1
            ORDER BY issued_at ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        Ok(cards)
    }

    pub async fn list_by_participant(&self, participant_id: Uuid) -> Result<Vec<PenaltyCard>> {
        let cards = sqlx::query_as::<_, PenaltyCard>(
            r#"
            SELECT card_id, match_id, participant_id, team_id, color, issued_at
            FROM penalty_cards
            WHERE participant_id = $1
            ORDER BY issued_at ASC
            "#,
        )
        .bind(participant_id)
        .fetch_all(self.pool)
        .await?;

        Ok(cards)
    }

    pub async fn insert(
        &self,
        match_id: Uuid,
        participant_id: Uuid,
        team_id: Uuid,
        color: CardColor,
        issued_at: NaiveDateTime,
    ) -> Result<PenaltyCard> {
        let card = sqlx::query_as::<_, PenaltyCard>(
            r#"
            INSERT INTO penalty_cards (match_id, participant_id, team_id, color, issued_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING card_id, match_id, participant_id, team_id, color, issued_at
            "#,
        )
        .bind(match_id)
        .bind(participant_id)
        .bind(team_id)
        .bind(color)
        .bind(issued_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Match or participant no longer exists"))?;

        Ok(card)
    }
}
