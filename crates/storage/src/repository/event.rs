use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateSportEventRequest, UpdateSportEventRequest};
use crate::error::{Result, StorageError};
use crate::models::SportEvent;

const EVENT_COLUMNS: &str = "event_id, sport, modality, total_matches, first_place_team_id, \
     second_place_team_id, third_place_team_id, status, created_at";

/// Repository for SportEvent database operations
pub struct SportEventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SportEventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<SportEvent>> {
        let events = sqlx::query_as::<_, SportEvent>(&format!(
            "SELECT {EVENT_COLUMNS} FROM sport_events ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<SportEvent> {
        let event = sqlx::query_as::<_, SportEvent>(&format!(
            "SELECT {EVENT_COLUMNS} FROM sport_events WHERE event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Sport event", id))?;

        Ok(event)
    }

    pub async fn create(&self, req: &CreateSportEventRequest) -> Result<SportEvent> {
        let event = sqlx::query_as::<_, SportEvent>(&format!(
            "INSERT INTO sport_events (sport, modality, total_matches, first_place_team_id, \
                                       second_place_team_id, third_place_team_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(req.sport)
        .bind(req.modality)
        .bind(req.total_matches.unwrap_or(0))
        .bind(req.first_place_team_id)
        .bind(req.second_place_team_id)
        .bind(req.third_place_team_id)
        .bind(req.status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Placement team does not exist"))?;

        Ok(event)
    }

    pub async fn update(
        &self,
        existing: &SportEvent,
        req: &UpdateSportEventRequest,
    ) -> Result<SportEvent> {
        let modality = req.modality.unwrap_or(existing.modality);
        let total_matches = req.total_matches.unwrap_or(existing.total_matches);
        let first = req.first_place_team_id.or(existing.first_place_team_id);
        let second = req.second_place_team_id.or(existing.second_place_team_id);
        let third = req.third_place_team_id.or(existing.third_place_team_id);
        let status = req.status.unwrap_or(existing.status);

        let event = sqlx::query_as::<_, SportEvent>(&format!(
            "UPDATE sport_events \
             SET modality = $2, total_matches = $3, first_place_team_id = $4, \
                 second_place_team_id = $5, third_place_team_id = $6, status = $7 \
             WHERE event_id = $1 \
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(existing.event_id)
        .bind(modality)
        .bind(total_matches)
        .bind(first)
        .bind(second)
        .bind(third)
        .bind(status)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Placement team does not exist"))?
        .ok_or_else(|| StorageError::not_found("Sport event", existing.event_id))?;

        Ok(event)
    }

    /// Delete an event; its matches stay and lose the event reference
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM sport_events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Sport event", id));
        }

        Ok(())
    }
}
