use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::participant::{CreateParticipantRequest, UpdateParticipantRequest};
use crate::error::{Result, StorageError};
use crate::models::Participant;

/// Repository for Participant database operations
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, class_code, team_id, created_at
            FROM participants
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    pub async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, class_code, team_id, created_at
            FROM participants
            WHERE team_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Roster of a match
    pub async fn list_by_match(&self, match_id: Uuid) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT p.participant_id, p.name, p.class_code, p.team_id, p.created_at
            FROM match_participants mp
            JOIN participants p ON p.participant_id = mp.participant_id
            WHERE mp.match_id = $1
            ORDER BY p.name ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Fetch every listed participant, failing on the first id that does not exist
    pub async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Participant>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, class_code, team_id, created_at
            FROM participants
            WHERE participant_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        if let Some(missing) = ids
            .iter()
            .find(|id| !participants.iter().any(|p| p.participant_id == **id))
        {
            return Err(StorageError::not_found("Participant", missing));
        }

        Ok(participants)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Participant> {
        sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, class_code, team_id, created_at
            FROM participants
            WHERE participant_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found("Participant", id))
    }

    pub async fn create(&self, req: &CreateParticipantRequest) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (name, class_code, team_id)
            VALUES ($1, $2, $3)
            RETURNING participant_id, name, class_code, team_id, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.class_code)
        .bind(req.team_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Team does not exist"))?;

        Ok(participant)
    }

    /// Update a participant. Moving to another team is refused while the participant is on a
    /// roster of a match the new team does not play, or owns goals or cards of the old team.
    pub async fn update(
        &self,
        existing: &Participant,
        req: &UpdateParticipantRequest,
    ) -> Result<Participant> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let class_code = req.class_code.as_ref().unwrap_or(&existing.class_code);
        let team_id = req.team_id.unwrap_or(existing.team_id);

        let mut tx = self.pool.begin().await?;

        if team_id != existing.team_id {
            let tied = sqlx::query_scalar::<_, bool>(
                r#"
                SELECT EXISTS (
                    SELECT 1
                    FROM match_participants mp
                    JOIN matches m ON m.match_id = mp.match_id
                    WHERE mp.participant_id = $1
                      AND m.team_a_id <> $2
                      AND m.team_b_id <> $2
                )
                OR EXISTS (SELECT 1 FROM goals WHERE participant_id = $1 AND team_id <> $2)
                OR EXISTS (SELECT 1 FROM penalty_cards WHERE participant_id = $1 AND team_id <> $2)
                "#,
            )
            .bind(existing.participant_id)
            .bind(team_id)
            .fetch_one(&mut *tx)
            .await?;

            if tied {
                return Err(StorageError::Unprocessable(format!(
                    "Participant {} has matches or records that team {} does not share",
                    existing.participant_id, team_id
                )));
            }
        }

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET name = $2,
                class_code = $3,
                team_id = $4
            WHERE participant_id = $1
            RETURNING participant_id, name, class_code, team_id, created_at
            "#,
        )
        .bind(existing.participant_id)
        .bind(name)
        .bind(class_code)
        .bind(team_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Team does not exist"))?
        .ok_or_else(|| StorageError::not_found("Participant", existing.participant_id))?;

        tx.commit().await?;

        Ok(participant)
    }

    /// Delete a participant. Fails while goals or cards still reference them.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE participant_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::from(e).on_constraint("Participant still owns goals or penalty cards")
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Participant", id));
        }

        Ok(())
    }
}
