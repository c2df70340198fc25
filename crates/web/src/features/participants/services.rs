use sqlx::PgPool;
use storage::{
    dto::participant::{CreateParticipantRequest, UpdateParticipantRequest},
    error::Result,
    models::{Goal, Participant, PenaltyCard},
    repository::{
        goal::GoalRepository, participant::ParticipantRepository,
        penalty_card::PenaltyCardRepository, team::TeamRepository,
    },
};
use uuid::Uuid;

pub async fn list_participants(pool: &PgPool) -> Result<Vec<Participant>> {
    let repo = ParticipantRepository::new(pool);
    repo.list().await
}

pub async fn get_participant(pool: &PgPool, id: Uuid) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.find_by_id(id).await
}

/// Enroll a participant; the team has to exist
pub async fn create_participant(
    pool: &PgPool,
    request: &CreateParticipantRequest,
) -> Result<Participant> {
    TeamRepository::new(pool).find_by_id(request.team_id).await?;

    let repo = ParticipantRepository::new(pool);
    repo.create(request).await
}

pub async fn update_participant(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateParticipantRequest,
) -> Result<Participant> {
    if let Some(team_id) = request.team_id {
        TeamRepository::new(pool).find_by_id(team_id).await?;
    }

    let repo = ParticipantRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, request).await
}

pub async fn delete_participant(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ParticipantRepository::new(pool);
    repo.delete(id).await
}

pub async fn list_participant_goals(pool: &PgPool, id: Uuid) -> Result<Vec<Goal>> {
    ParticipantRepository::new(pool).find_by_id(id).await?;
    GoalRepository::new(pool).list_by_participant(id).await
}

pub async fn list_participant_cards(pool: &PgPool, id: Uuid) -> Result<Vec<PenaltyCard>> {
    ParticipantRepository::new(pool).find_by_id(id).await?;
    PenaltyCardRepository::new(pool)
        .list_by_participant(id)
        .await
}
