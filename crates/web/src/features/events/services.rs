use sqlx::PgPool;
use storage::{
    dto::event::{CreateSportEventRequest, UpdateSportEventRequest, validate_placements},
    error::{Result, StorageError},
    models::{Match, SportEvent},
    repository::{event::SportEventRepository, matches::MatchRepository, team::TeamRepository},
};
use uuid::Uuid;

pub async fn list_events(pool: &PgPool) -> Result<Vec<SportEvent>> {
    let repo = SportEventRepository::new(pool);
    repo.list().await
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<SportEvent> {
    let repo = SportEventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Open an event; podium teams, when given, must exist and be distinct
pub async fn create_event(pool: &PgPool, request: &CreateSportEventRequest) -> Result<SportEvent> {
    check_placements(pool, request.placements()).await?;

    let repo = SportEventRepository::new(pool);
    let event = repo.create(request).await?;
    tracing::info!(event_id = %event.event_id, sport = %event.sport, "sport event created");
    Ok(event)
}

pub async fn update_event(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateSportEventRequest,
) -> Result<SportEvent> {
    let repo = SportEventRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    check_placements(
        pool,
        [
            request
                .first_place_team_id
                .or(existing.first_place_team_id),
            request
                .second_place_team_id
                .or(existing.second_place_team_id),
            request
                .third_place_team_id
                .or(existing.third_place_team_id),
        ],
    )
    .await?;

    repo.update(&existing, request).await
}

pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = SportEventRepository::new(pool);
    repo.delete(id).await
}

pub async fn list_event_matches(pool: &PgPool, id: Uuid) -> Result<Vec<Match>> {
    SportEventRepository::new(pool).find_by_id(id).await?;
    MatchRepository::new(pool).list_by_event(id).await
}

async fn check_placements(pool: &PgPool, placements: [Option<Uuid>; 3]) -> Result<()> {
    validate_placements(placements).map_err(|msg| StorageError::Unprocessable(msg.to_string()))?;

    let teams = TeamRepository::new(pool);
    for team_id in placements.into_iter().flatten() {
        teams.find_by_id(team_id).await?;
    }

    Ok(())
}
