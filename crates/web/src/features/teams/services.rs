use sqlx::PgPool;
use storage::{
    dto::{
        common::PaginationParams,
        team::{CreateTeamRequest, UpdateTeamRequest},
    },
    error::Result,
    models::{Match, Participant, Team},
    repository::{
        matches::MatchRepository, participant::ParticipantRepository, team::TeamRepository,
    },
};
use uuid::Uuid;

/// List teams by standing
pub async fn list_teams(pool: &PgPool, pagination: &PaginationParams) -> Result<(Vec<Team>, i64)> {
    let repo = TeamRepository::new(pool);
    repo.list(pagination).await
}

pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    let team = repo.create(request).await?;
    tracing::info!(team_id = %team.team_id, name = %team.name, "team created");
    Ok(team)
}

pub async fn update_team(pool: &PgPool, id: Uuid, request: &UpdateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, request).await
}

pub async fn delete_team(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = TeamRepository::new(pool);
    repo.delete(id).await
}

/// Members of a team
pub async fn list_team_participants(pool: &PgPool, id: Uuid) -> Result<Vec<Participant>> {
    TeamRepository::new(pool).find_by_id(id).await?;
    ParticipantRepository::new(pool).list_by_team(id).await
}

/// Matches the team plays in, found through the team index on `matches`
pub async fn list_team_matches(pool: &PgPool, id: Uuid) -> Result<Vec<Match>> {
    TeamRepository::new(pool).find_by_id(id).await?;
    MatchRepository::new(pool).list_by_team(id).await
}
