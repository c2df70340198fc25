use sqlx::PgPool;
use storage::{
    dto::{
        common::PaginationParams,
        matches::{CreateMatchRequest, MatchDetailResponse, MatchResponse, UpdateMatchRequest},
        participant::ParticipantResponse,
    },
    error::Result,
    models::Match,
    repository::{matches::MatchRepository, participant::ParticipantRepository},
    services::match_mediator::MatchMediator,
};
use uuid::Uuid;

pub async fn list_matches(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<(Vec<Match>, i64)> {
    let repo = MatchRepository::new(pool);
    repo.list(pagination).await
}

pub async fn list_sport_matches(pool: &PgPool, sport: &str) -> Result<Vec<Match>> {
    MatchMediator::new(pool).list_for_sport(sport).await
}

/// Create a match of the given sport through the mediator
pub async fn create_match(pool: &PgPool, sport: &str, request: &CreateMatchRequest) -> Result<Match> {
    MatchMediator::new(pool).create(sport, request).await
}

pub async fn get_sport_match(pool: &PgPool, sport: &str, id: Uuid) -> Result<Match> {
    MatchMediator::new(pool).find_for_sport(sport, id).await
}

pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<Match> {
    let repo = MatchRepository::new(pool);
    repo.find_by_id(id).await
}

/// A match with its roster and the records its sport keeps
pub async fn get_match_detailed(pool: &PgPool, id: Uuid) -> Result<MatchDetailResponse> {
    let m = MatchRepository::new(pool).find_by_id(id).await?;
    let details = MatchMediator::new(pool).details(&m).await?;
    let participants = ParticipantRepository::new(pool).list_by_match(id).await?;

    Ok(MatchDetailResponse {
        summary: MatchResponse::from(m),
        participants: participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect(),
        details,
    })
}

pub async fn find_match_type(pool: &PgPool, id: Uuid) -> Result<String> {
    MatchMediator::new(pool).find_match_type_by_id(id).await
}

pub async fn update_match(pool: &PgPool, id: Uuid, request: &UpdateMatchRequest) -> Result<Match> {
    MatchMediator::new(pool).update(id, request).await
}

pub async fn delete_match(pool: &PgPool, id: Uuid) -> Result<()> {
    MatchMediator::new(pool).delete(id).await
}
