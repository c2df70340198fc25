use sqlx::PgPool;
use storage::{
    dto::scoring::{IssueCardRequest, RecordGoalRequest},
    error::Result,
    models::{Goal, PenaltyCard},
    repository::{goal::GoalRepository, penalty_card::PenaltyCardRepository},
    services::match_mediator::MatchMediator,
};
use uuid::Uuid;

pub async fn get_goal(pool: &PgPool, id: Uuid) -> Result<Goal> {
    let repo = GoalRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn get_card(pool: &PgPool, id: Uuid) -> Result<PenaltyCard> {
    let repo = PenaltyCardRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn list_match_goals(pool: &PgPool, match_id: Uuid) -> Result<Vec<Goal>> {
    MatchMediator::new(pool).goals(match_id).await
}

pub async fn list_match_cards(pool: &PgPool, match_id: Uuid) -> Result<Vec<PenaltyCard>> {
    MatchMediator::new(pool).cards(match_id).await
}

pub async fn record_goal(pool: &PgPool, match_id: Uuid, request: &RecordGoalRequest) -> Result<Goal> {
    let goal = MatchMediator::new(pool).record_goal(match_id, request).await?;
    tracing::info!(goal_id = %goal.goal_id, match_id = %match_id, "goal recorded");
    Ok(goal)
}

pub async fn issue_card(
    pool: &PgPool,
    match_id: Uuid,
    request: &IssueCardRequest,
) -> Result<PenaltyCard> {
    let card = MatchMediator::new(pool).issue_card(match_id, request).await?;
    tracing::info!(
        card_id = %card.card_id,
        match_id = %match_id,
        color = %card.color,
        "penalty card issued"
    );
    Ok(card)
}
