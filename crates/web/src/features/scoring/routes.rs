use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    get_card, get_goal, issue_card, list_match_cards, list_match_goals, record_goal,
};

/// Goal and card collections nested under a match
pub fn match_routes() -> Router<Database> {
    Router::new()
        .route("/:id/goals", get(list_match_goals).post(record_goal))
        .route("/:id/cards", get(list_match_cards).post(issue_card))
}

pub fn goal_routes() -> Router<Database> {
    Router::new().route("/:id", get(get_goal))
}

pub fn card_routes() -> Router<Database> {
    Router::new().route("/:id", get(get_card))
}
