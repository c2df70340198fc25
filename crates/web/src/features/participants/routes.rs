use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_participant, delete_participant, get_participant, list_participant_cards,
    list_participant_goals, list_participants, update_participant,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_participants).post(create_participant))
        .route(
            "/:id",
            get(get_participant)
                .put(update_participant)
                .delete(delete_participant),
        )
        .route("/:id/goals", get(list_participant_goals))
        .route("/:id/cards", get(list_participant_cards))
}
