use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_team, delete_team, get_team, list_team_matches, list_team_participants, list_teams,
    update_team,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/:id", get(get_team).put(update_team).delete(delete_team))
        .route("/:id/participants", get(list_team_participants))
        .route("/:id/matches", get(list_team_matches))
}
