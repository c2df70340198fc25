use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_match, delete_match, get_match, get_match_detailed, get_match_type, get_sport_match,
    list_matches, list_sport_matches, update_match,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_matches))
        .route("/sports/:sport", get(list_sport_matches).post(create_match))
        .route("/sports/:sport/:id", get(get_sport_match))
        .route("/:id", get(get_match).put(update_match).delete(delete_match))
        .route("/:id/detailed", get(get_match_detailed))
        .route("/:id/type", get(get_match_type))
}
