use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scoring action. Never updated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Goal {
    pub goal_id: Uuid,
    pub match_id: Uuid,
    pub participant_id: Uuid,
    /// Team of the scorer at the time of the goal
    pub team_id: Uuid,
    pub scored_at: chrono::NaiveDateTime,
}
