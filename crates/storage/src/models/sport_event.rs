use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{MatchStatus, Modality, Sport};

/// A bracket of matches for one sport and modality
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SportEvent {
    pub event_id: Uuid,
    pub sport: Sport,
    pub modality: Modality,
    pub total_matches: i32,
    pub first_place_team_id: Option<Uuid>,
    pub second_place_team_id: Option<Uuid>,
    pub third_place_team_id: Option<Uuid>,
    pub status: MatchStatus,
    pub created_at: chrono::NaiveDateTime,
}
