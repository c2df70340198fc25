use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::CardColor;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PenaltyCard {
    pub card_id: Uuid,
    pub match_id: Uuid,
    pub participant_id: Uuid,
    pub team_id: Uuid,
    pub color: CardColor,
    pub issued_at: chrono::NaiveDateTime,
}
