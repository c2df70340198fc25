use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub name: String,
    /// School class identifier, e.g. `3-53`
    pub class_code: String,
    pub team_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
}
