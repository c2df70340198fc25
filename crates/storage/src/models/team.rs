use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub name: String,
    pub points: i32,
    pub created_at: chrono::NaiveDateTime,
}
