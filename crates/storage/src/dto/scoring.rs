use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::Links;
use crate::models::{CardColor, Goal, PenaltyCard};

/// Records a goal for the participant's team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordGoalRequest {
    pub participant_id: Uuid,
    /// Defaults to the time the request is handled
    pub scored_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct IssueCardRequest {
    pub participant_id: Uuid,
    pub color: CardColor,
    pub issued_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalResponse {
    pub goal_id: Uuid,
    pub match_id: Uuid,
    pub participant_id: Uuid,
    pub team_id: Uuid,
    pub scored_at: NaiveDateTime,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            links: Links::new()
                .with("self", format!("/goals/{}", goal.goal_id))
                .with("match", format!("/matches/{}", goal.match_id))
                .with("participant", format!("/participants/{}", goal.participant_id))
                .with("team", format!("/teams/{}", goal.team_id)),
            goal_id: goal.goal_id,
            match_id: goal.match_id,
            participant_id: goal.participant_id,
            team_id: goal.team_id,
            scored_at: goal.scored_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PenaltyCardResponse {
    pub card_id: Uuid,
    pub match_id: Uuid,
    pub participant_id: Uuid,
    pub team_id: Uuid,
    pub color: CardColor,
    pub issued_at: NaiveDateTime,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<PenaltyCard> for PenaltyCardResponse {
    fn from(card: PenaltyCard) -> Self {
        Self {
            links: Links::new()
                .with("self", format!("/cards/{}", card.card_id))
                .with("match", format!("/matches/{}", card.match_id))
                .with("participant", format!("/participants/{}", card.participant_id))
                .with("team", format!("/teams/{}", card.team_id)),
            card_id: card.card_id,
            match_id: card.match_id,
            participant_id: card.participant_id,
            team_id: card.team_id,
            color: card.color,
            issued_at: card.issued_at,
        }
    }
}
