use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::Links;
use crate::models::Participant;

/// Request payload for enrolling a participant in a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_class_code"))]
    pub class_code: String,

    pub team_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateParticipantRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_class_code"))]
    pub class_code: Option<String>,

    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub name: String,
    pub class_code: String,
    pub team_id: Uuid,
    pub created_at: NaiveDateTime,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        let id = participant.participant_id;
        Self {
            participant_id: participant.participant_id,
            name: participant.name,
            class_code: participant.class_code,
            team_id: participant.team_id,
            created_at: participant.created_at,
            links: Links::new()
                .with("self", format!("/participants/{id}"))
                .with("team", format!("/teams/{}", participant.team_id))
                .with("goals", format!("/participants/{id}/goals"))
                .with("cards", format!("/participants/{id}/cards")),
        }
    }
}

/// Class codes look like `3-53`: grade, dash, class number
fn validate_class_code(code: &str) -> Result<(), validator::ValidationError> {
    let is_valid = match code.split_once('-') {
        Some((grade, number)) => {
            !grade.is_empty()
                && !number.is_empty()
                && grade.len() <= 2
                && number.len() <= 4
                && grade.chars().all(|c| c.is_ascii_digit())
                && number.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    };

    if is_valid {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_class_code");
        error.message = Some("Class code must look like 3-53".into());
        Err(error)
    }
}
