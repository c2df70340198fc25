use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::common::Links;
use super::participant::ParticipantResponse;
use crate::models::{Match, MatchDetails, MatchStatus, Modality, Sport};

/// Payload shared by every sport; the sport itself comes from the path
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    pub team_a_id: Uuid,

    pub team_b_id: Uuid,

    pub modality: Modality,

    #[serde(default)]
    pub status: MatchStatus,

    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub score_a: Option<i32>,

    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub score_b: Option<i32>,

    pub start_time: Option<NaiveDateTime>,

    pub end_time: Option<NaiveDateTime>,

    #[serde(default)]
    #[validate(custom(function = "validate_roster"))]
    pub participant_ids: Vec<Uuid>,

    pub sport_event_id: Option<Uuid>,
}

/// Partial update of a match. The sport cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchRequest {
    pub team_a_id: Option<Uuid>,

    pub team_b_id: Option<Uuid>,

    pub modality: Option<Modality>,

    pub status: Option<MatchStatus>,

    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub score_a: Option<i32>,

    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub score_b: Option<i32>,

    pub start_time: Option<NaiveDateTime>,

    pub end_time: Option<NaiveDateTime>,

    #[validate(custom(function = "validate_roster"))]
    pub participant_ids: Option<Vec<Uuid>>,

    pub sport_event_id: Option<Uuid>,
}

/// A participant may appear only once on a roster
fn validate_roster(ids: &[Uuid]) -> Result<(), ValidationError> {
    for (i, id) in ids.iter().enumerate() {
        if ids[i + 1..].contains(id) {
            let mut error = ValidationError::new("duplicate_participant");
            error.message = Some("Participant listed more than once".into());
            return Err(error);
        }
    }
    Ok(())
}

/// Checks that span several fields of a match
pub fn validate_schedule(
    team_a_id: Uuid,
    team_b_id: Uuid,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
) -> Result<(), &'static str> {
    if team_a_id == team_b_id {
        return Err("A match needs two different teams");
    }

    if let (Some(start), Some(end)) = (start_time, end_time)
        && end < start
    {
        return Err("End time must be on or after start time");
    }

    Ok(())
}

impl CreateMatchRequest {
    pub fn validate_schedule(&self) -> Result<(), &'static str> {
        validate_schedule(
            self.team_a_id,
            self.team_b_id,
            self.start_time,
            self.end_time,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub sport: Sport,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub score_a: i32,
    pub score_b: i32,
    pub modality: Modality,
    pub status: MatchStatus,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub sport_event_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        let id = m.match_id;
        let mut links = Links::new()
            .with("self", format!("/matches/{id}"))
            .with("detailed", format!("/matches/{id}/detailed"))
            .with("type", format!("/matches/{id}/type"))
            .with("team_a", format!("/teams/{}", m.team_a_id))
            .with("team_b", format!("/teams/{}", m.team_b_id))
            .with("goals", format!("/matches/{id}/goals"))
            .with("cards", format!("/matches/{id}/cards"));
        if let Some(event_id) = m.sport_event_id {
            links = links.with("event", format!("/events/{event_id}"));
        }

        Self {
            match_id: m.match_id,
            sport: m.sport,
            team_a_id: m.team_a_id,
            team_b_id: m.team_b_id,
            score_a: m.score_a,
            score_b: m.score_b,
            modality: m.modality,
            status: m.status,
            start_time: m.start_time,
            end_time: m.end_time,
            sport_event_id: m.sport_event_id,
            created_at: m.created_at,
            links,
        }
    }
}

/// A match with its roster and sport specific records
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchDetailResponse {
    #[serde(flatten)]
    pub summary: MatchResponse,
    pub participants: Vec<ParticipantResponse>,
    pub details: MatchDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn same_team_on_both_sides_is_rejected() {
        let team = Uuid::new_v4();
        assert!(validate_schedule(team, team, None, None).is_err());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        assert!(validate_schedule(a, b, Some(at(10)), Some(at(9))).is_err());
        assert!(validate_schedule(a, b, Some(at(10)), Some(at(10))).is_ok());
        assert!(validate_schedule(a, b, None, Some(at(9))).is_ok());
    }

    #[test]
    fn create_request_defaults() {
        let json = serde_json::json!({
            "team_a_id": Uuid::new_v4(),
            "team_b_id": Uuid::new_v4(),
            "modality": "MIXED"
        });
        let req: CreateMatchRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.status, MatchStatus::Scheduled);
        assert!(req.participant_ids.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn repeated_participant_fails_validation() {
        let (a, b, p) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let json = serde_json::json!({
            "team_a_id": a,
            "team_b_id": b,
            "modality": "FEMININE",
            "participant_ids": [p, Uuid::new_v4(), p]
        });
        let req: CreateMatchRequest = serde_json::from_value(json).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("participant_ids"));

        let update = UpdateMatchRequest {
            participant_ids: Some(vec![p, p]),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateMatchRequest {
            participant_ids: Some(vec![p]),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn negative_score_fails_validation() {
        let req = UpdateMatchRequest {
            score_b: Some(-2),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("score_b"));
    }

    #[test]
    fn response_links_event_only_when_present() {
        let m = Match {
            match_id: Uuid::new_v4(),
            sport: Sport::Chess,
            team_a_id: Uuid::new_v4(),
            team_b_id: Uuid::new_v4(),
            score_a: 1,
            score_b: 0,
            modality: Modality::Mixed,
            status: MatchStatus::Finished,
            start_time: None,
            end_time: None,
            sport_event_id: None,
            created_at: NaiveDateTime::default(),
        };
        let response = MatchResponse::from(m);
        assert!(response.links.get("event").is_none());
        assert!(response.links.get("type").unwrap().ends_with("/type"));
    }
}
