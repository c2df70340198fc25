use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::Links;
use crate::models::{MatchStatus, Modality, Sport, SportEvent};

/// Request payload for opening a tournament bracket
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSportEventRequest {
    pub sport: Sport,

    pub modality: Modality,

    #[validate(range(min = 0, message = "Total matches cannot be negative"))]
    pub total_matches: Option<i32>,

    pub first_place_team_id: Option<Uuid>,

    pub second_place_team_id: Option<Uuid>,

    pub third_place_team_id: Option<Uuid>,

    #[serde(default)]
    pub status: MatchStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSportEventRequest {
    pub modality: Option<Modality>,

    #[validate(range(min = 0, message = "Total matches cannot be negative"))]
    pub total_matches: Option<i32>,

    pub first_place_team_id: Option<Uuid>,

    pub second_place_team_id: Option<Uuid>,

    pub third_place_team_id: Option<Uuid>,

    pub status: Option<MatchStatus>,
}

/// A team may hold at most one podium position
pub fn validate_placements(placements: [Option<Uuid>; 3]) -> Result<(), &'static str> {
    let taken: Vec<Uuid> = placements.into_iter().flatten().collect();
    for (i, team) in taken.iter().enumerate() {
        if taken[i + 1..].contains(team) {
            return Err("A team can only hold one placement");
        }
    }
    Ok(())
}

impl CreateSportEventRequest {
    pub fn placements(&self) -> [Option<Uuid>; 3] {
        [
            self.first_place_team_id,
            self.second_place_team_id,
            self.third_place_team_id,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SportEventResponse {
    pub event_id: Uuid,
    pub sport: Sport,
    pub modality: Modality,
    pub total_matches: i32,
    pub first_place_team_id: Option<Uuid>,
    pub second_place_team_id: Option<Uuid>,
    pub third_place_team_id: Option<Uuid>,
    pub status: MatchStatus,
    pub created_at: NaiveDateTime,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<SportEvent> for SportEventResponse {
    fn from(event: SportEvent) -> Self {
        let id = event.event_id;
        let mut links = Links::new()
            .with("self", format!("/events/{id}"))
            .with("matches", format!("/events/{id}/matches"));
        for (rel, team) in [
            ("first_place", event.first_place_team_id),
            ("second_place", event.second_place_team_id),
            ("third_place", event.third_place_team_id),
        ] {
            if let Some(team) = team {
                links = links.with(rel, format!("/teams/{team}"));
            }
        }

        Self {
            event_id: event.event_id,
            sport: event.sport,
            modality: event.modality,
            total_matches: event.total_matches,
            first_place_team_id: event.first_place_team_id,
            second_place_team_id: event.second_place_team_id,
            third_place_team_id: event.third_place_team_id,
            status: event.status,
            created_at: event.created_at,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_placement_is_rejected() {
        let team = Uuid::new_v4();
        assert!(validate_placements([Some(team), None, Some(team)]).is_err());
        assert!(validate_placements([Some(team), Some(Uuid::new_v4()), None]).is_ok());
        assert!(validate_placements([None, None, None]).is_ok());
    }

    #[test]
    fn unknown_sport_in_body_fails_to_deserialize() {
        let json = serde_json::json!({ "sport": "CRICKET", "modality": "MIXED" });
        assert!(serde_json::from_value::<CreateSportEventRequest>(json).is_err());
    }
}
