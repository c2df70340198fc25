use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::Links;
use crate::models::Team;

/// Request payload for registering a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0, message = "Points cannot be negative"))]
    pub points: Option<i32>,
}

/// Partial update of a team; absent fields keep their value
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "Points cannot be negative"))]
    pub points: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub name: String,
    pub points: i32,
    pub created_at: NaiveDateTime,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        let id = team.team_id;
        Self {
            team_id: team.team_id,
            name: team.name,
            points: team.points,
            created_at: team.created_at,
            links: Links::new()
                .with("self", format!("/teams/{id}"))
                .with("participants", format!("/teams/{id}/participants"))
                .with("matches", format!("/teams/{id}/matches")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let req = CreateTeamRequest {
            name: String::new(),
            points: None,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn negative_points_are_rejected() {
        let req = UpdateTeamRequest {
            name: None,
            points: Some(-1),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("points"));
    }

    #[test]
    fn response_links_to_members_and_matches() {
        let team = Team {
            team_id: Uuid::nil(),
            name: "PAPA_LEGUAS".to_string(),
            points: 3,
            created_at: NaiveDateTime::default(),
        };
        let response = TeamResponse::from(team);
        let id = Uuid::nil();
        assert_eq!(
            response.links.get("participants"),
            Some(format!("/api/teams/{id}/participants").as_str())
        );

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["_links"]["self"]["href"].is_string());
    }
}
