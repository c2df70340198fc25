use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Goal, MatchStatus, Modality, PenaltyCard, Sport};

/// A row of the `matches` table; `sport` is the discriminator column
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub sport: Sport,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub score_a: i32,
    pub score_b: i32,
    pub modality: Modality,
    pub status: MatchStatus,
    pub start_time: Option<chrono::NaiveDateTime>,
    pub end_time: Option<chrono::NaiveDateTime>,
    pub sport_event_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}

/// Sport specific part of a match, tagged by the discriminator.
///
/// Only the sports that record scoring actions or penalties carry child collections.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "sport", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchDetails {
    Futsal {
        goals: Vec<Goal>,
        penalty_cards: Vec<PenaltyCard>,
    },
    Handball {
        goals: Vec<Goal>,
        penalty_cards: Vec<PenaltyCard>,
    },
    Basketball {
        penalty_cards: Vec<PenaltyCard>,
    },
    Volleyball,
    TableTennis,
    Chess,
}

impl MatchDetails {
    pub fn sport(&self) -> Sport {
        match self {
            MatchDetails::Futsal { .. } => Sport::Futsal,
            MatchDetails::Handball { .. } => Sport::Handball,
            MatchDetails::Basketball { .. } => Sport::Basketball,
            MatchDetails::Volleyball => Sport::Volleyball,
            MatchDetails::TableTennis => Sport::TableTennis,
            MatchDetails::Chess => Sport::Chess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_report_their_sport() {
        assert_eq!(MatchDetails::TableTennis.sport(), Sport::TableTennis);
        let handball = MatchDetails::Handball {
            goals: vec![],
            penalty_cards: vec![],
        };
        assert_eq!(handball.sport(), Sport::Handball);
    }

    #[test]
    fn details_are_tagged_by_sport() {
        let json = serde_json::to_value(MatchDetails::Chess).unwrap();
        assert_eq!(json, serde_json::json!({ "sport": "CHESS" }));

        let json = serde_json::to_value(MatchDetails::Basketball {
            penalty_cards: vec![],
        })
        .unwrap();
        assert_eq!(json["sport"], "BASKETBALL");
        assert!(json["penalty_cards"].as_array().unwrap().is_empty());
        assert!(json.get("goals").is_none());
    }
}
