//! Enumerations stored as upper snake case `VARCHAR` columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raised when a requested sport code does not name a known sport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseKindError {}

/// Sport played in a match; doubles as the match discriminator
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sport {
    Futsal,
    Handball,
    Basketball,
    Volleyball,
    TableTennis,
    Chess,
}

impl Sport {
    pub const ALL: [Sport; 6] = [
        Sport::Futsal,
        Sport::Handball,
        Sport::Basketball,
        Sport::Volleyball,
        Sport::TableTennis,
        Sport::Chess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Futsal => "FUTSAL",
            Sport::Handball => "HANDBALL",
            Sport::Basketball => "BASKETBALL",
            Sport::Volleyball => "VOLLEYBALL",
            Sport::TableTennis => "TABLE_TENNIS",
            Sport::Chess => "CHESS",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = ParseKindError;

    /// Codes are matched case-insensitively, `table-tennis` is accepted for `TABLE_TENNIS`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase().replace('-', "_");
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str() == code)
            .ok_or_else(|| ParseKindError {
                kind: "sport",
                value: s.to_string(),
            })
    }
}

/// Gender category of a match or event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Masculine,
    Feminine,
    Mixed,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Masculine => "MASCULINE",
            Modality::Feminine => "FEMININE",
            Modality::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a match or a sport event
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::InProgress => "IN_PROGRESS",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a penalty card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardColor {
    Yellow,
    Red,
}

impl CardColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Yellow => "YELLOW",
            CardColor::Red => "RED",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_codes_round_trip_through_display() {
        for sport in Sport::ALL {
            assert_eq!(sport.to_string().parse::<Sport>(), Ok(sport));
        }
    }

    #[test]
    fn sport_parsing_is_lenient_on_case_and_dashes() {
        assert_eq!("chess".parse::<Sport>(), Ok(Sport::Chess));
        assert_eq!("table-tennis".parse::<Sport>(), Ok(Sport::TableTennis));
        assert_eq!(" Futsal ".parse::<Sport>(), Ok(Sport::Futsal));
    }

    #[test]
    fn unknown_sport_is_rejected() {
        let err = "CRICKET".parse::<Sport>().unwrap_err();
        assert_eq!(err.kind, "sport");
        assert_eq!(err.to_string(), "unknown sport 'CRICKET'");
    }

    #[test]
    fn serde_uses_upper_snake_case() {
        let json = serde_json::to_string(&Sport::TableTennis).unwrap();
        assert_eq!(json, "\"TABLE_TENNIS\"");
        let status: MatchStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, MatchStatus::InProgress);
    }

    #[test]
    fn other_kinds_display_their_codes() {
        assert_eq!(Modality::Mixed.to_string(), "MIXED");
        assert_eq!(CardColor::Red.to_string(), "RED");
        assert_eq!(MatchStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(MatchStatus::default(), MatchStatus::Scheduled);
    }
}
