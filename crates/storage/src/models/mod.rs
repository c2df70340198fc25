mod goal;
mod kinds;
mod matches;
mod participant;
mod penalty_card;
mod sport_event;
mod team;

pub use goal::Goal;
pub use kinds::{CardColor, MatchStatus, Modality, ParseKindError, Sport};
pub use matches::{Match, MatchDetails};
pub use participant::Participant;
pub use penalty_card::PenaltyCard;
pub use sport_event::SportEvent;
pub use team::Team;
