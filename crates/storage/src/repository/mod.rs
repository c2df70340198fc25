pub mod event;
pub mod goal;
pub mod matches;
pub mod participant;
pub mod penalty_card;
pub mod team;
