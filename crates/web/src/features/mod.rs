pub mod events;
pub mod matches;
pub mod participants;
pub mod scoring;
pub mod teams;
