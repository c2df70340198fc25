pub mod common;
pub mod event;
pub mod matches;
pub mod participant;
pub mod scoring;
pub mod team;
