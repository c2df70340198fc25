pub mod match_mediator;
