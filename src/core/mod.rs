//! Core value types: cards, players, RNG, command tokens, configuration, errors.
//!
//! Nothing in this module holds round state. The deck and hands live in
//! `zones`, the rules in `rules`, turn sequencing in `turn`.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionCategory, CommandAction, LegalityTable};
pub use card::{Card, CardTier};
pub use config::{GameConfig, DECK_SIZE, HAND_SIZE, MAX_PLAYERS};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
