//! Error type shared by every engine operation.
//!
//! Fallible operations return `Result<T, GameError>`. Turn-controller
//! actions never surface these: an action that would fail is a silent no-op.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Card;
use super::player::PlayerId;

/// Errors raised by the deck, hands, and engine.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    /// The player is not part of this round's roster.
    #[error("{0} is not seated in this round")]
    PlayerNotFound(PlayerId),

    /// A draw was attempted against an empty pool.
    #[error("the draw pool is empty")]
    EmptyDeck,

    /// A bin draw was attempted before anything was discarded.
    #[error("the bin is empty: nothing has been discarded yet")]
    EmptyBin,

    /// A value that is not a legal card was supplied where a card is required.
    #[error("invalid card `{0}`: expected an integer from -2 to 12")]
    InvalidCard(String),

    /// A command token is unknown or belongs to another category.
    #[error("illegal move `{token}` for the {category} phase")]
    IllegalMove { token: String, category: String },

    /// A category name other than `draw` or `play`.
    #[error("unknown action category `{0}`")]
    UnknownCategory(String),

    /// A grid coordinate lies outside the 3x4 grid.
    #[error("cell ({row}, {col}) is outside the 3x4 grid")]
    InvalidCoordinate { row: usize, col: usize },

    /// Row or column text that is not a number.
    #[error("`{row}, {col}` is not a grid cell")]
    MalformedCoordinate { row: String, col: String },

    /// A drawn card was placed but the player holds no drawn card.
    #[error("{0} has no drawn card to place")]
    NothingDrawn(PlayerId),

    /// A draw was attempted while the player still holds an unplaced card.
    #[error("{0} must place the card they already drew")]
    AlreadyDrawn(PlayerId),

    /// The card being placed is not the one that was drawn.
    #[error("{given} is not the drawn card {drawn}")]
    NotTheDrawnCard { drawn: Card, given: Card },

    /// The roster is empty or larger than the deck can deal.
    #[error("a round needs between 1 and {max} players, got {count}")]
    InvalidPlayerCount { count: usize, max: usize },
}

impl GameError {
    /// Whether the caller can carry on with the round after this error.
    ///
    /// Only an unknown player is fatal; everything else just disallows the
    /// attempted action.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::PlayerNotFound(_) | GameError::InvalidPlayerCount { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::PlayerNotFound(PlayerId::new(3)).to_string(),
            "Player 3 is not seated in this round"
        );
        assert_eq!(
            GameError::InvalidCard("x".into()).to_string(),
            "invalid card `x`: expected an integer from -2 to 12"
        );
        assert_eq!(
            GameError::IllegalMove { token: "rc".into(), category: "draw".into() }.to_string(),
            "illegal move `rc` for the draw phase"
        );
        assert_eq!(
            GameError::InvalidCoordinate { row: 3, col: 0 }.to_string(),
            "cell (3, 0) is outside the 3x4 grid"
        );
        assert_eq!(
            GameError::NotTheDrawnCard { drawn: Card::from_raw(5), given: Card::from_raw(12) }.to_string(),
            "12 is not the drawn card 5"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(GameError::EmptyDeck.is_recoverable());
        assert!(GameError::EmptyBin.is_recoverable());
        assert!(GameError::InvalidCard("?".into()).is_recoverable());
        assert!(GameError::NothingDrawn(PlayerId::new(0)).is_recoverable());
        assert!(!GameError::PlayerNotFound(PlayerId::new(0)).is_recoverable());
    }
}
