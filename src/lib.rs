//! # skyjo-engine
//!
//! Rules engine for a turn-based card-matching game in the style of Skyjo:
//! N players each hold a face-down 3x4 grid dealt from a shared 150-card
//! deck, and take turns drawing from the pool or the single-card bin to swap
//! or reveal cards. The round ends the moment one player has revealed their
//! whole grid.
//!
//! ## Design Principles
//!
//! 1. **Front-end agnostic**: no prompts, widgets, or token parsing loops.
//!    Text and graphical front ends drive the same operations and render the
//!    returned [`GameSnapshot`].
//!
//! 2. **Reactive**: every operation is a synchronous call that commits
//!    completely, fails with nothing changed, or (for turn actions) is a
//!    silent no-op. Nothing blocks or waits for input.
//!
//! 3. **Conservation**: cards only move. Pool, discard pile, grids, and any
//!    pending card always add up to the 150-card deck.
//!
//! ## Modules
//!
//! - `core`: cards, players, RNG, command tokens, configuration, errors
//! - `zones`: the shared deck and each player's grid
//! - `rules`: `GameEngine`, which applies moves and detects end of round
//! - `turn`: `TurnController` phase machine and `GameSnapshot`
//!
//! ## Example
//!
//! ```
//! use skyjo_engine::{GameConfig, GameEngine, TurnController, TurnPhase};
//!
//! let engine = GameEngine::new(GameConfig::new(["Ana", "Ben"]).with_seed(1)).unwrap();
//! let mut turns = TurnController::new(engine);
//!
//! turns.dispatch("dd");
//! turns.dispatch("rc");
//! let player = turns.current_player();
//! turns.select_cell(player, 0, 0);
//!
//! let snapshot = turns.snapshot();
//! assert_eq!(snapshot.phase, TurnPhase::ChooseDraw);
//! assert_eq!(snapshot.active_player().unwrap().name, "Ben");
//! ```

pub mod core;
pub mod rules;
pub mod turn;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionCategory, Card, CardTier, CommandAction, GameConfig, GameError, GameRng, LegalityTable,
    PlayerId, PlayerMap,
};

pub use crate::zones::{CardView, Coord, Deck, PlayerHand, ViewGrid};

pub use crate::rules::{GameEngine, MoveKind, MoveRecord};

pub use crate::turn::{DrawSource, GameSnapshot, PendingCard, PlayerSnapshot, TurnController, TurnPhase};
