//! Immutable round snapshots for front ends.
//!
//! A front end never reads live engine state while rendering: it asks the
//! controller for a `GameSnapshot` after each action and draws that. Hidden
//! cards appear only as `CardView::Hidden`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::controller::TurnPhase;
use crate::core::card::Card;
use crate::core::player::PlayerId;
use crate::rules::{GameEngine, MoveRecord};
use crate::zones::hand::ViewGrid;

/// What one player's grid looks like to everyone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Seat.
    pub id: PlayerId,
    /// Display name from the roster.
    pub name: String,
    /// The grid with hidden cells masked.
    pub view: ViewGrid,
    /// Sum of the revealed cards.
    pub revealed_total: i32,
    /// Number of face-up cells, 12 when the grid is complete.
    pub revealed_count: usize,
    /// Whether this player is the one acting.
    pub active: bool,
}

/// The whole round at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Where the acting player is in their turn.
    pub phase: TurnPhase,
    /// Prompt for the acting player.
    pub instruction: String,
    /// The acting player.
    pub current_player: PlayerId,
    /// Turn counter, starting at 1.
    pub turn_number: u32,
    /// The card drawn this turn and not yet placed.
    pub pending_card: Option<Card>,
    /// The visible bin card.
    pub bin: Option<Card>,
    /// Cards left in the draw pool.
    pub cards_remaining: usize,
    /// True once some grid is fully revealed.
    pub round_over: bool,
    /// Every player in seat order.
    pub players: Vec<PlayerSnapshot>,
    /// Committed moves, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameSnapshot {
    /// Capture the engine together with the controller's turn state.
    #[must_use]
    pub fn capture(engine: &GameEngine, phase: TurnPhase, pending_card: Option<Card>) -> Self {
        let current = engine.current_player();
        let players = engine
            .player_ids()
            .filter_map(|id| {
                let hand = engine.hand(id).ok()?;
                Some(PlayerSnapshot {
                    id,
                    name: engine.player_name(id).ok()?.to_string(),
                    view: hand.view(),
                    revealed_total: hand.revealed_total(),
                    revealed_count: hand.revealed_count(),
                    active: id == current,
                })
            })
            .collect();

        Self {
            phase,
            instruction: phase.instruction().to_string(),
            current_player: current,
            turn_number: engine.turn_number(),
            pending_card,
            bin: engine.peek_bin(),
            cards_remaining: engine.cards_remaining(),
            round_over: engine.is_game_over(),
            players,
            history: engine.history().clone(),
        }
    }

    /// The snapshot of the acting player.
    #[must_use]
    pub fn active_player(&self) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.active)
    }
}
