//! Turn phase state machine.
//!
//! One turn runs: draw (deck or bin) → keep or discard (deck draws only) →
//! pick a target cell → end of turn. Every action is a synchronous call that
//! either advances the phase or does nothing. Actions outside their phase,
//! by the wrong player, on an invalid cell, or after the round has ended are
//! silent no-ops reported as `false`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::snapshot::GameSnapshot;
use crate::core::action::{ActionCategory, CommandAction};
use crate::core::card::Card;
use crate::core::player::PlayerId;
use crate::rules::GameEngine;
use crate::zones::hand::Coord;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for a deck or bin draw.
    #[default]
    ChooseDraw,
    /// A deck card is pending: keep it or discard it.
    ChooseKeepOrDiscard,
    /// Keeping the pending card: pick the cell it replaces.
    ChooseTargetReplace,
    /// The drawn card was discarded: pick a hidden cell to reveal.
    ChooseTargetReveal,
    /// Taking the bin card: pick the cell it replaces.
    ChooseTargetBinReplace,
}

impl TurnPhase {
    /// Short prompt for the acting player.
    #[must_use]
    pub const fn instruction(self) -> &'static str {
        match self {
            TurnPhase::ChooseDraw => "Draw from the deck or the bin",
            TurnPhase::ChooseKeepOrDiscard => "Keep or discard the drawn card",
            TurnPhase::ChooseTargetReplace => "Choose a card to replace",
            TurnPhase::ChooseTargetReveal => "Choose a card to reveal",
            TurnPhase::ChooseTargetBinReplace => "Choose a card to replace with the bin card",
        }
    }

    /// Token category accepted by [`TurnController::dispatch`] in this phase.
    #[must_use]
    pub const fn category(self) -> Option<ActionCategory> {
        match self {
            TurnPhase::ChooseDraw => Some(ActionCategory::Draw),
            TurnPhase::ChooseKeepOrDiscard => Some(ActionCategory::Play),
            _ => None,
        }
    }

    /// Whether this phase ends with a cell selection.
    #[must_use]
    pub const fn awaits_cell(self) -> bool {
        matches!(
            self,
            TurnPhase::ChooseTargetReplace | TurnPhase::ChooseTargetReveal | TurnPhase::ChooseTargetBinReplace
        )
    }
}

/// Where a pending card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    /// Drawn from the pool; the player holds it until it is placed.
    Deck,
    /// The visible bin card; it stays in the bin until a cell is picked.
    Bin,
}

/// A card drawn but not yet placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingCard {
    /// The card.
    pub card: Card,
    /// Where it came from.
    pub source: DrawSource,
}

/// Drives one round through the turn phases.
///
/// ## Example
///
/// ```
/// use skyjo_engine::core::{GameConfig, PlayerId};
/// use skyjo_engine::rules::GameEngine;
/// use skyjo_engine::turn::{TurnController, TurnPhase};
///
/// let engine = GameEngine::new(GameConfig::lettered(2).with_seed(3)).unwrap();
/// let mut turns = TurnController::new(engine);
///
/// assert!(turns.draw_from_deck());
/// assert!(turns.discard());
/// assert_eq!(turns.phase(), TurnPhase::ChooseTargetReveal);
///
/// // Not player 1's turn.
/// assert!(!turns.select_cell(PlayerId::new(1), 0, 0));
///
/// assert!(turns.select_cell(PlayerId::new(0), 0, 0));
/// assert_eq!(turns.current_player(), PlayerId::new(1));
/// assert_eq!(turns.phase(), TurnPhase::ChooseDraw);
/// ```
#[derive(Clone, Debug)]
pub struct TurnController {
    engine: GameEngine,
    phase: TurnPhase,
    pending: Option<PendingCard>,
}

impl TurnController {
    /// Start at `ChooseDraw` for the engine's current player.
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            phase: TurnPhase::ChooseDraw,
            pending: None,
        }
    }

    // === Actions ===

    /// `ChooseDraw` → `ChooseKeepOrDiscard`, holding a random pool card.
    ///
    /// No-op if the pool is empty.
    pub fn draw_from_deck(&mut self) -> bool {
        if !self.accepts(TurnPhase::ChooseDraw) {
            return false;
        }
        match self.engine.draw_from_deck(self.engine.current_player()) {
            Ok(card) => {
                self.pending = Some(PendingCard { card, source: DrawSource::Deck });
                self.enter(TurnPhase::ChooseKeepOrDiscard);
                true
            }
            Err(err) => {
                debug!("Deck draw ignored: {}", err);
                false
            }
        }
    }

    /// `ChooseDraw` → `ChooseTargetBinReplace`, pointing at the bin card.
    ///
    /// The card stays in the bin until a target cell is selected. No-op if
    /// the bin is empty.
    pub fn draw_from_bin(&mut self) -> bool {
        if !self.accepts(TurnPhase::ChooseDraw) {
            return false;
        }
        let Some(card) = self.engine.peek_bin() else {
            debug!("Bin draw ignored: the bin is empty");
            return false;
        };
        self.pending = Some(PendingCard { card, source: DrawSource::Bin });
        self.enter(TurnPhase::ChooseTargetBinReplace);
        true
    }

    /// `ChooseKeepOrDiscard` → `ChooseTargetReplace`, keeping the pending card.
    pub fn keep(&mut self) -> bool {
        if !self.accepts(TurnPhase::ChooseKeepOrDiscard) || self.pending.is_none() {
            return false;
        }
        self.enter(TurnPhase::ChooseTargetReplace);
        true
    }

    /// `ChooseKeepOrDiscard` → `ChooseTargetReveal`, sending the pending card
    /// to the bin.
    pub fn discard(&mut self) -> bool {
        if !self.accepts(TurnPhase::ChooseKeepOrDiscard) {
            return false;
        }
        let Some(pending) = self.pending else {
            return false;
        };
        match self.engine.discard(self.engine.current_player(), pending.card) {
            Ok(()) => {
                self.pending = None;
                self.enter(TurnPhase::ChooseTargetReveal);
                true
            }
            Err(err) => {
                debug!("Discard ignored: {}", err);
                false
            }
        }
    }

    /// Complete the turn on one of the acting player's cells.
    ///
    /// - `ChooseTargetReplace`: the pending card replaces the cell.
    /// - `ChooseTargetReveal`: the cell is revealed. Unlike the engine's
    ///   idempotent reveal, a face-up cell is refused here so a discard is
    ///   always paired with a newly revealed card.
    /// - `ChooseTargetBinReplace`: the bin card replaces the cell.
    ///
    /// Ignored in any other phase, for any player other than the current
    /// one, and for cells outside the grid.
    pub fn select_cell(&mut self, player: PlayerId, row: usize, col: usize) -> bool {
        if self.engine.is_game_over() || !self.phase.awaits_cell() {
            return false;
        }
        if player != self.engine.current_player() {
            debug!("{} tried to play out of turn", player);
            return false;
        }
        let Ok(at) = Coord::new(row, col) else {
            return false;
        };

        let result = match (self.phase, self.pending) {
            (TurnPhase::ChooseTargetReplace, Some(pending)) => {
                self.engine.keep(player, at.row(), at.col(), pending.card).map(drop)
            }
            (TurnPhase::ChooseTargetReveal, _) => {
                let hidden = self
                    .engine
                    .hand(player)
                    .map(|hand| !hand.is_revealed(at))
                    .unwrap_or(false);
                if !hidden {
                    return false;
                }
                self.engine.reveal(player, at.row(), at.col()).map(drop)
            }
            (TurnPhase::ChooseTargetBinReplace, Some(_)) => {
                self.engine.draw_from_bin(player, at.row(), at.col()).map(drop)
            }
            _ => return false,
        };

        match result {
            Ok(()) => {
                self.end_turn();
                true
            }
            Err(err) => {
                debug!("Cell selection ignored: {}", err);
                false
            }
        }
    }

    /// Apply a command token for the current phase.
    ///
    /// In `ChooseDraw` accepts `dd` / `db`; in `ChooseKeepOrDiscard` accepts
    /// `rc` (keep) / `dc` (discard). Anything else is a no-op.
    pub fn dispatch(&mut self, token: &str) -> bool {
        let Some(category) = self.phase.category() else {
            return false;
        };
        match self.engine.legality_table().resolve(token, category) {
            Ok(CommandAction::DrawFromDeck) => self.draw_from_deck(),
            Ok(CommandAction::DrawFromBin) => self.draw_from_bin(),
            Ok(CommandAction::ReplaceCard) => self.keep(),
            Ok(CommandAction::DiscoverCard) => self.discard(),
            Err(err) => {
                debug!("{}", err);
                false
            }
        }
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The card drawn this turn and not yet placed.
    #[must_use]
    pub fn pending(&self) -> Option<PendingCard> {
        self.pending
    }

    /// The acting player.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.engine.current_player()
    }

    /// True once any player has revealed their whole grid.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// The engine, read-only. Moves go through the controller.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Give back the engine.
    #[must_use]
    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Every card in play, including a pending deck card.
    ///
    /// A pending bin card is still in the bin and is counted there.
    #[must_use]
    pub fn card_census(&self) -> Vec<Card> {
        self.engine.card_census()
    }

    /// Immutable view of the round for front ends to render.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.engine, self.phase, self.pending.map(|p| p.card))
    }

    fn accepts(&self, phase: TurnPhase) -> bool {
        self.phase == phase && !self.engine.is_game_over()
    }

    fn enter(&mut self, phase: TurnPhase) {
        debug!("{}: {:?} -> {:?}", self.engine.current_player(), self.phase, phase);
        self.phase = phase;
    }

    fn end_turn(&mut self) {
        self.pending = None;
        self.phase = TurnPhase::ChooseDraw;
        self.engine.advance_turn();

        if let Some(finisher) = self.engine.finisher() {
            log::info!("{} revealed every card; the round is over", finisher);
        }
    }
}
