//! Move history.
//!
//! Every mutation the engine commits is appended as a [`MoveRecord`]. The
//! history is an `im::Vector`, so snapshots share it instead of copying.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::player::PlayerId;
use crate::zones::hand::Coord;

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A card left the pool for the player's hand.
    DrawFromDeck { card: Card },
    /// A drawn card replaced a grid card; the displaced card went to the bin.
    Keep { at: Coord, placed: Card, displaced: Card },
    /// A drawn card went straight to the bin.
    Discard { card: Card },
    /// A hidden cell was turned face-up.
    Reveal { at: Coord, card: Card },
    /// The bin card replaced a grid card; the displaced card went to the bin.
    BinReplace { at: Coord, taken: Card, displaced: Card },
}

/// One entry in the round's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Turn number when the move was committed.
    pub turn: u32,

    /// The move.
    pub kind: MoveKind,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, kind: MoveKind) -> Self {
        Self { player, turn, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::new(
            PlayerId::new(1),
            4,
            MoveKind::Keep {
                at: Coord::new(2, 3).unwrap(),
                placed: Card::new(-2).unwrap(),
                displaced: Card::new(12).unwrap(),
            },
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
