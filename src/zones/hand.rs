//! One player's 3x4 card grid.
//!
//! The grid holds the authoritative ("truth") card at every cell plus the set
//! of revealed cells. What players see is [`PlayerHand::view`], a projection
//! computed on demand; it is never stored, so it cannot drift from the truth.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::config::HAND_SIZE;
use crate::core::error::GameError;

/// Grid rows.
pub const GRID_ROWS: usize = 3;

/// Grid columns.
pub const GRID_COLS: usize = 4;

/// A validated grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, rejecting cells outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row < GRID_ROWS && col < GRID_COLS {
            Ok(Self { row: row as u8, col: col as u8 })
        } else {
            Err(GameError::InvalidCoordinate { row, col })
        }
    }

    /// Parse a coordinate from user-typed row and column text.
    ///
    /// ```
    /// use skyjo_engine::zones::Coord;
    ///
    /// assert_eq!(Coord::parse("1", " 2").unwrap(), Coord::new(1, 2).unwrap());
    /// assert!(Coord::parse("one", "2").is_err());
    /// assert!(Coord::parse("3", "0").is_err());
    /// ```
    pub fn parse(row: &str, col: &str) -> Result<Self, GameError> {
        let malformed = || GameError::MalformedCoordinate {
            row: row.trim().to_string(),
            col: col.trim().to_string(),
        };
        let r: usize = row.trim().parse().map_err(|_| malformed())?;
        let c: usize = col.trim().parse().map_err(|_| malformed())?;
        Self::new(r, c)
    }

    /// Row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_ROWS as u8).flat_map(|row| (0..GRID_COLS as u8).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a player sees at one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardView {
    /// Face-down.
    Hidden,
    /// Face-up with its value.
    Revealed(Card),
}

impl CardView {
    /// The visible card, if any.
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            CardView::Hidden => None,
            CardView::Revealed(card) => Some(card),
        }
    }
}

impl std::fmt::Display for CardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardView::Hidden => f.write_str("?"),
            CardView::Revealed(card) => write!(f, "{card}"),
        }
    }
}

/// Display grid produced by [`PlayerHand::view`].
pub type ViewGrid = [[CardView; GRID_COLS]; GRID_ROWS];

/// A player's truth grid and revealed cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    truth: [[Card; GRID_COLS]; GRID_ROWS],
    revealed: OrdSet<Coord>,
}

impl PlayerHand {
    /// Create a fully hidden hand from dealt cards.
    #[must_use]
    pub fn new(truth: [[Card; GRID_COLS]; GRID_ROWS]) -> Self {
        Self {
            truth,
            revealed: OrdSet::new(),
        }
    }

    /// Reveal a cell and return its card. Revealing twice changes nothing.
    pub fn reveal(&mut self, at: Coord) -> Card {
        self.revealed.insert(at);
        self.card_at(at)
    }

    /// Put `card` at a cell, reveal the cell, and return the card it displaced.
    pub fn replace(&mut self, at: Coord, card: Card) -> Card {
        let old = std::mem::replace(&mut self.truth[at.row()][at.col()], card);
        self.revealed.insert(at);
        old
    }

    /// The display grid: values at revealed cells, `Hidden` elsewhere.
    #[must_use]
    pub fn view(&self) -> ViewGrid {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let card = self.truth[row][col];
                let at = Coord { row: row as u8, col: col as u8 };
                if self.revealed.contains(&at) {
                    CardView::Revealed(card)
                } else {
                    CardView::Hidden
                }
            })
        })
    }

    /// Sum of the revealed cards. Not a final score: hidden cards are ignored.
    #[must_use]
    pub fn revealed_total(&self) -> i32 {
        self.revealed
            .iter()
            .map(|&at| i32::from(self.card_at(at).value()))
            .sum()
    }

    /// Whether a cell is face-up.
    #[must_use]
    pub fn is_revealed(&self, at: Coord) -> bool {
        self.revealed.contains(&at)
    }

    /// Number of face-up cells.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Whether every cell is face-up.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.len() == HAND_SIZE
    }

    /// Face-up cells in row-major order.
    #[must_use]
    pub fn revealed(&self) -> &OrdSet<Coord> {
        &self.revealed
    }

    /// Authoritative cards, row-major. Hidden cards included: front ends
    /// must render [`PlayerHand::view`] instead.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.truth.iter().flatten().copied()
    }

    fn card_at(&self, at: Coord) -> Card {
        self.truth[at.row()][at.col()]
    }
}
