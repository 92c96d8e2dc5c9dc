//! Where cards live: the shared deck and each player's grid.
//!
//! Both are passive containers. Only the rules engine moves cards between
//! them, which is what keeps the 150-card total conserved.

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::{CardView, Coord, PlayerHand, ViewGrid, GRID_COLS, GRID_ROWS};
