//! Turn sequencing and the snapshots front ends render.

pub mod controller;
pub mod snapshot;

pub use controller::{DrawSource, PendingCard, TurnController, TurnPhase};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
