//! Rules engine: move legality, move application, end-of-round detection.
//!
//! `GameEngine` is the only component that moves cards. It knows nothing
//! about turn phases; `turn::TurnController` sequences calls into it.

pub mod engine;
pub mod history;

pub use engine::GameEngine;
pub use history::{MoveKind, MoveRecord};
