//! Round configuration.
//!
//! A `GameConfig` names the players (roster order is turn order), optionally
//! fixes the RNG seed, and chooses whether the bin starts with a face-up card.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::PlayerId;

/// Cards dealt to every player.
pub const HAND_SIZE: usize = 12;

/// Cards in the standard deck.
pub const DECK_SIZE: usize = 150;

/// Most players the deck can deal a full grid to.
pub const MAX_PLAYERS: usize = DECK_SIZE / HAND_SIZE;

/// Configuration for one round.
///
/// ```
/// use skyjo_engine::core::GameConfig;
///
/// let config = GameConfig::new(["Ana", "Ben"]).with_seed(7).with_opening_bin();
/// assert_eq!(config.player_count(), 2);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.opening_bin);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in turn order.
    pub players: Vec<String>,

    /// RNG seed. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,

    /// Flip one pool card into the bin before the first turn.
    pub opening_bin: bool,
}

impl GameConfig {
    /// Create a configuration for the given roster.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            seed: None,
            opening_bin: false,
        }
    }

    /// Create a configuration with `count` players named "A", "B", ...
    ///
    /// The default roster for front ends that do not ask for names.
    #[must_use]
    pub fn lettered(count: usize) -> Self {
        Self::new((0..count).map(|i| {
            let letter = (b'A' + (i % 26) as u8) as char;
            if i < 26 {
                letter.to_string()
            } else {
                format!("{letter}{}", i / 26)
            }
        }))
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start the round with a face-up card in the bin.
    #[must_use]
    pub fn with_opening_bin(mut self) -> Self {
        self.opening_bin = true;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the roster size against what the deck can deal.
    pub fn validate(&self) -> Result<(), GameError> {
        let count = self.player_count();
        if count == 0 || count > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount { count, max: MAX_PLAYERS });
        }
        Ok(())
    }

    /// Name of a seat, if it exists.
    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> Option<&str> {
        self.players.get(player.index()).map(String::as_str)
    }
}
