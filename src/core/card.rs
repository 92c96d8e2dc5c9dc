//! Card values.
//!
//! A card is a plain integer from -2 to 12. Cards carry no identity: two
//! cards with the same value are interchangeable, so the deck is a multiset.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// A single card.
///
/// Construct with [`Card::new`] or parse from text with [`str::parse`];
/// both reject values outside -2..=12.
///
/// ```
/// use skyjo_engine::core::Card;
///
/// let card: Card = "11".parse().unwrap();
/// assert_eq!(card.value(), 11);
/// assert!("eleven".parse::<Card>().is_err());
/// assert!(Card::new(13).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct Card(i8);

impl Card {
    /// Lowest card value.
    pub const MIN: i8 = -2;
    /// Highest card value.
    pub const MAX: i8 = 12;

    /// Create a card, validating its value.
    pub fn new(value: i64) -> Result<Self, GameError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as i8))
        } else {
            Err(GameError::InvalidCard(value.to_string()))
        }
    }

    /// Create a card from a value already known to be in range.
    pub(crate) const fn from_raw(value: i8) -> Self {
        Self(value)
    }

    /// The card's face value.
    #[must_use]
    pub const fn value(self) -> i8 {
        self.0
    }

    /// Display bucket for front ends that colour revealed cards.
    #[must_use]
    pub const fn tier(self) -> CardTier {
        match self.0 {
            i8::MIN..=3 => CardTier::Low,
            4..=9 => CardTier::Mid,
            _ => CardTier::High,
        }
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| GameError::InvalidCard(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<i8> for Card {
    type Error = GameError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Card> for i8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse value bucket: low cards are good, high cards are bad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTier {
    /// -2 to 3.
    Low,
    /// 4 to 9.
    Mid,
    /// 10 to 12.
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_range() {
        assert!(Card::new(-3).is_err());
        assert!(Card::new(13).is_err());
        for v in -2..=12 {
            assert_eq!(Card::new(v).unwrap().value() as i64, v);
        }
    }

    #[test]
    fn test_card_parse() {
        assert_eq!(" -2 ".parse::<Card>().unwrap(), Card::from_raw(-2));
        assert_eq!(
            "abc".parse::<Card>(),
            Err(GameError::InvalidCard("abc".to_string()))
        );
        assert_eq!("99".parse::<Card>(), Err(GameError::InvalidCard("99".to_string())));
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn test_card_tier() {
        assert_eq!(Card::from_raw(-2).tier(), CardTier::Low);
        assert_eq!(Card::from_raw(3).tier(), CardTier::Low);
        assert_eq!(Card::from_raw(4).tier(), CardTier::Mid);
        assert_eq!(Card::from_raw(9).tier(), CardTier::Mid);
        assert_eq!(Card::from_raw(10).tier(), CardTier::High);
        assert_eq!(Card::from_raw(12).tier(), CardTier::High);
    }

    #[test]
    fn test_card_serde_rejects_out_of_range() {
        let card = Card::from_raw(7);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "7");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
        assert!(serde_json::from_str::<Card>("42").is_err());
    }
}
