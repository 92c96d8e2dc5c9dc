//! The shared draw pool and discard pile.
//!
//! The pool is an unordered multiset; draws pick a uniformly random card.
//! The discard pile is a stack whose top card is the visible "bin". Covering
//! the bin buries the previous card: it stays in the pile, out of play, so the
//! 150-card total is conserved.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::config::DECK_SIZE;
use crate::core::error::GameError;
use crate::core::rng::GameRng;

/// Copies of each value in the standard deck.
const COMPOSITION: [(i8, usize); 15] = [
    (-2, 5),
    (-1, 10),
    (0, 15),
    (1, 10),
    (2, 10),
    (3, 10),
    (4, 10),
    (5, 10),
    (6, 10),
    (7, 10),
    (8, 10),
    (9, 10),
    (10, 10),
    (11, 10),
    (12, 10),
];

/// Draw pool plus discard pile.
///
/// ## Usage
///
/// ```
/// use skyjo_engine::core::GameRng;
/// use skyjo_engine::zones::Deck;
///
/// let mut rng = GameRng::new(1);
/// let mut deck = Deck::new();
/// deck.shuffle(&mut rng);
///
/// let card = deck.draw_random(&mut rng).unwrap();
/// assert_eq!(deck.cards_remaining(), 149);
///
/// assert_eq!(deck.peek_bin(), None);
/// deck.set_bin(card);
/// assert_eq!(deck.peek_bin(), Some(card));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    pool: Vec<Card>,
    /// Top of the pile (last element) is the bin.
    discard: Vec<Card>,
}

impl Deck {
    /// Create the standard 150-card deck with an empty bin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: Self::standard_composition(),
            discard: Vec::new(),
        }
    }

    /// The fixed deck multiset, sorted ascending.
    #[must_use]
    pub fn standard_composition() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for (value, copies) in COMPOSITION {
            cards.extend(std::iter::repeat(Card::from_raw(value)).take(copies));
        }
        cards
    }

    /// Randomize the pool order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.pool);
    }

    /// Remove and return a uniformly random card from the pool.
    pub fn draw_random(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.pool.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let index = rng.gen_index(self.pool.len());
        Ok(self.pool.swap_remove(index))
    }

    /// Number of cards left in the pool.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.pool.len()
    }

    /// The visible bin card, or `None` if nothing has been discarded.
    #[must_use]
    pub fn peek_bin(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Place a card face-up on the bin, covering the previous one.
    pub fn set_bin(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Remove and return the visible bin card.
    ///
    /// The card it covered, if any, becomes the bin again.
    pub fn take_bin(&mut self) -> Result<Card, GameError> {
        self.discard.pop().ok_or(GameError::EmptyBin)
    }

    /// The pool's current contents, in pool order.
    #[must_use]
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// The whole discard pile, bottom first; the last card is the bin.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(cards: &[Card], value: i8) -> usize {
        cards.iter().filter(|c| c.value() == value).count()
    }

    #[test]
    fn test_composition() {
        let cards = Deck::standard_composition();
        assert_eq!(cards.len(), 150);
        assert_eq!(count(&cards, -2), 5);
        assert_eq!(count(&cards, -1), 10);
        assert_eq!(count(&cards, 0), 15);
        for v in 1..=12 {
            assert_eq!(count(&cards, v), 10);
        }
        assert!(cards.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        assert_ne!(deck.pool(), Deck::standard_composition().as_slice());
        let mut sorted = deck.pool().to_vec();
        sorted.sort();
        assert_eq!(sorted, Deck::standard_composition());
    }

    #[test]
    fn test_draw_until_empty() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        let mut drawn = Vec::new();

        while deck.cards_remaining() > 0 {
            drawn.push(deck.draw_random(&mut rng).unwrap());
        }

        assert_eq!(deck.draw_random(&mut rng), Err(GameError::EmptyDeck));
        drawn.sort();
        assert_eq!(drawn, Deck::standard_composition());
    }

    #[test]
    fn test_bin_stack() {
        let mut deck = Deck::new();
        assert_eq!(deck.peek_bin(), None);
        assert_eq!(deck.take_bin(), Err(GameError::EmptyBin));

        deck.set_bin(Card::from_raw(4));
        deck.set_bin(Card::from_raw(-1));
        assert_eq!(deck.peek_bin(), Some(Card::from_raw(-1)));
        assert_eq!(deck.discard_pile().len(), 2);

        assert_eq!(deck.take_bin(), Ok(Card::from_raw(-1)));
        assert_eq!(deck.peek_bin(), Some(Card::from_raw(4)));
    }

    #[test]
    fn test_same_seed_same_draws() {
        let draw_five = |seed| {
            let mut rng = GameRng::new(seed);
            let mut deck = Deck::new();
            deck.shuffle(&mut rng);
            (0..5).map(|_| deck.draw_random(&mut rng).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(draw_five(9), draw_five(9));
    }
}
