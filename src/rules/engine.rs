//! The rules engine.
//!
//! `GameEngine` owns the deck, every player's hand, the legality table, and
//! the RNG. It is the only thing that moves cards, and each operation either
//! commits completely or returns an error with nothing changed: all checks
//! run before the first mutation.

use im::Vector;
use log::{debug, info, warn};

use super::history::{MoveKind, MoveRecord};
use crate::core::action::LegalityTable;
use crate::core::card::Card;
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::zones::deck::Deck;
use crate::zones::hand::{Coord, PlayerHand, GRID_COLS, GRID_ROWS};

/// Deck, hands, and the rules that move cards between them.
///
/// ## Example
///
/// ```
/// use skyjo_engine::core::{GameConfig, PlayerId};
/// use skyjo_engine::rules::GameEngine;
///
/// let mut engine = GameEngine::new(GameConfig::lettered(2).with_seed(42)).unwrap();
/// let a = PlayerId::new(0);
///
/// let drawn = engine.draw_from_deck(a).unwrap();
/// let displaced = engine.keep(a, 0, 0, drawn).unwrap();
///
/// assert_eq!(engine.peek_bin(), Some(displaced));
/// assert_eq!(engine.cards_remaining(), 150 - 24 - 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    names: PlayerMap<String>,
    hands: PlayerMap<PlayerHand>,
    deck: Deck,
    table: LegalityTable,
    rng: GameRng,
    current: PlayerId,
    turn: u32,
    history: Vector<MoveRecord>,
    /// A deck card handed out by `draw_from_deck` and not yet placed.
    drawn: Option<(PlayerId, Card)>,
}

impl GameEngine {
    /// Set up a round with the standard legality table.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_table(config, LegalityTable::standard())
    }

    /// Set up a round: shuffle, deal 12 cards to each player in roster
    /// order, and optionally flip the opening bin card.
    pub fn with_table(config: GameConfig, table: LegalityTable) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let hands = (0..config.player_count())
            .map(|_| deal_hand(&mut deck, &mut rng))
            .collect::<Result<PlayerMap<_>, _>>()?;

        if config.opening_bin {
            let card = deck.draw_random(&mut rng)?;
            deck.set_bin(card);
            debug!("Opening bin card: {}", card);
        }

        info!(
            "Dealt {} hands (seed {}), {} cards left in the pool",
            hands.player_count(),
            rng.seed(),
            deck.cards_remaining()
        );

        Ok(Self {
            names: config.players.into_iter().collect(),
            hands,
            deck,
            table,
            rng,
            current: PlayerId::new(0),
            turn: 1,
            history: Vector::new(),
            drawn: None,
        })
    }

    // === Legality ===

    /// Whether a command token is legal for a category (`"draw"` or `"play"`).
    ///
    /// Never fails; unknown tokens and categories are illegal.
    #[must_use]
    pub fn check_legality(&self, token: &str, category: &str) -> bool {
        self.table.check(token, category)
    }

    /// The table used to resolve command tokens.
    #[must_use]
    pub fn legality_table(&self) -> &LegalityTable {
        &self.table
    }

    // === End of round ===

    /// True once any player has every cell revealed.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.hands.values().any(PlayerHand::is_fully_revealed)
    }

    /// The first player in seat order with a fully revealed grid.
    #[must_use]
    pub fn finisher(&self) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.is_fully_revealed())
            .map(|(player, _)| player)
    }

    // === Moves ===

    /// Take a random card from the pool and hand it to the caller.
    ///
    /// The engine remembers the card as held by `player` until it is placed
    /// with [`keep`] or [`discard_and_reveal`]; only that card, by that
    /// player, is accepted there. Fails with `AlreadyDrawn` while a drawn
    /// card is still unplaced.
    ///
    /// [`keep`]: GameEngine::keep
    /// [`discard_and_reveal`]: GameEngine::discard_and_reveal
    pub fn draw_from_deck(&mut self, player: PlayerId) -> Result<Card, GameError> {
        self.hand(player)?;
        self.check_nothing_drawn()?;
        let card = self.deck.draw_random(&mut self.rng)?;
        self.drawn = Some((player, card));

        debug!("{} draws {} from the deck", player, card);
        if self.deck.cards_remaining() == 0 {
            warn!("The draw pool is exhausted; only bin draws remain");
        }

        self.record(player, MoveKind::DrawFromDeck { card });
        Ok(card)
    }

    /// Place a drawn card at a cell; the displaced card goes to the bin.
    ///
    /// Returns the displaced card.
    pub fn keep(&mut self, player: PlayerId, row: usize, col: usize, card: Card) -> Result<Card, GameError> {
        let at = Coord::new(row, col)?;
        self.hand(player)?;
        self.check_drawn(player, card)?;

        let displaced = self.hand_mut(player)?.replace(at, card);
        self.deck.set_bin(displaced);
        self.drawn = None;

        debug!("{} keeps {} at {}, {} goes to the bin", player, card, at, displaced);
        self.record(player, MoveKind::Keep { at, placed: card, displaced });
        Ok(displaced)
    }

    /// Put a drawn card on the bin, then reveal one of the player's cells.
    ///
    /// Returns the revealed card.
    pub fn discard_and_reveal(
        &mut self,
        player: PlayerId,
        row: usize,
        col: usize,
        card: Card,
    ) -> Result<Card, GameError> {
        let at = Coord::new(row, col)?;
        self.hand(player)?;
        self.check_drawn(player, card)?;

        self.discard(player, card)?;
        self.reveal(player, at.row(), at.col())
    }

    /// Put the drawn card on the bin without revealing anything yet.
    pub(crate) fn discard(&mut self, player: PlayerId, card: Card) -> Result<(), GameError> {
        self.hand(player)?;
        self.check_drawn(player, card)?;
        self.deck.set_bin(card);
        self.drawn = None;

        debug!("{} discards {}", player, card);
        self.record(player, MoveKind::Discard { card });
        Ok(())
    }

    /// Reveal one of the player's cells. Revealing a face-up cell changes
    /// nothing and records nothing.
    ///
    /// Returns the card at that cell.
    pub(crate) fn reveal(&mut self, player: PlayerId, row: usize, col: usize) -> Result<Card, GameError> {
        let at = Coord::new(row, col)?;
        let hand = self.hand_mut(player)?;
        if hand.is_revealed(at) {
            return Ok(hand.reveal(at));
        }
        let card = hand.reveal(at);

        debug!("{} reveals {} at {}", player, card, at);
        self.record(player, MoveKind::Reveal { at, card });
        Ok(card)
    }

    /// Take the bin card and place it at a cell; the displaced card becomes
    /// the new bin card.
    ///
    /// Fails with `EmptyBin` if nothing has been discarded yet. Returns the
    /// displaced card.
    pub fn draw_from_bin(&mut self, player: PlayerId, row: usize, col: usize) -> Result<Card, GameError> {
        let at = Coord::new(row, col)?;
        self.hand(player)?;
        self.check_nothing_drawn()?;

        let taken = self.deck.take_bin()?;
        let displaced = self.hand_mut(player)?.replace(at, taken);
        self.deck.set_bin(displaced);

        debug!("{} takes {} from the bin to {}, {} goes to the bin", player, taken, at, displaced);
        self.record(player, MoveKind::BinReplace { at, taken, displaced });
        Ok(displaced)
    }

    // === Turn order ===

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Pass the turn to the next seat, wrapping to seat 0 after the last.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.current = self.current.next(self.player_count());
        self.turn += 1;
        debug!("Turn {}: {} to play", self.turn, self.current);
        self.current
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    // === Queries ===

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// All seats in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// A player's name.
    pub fn player_name(&self, player: PlayerId) -> Result<&str, GameError> {
        self.names
            .get(player)
            .map(String::as_str)
            .ok_or(GameError::PlayerNotFound(player))
    }

    /// A player's hand.
    pub fn hand(&self, player: PlayerId) -> Result<&PlayerHand, GameError> {
        self.hands.get(player).ok_or(GameError::PlayerNotFound(player))
    }

    /// The shared deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The visible bin card.
    #[must_use]
    pub fn peek_bin(&self) -> Option<Card> {
        self.deck.peek_bin()
    }

    /// Cards left in the pool.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    /// Each player's sum of revealed cards.
    #[must_use]
    pub fn revealed_totals(&self) -> PlayerMap<i32> {
        self.hands.map(PlayerHand::revealed_total)
    }

    /// Every committed move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The seed the round was dealt with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The deck card drawn and not yet placed, with the player holding it.
    #[must_use]
    pub fn drawn_card(&self) -> Option<(PlayerId, Card)> {
        self.drawn
    }

    /// Every card in the pool, the discard pile, all grids, and the unplaced
    /// drawn card, sorted.
    ///
    /// Always equals [`Deck::standard_composition`].
    #[must_use]
    pub fn card_census(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .deck
            .pool()
            .iter()
            .chain(self.deck.discard_pile())
            .copied()
            .chain(self.hands.values().flat_map(|hand| hand.cards()))
            .chain(self.drawn.map(|(_, card)| card))
            .collect();
        cards.sort_unstable();
        cards
    }

    fn check_drawn(&self, player: PlayerId, card: Card) -> Result<(), GameError> {
        match self.drawn {
            Some((holder, drawn)) if holder == player => {
                if drawn == card {
                    Ok(())
                } else {
                    Err(GameError::NotTheDrawnCard { drawn, given: card })
                }
            }
            _ => Err(GameError::NothingDrawn(player)),
        }
    }

    fn check_nothing_drawn(&self) -> Result<(), GameError> {
        match self.drawn {
            Some((holder, _)) => Err(GameError::AlreadyDrawn(holder)),
            None => Ok(()),
        }
    }

    fn hand_mut(&mut self, player: PlayerId) -> Result<&mut PlayerHand, GameError> {
        self.hands.get_mut(player).ok_or(GameError::PlayerNotFound(player))
    }

    fn record(&mut self, player: PlayerId, kind: MoveKind) {
        self.history.push_back(MoveRecord::new(player, self.turn, kind));
    }
}

/// Deal a 3x4 grid from the pool, row by row.
fn deal_hand(deck: &mut Deck, rng: &mut GameRng) -> Result<PlayerHand, GameError> {
    let mut truth = [[Card::from_raw(0); GRID_COLS]; GRID_ROWS];
    for row in truth.iter_mut() {
        for slot in row.iter_mut() {
            *slot = deck.draw_random(rng)?;
        }
    }
    Ok(PlayerHand::new(truth))
}
