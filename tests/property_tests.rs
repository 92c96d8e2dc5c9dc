//! Property-based tests over random action sequences.
//!
//! Whatever a front end throws at the controller, cards are conserved, the
//! round-over flag matches the revealed counts, and turns rotate in order.

use proptest::prelude::*;
use skyjo_engine::{Card, Coord, Deck, GameConfig, GameEngine, PlayerHand, PlayerId, TurnController};

#[derive(Clone, Debug)]
enum Step {
    DrawDeck,
    DrawBin,
    Keep,
    Discard,
    Select { player: u8, row: usize, col: usize },
    Token(&'static str),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::DrawDeck),
        2 => Just(Step::DrawBin),
        2 => Just(Step::Keep),
        2 => Just(Step::Discard),
        // Mostly valid cells and seats, with some out of range.
        6 => (0u8..5, 0usize..4, 0usize..5).prop_map(|(player, row, col)| Step::Select { player, row, col }),
        1 => prop::sample::select(vec!["dd", "db", "rc", "dc", "zz", ""]).prop_map(Step::Token),
    ]
}

fn apply(turns: &mut TurnController, step: &Step) -> bool {
    match *step {
        Step::DrawDeck => turns.draw_from_deck(),
        Step::DrawBin => turns.draw_from_bin(),
        Step::Keep => turns.keep(),
        Step::Discard => turns.discard(),
        Step::Select { player, row, col } => turns.select_cell(PlayerId::new(player), row, col),
        Step::Token(token) => turns.dispatch(token),
    }
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (-2i64..=12).prop_map(|v| Card::new(v).unwrap())
}

fn hand_strategy() -> impl Strategy<Value = PlayerHand> {
    prop::collection::vec(card_strategy(), 12).prop_map(|cards| {
        PlayerHand::new(std::array::from_fn(|row| std::array::from_fn(|col| cards[row * 4 + col])))
    })
}

proptest! {
    #[test]
    fn prop_cards_are_conserved(
        seed in any::<u64>(),
        players in 1usize..=4,
        opening_bin in any::<bool>(),
        steps in prop::collection::vec(step_strategy(), 0..200),
    ) {
        let mut config = GameConfig::lettered(players).with_seed(seed);
        config.opening_bin = opening_bin;
        let mut turns = TurnController::new(GameEngine::new(config).unwrap());
        let full_deck = Deck::standard_composition();

        prop_assert_eq!(turns.card_census(), full_deck.clone());
        for step in &steps {
            apply(&mut turns, step);
            prop_assert_eq!(turns.card_census(), full_deck.clone());
        }
    }

    #[test]
    fn prop_round_over_iff_full_grid(
        seed in any::<u64>(),
        players in 1usize..=3,
        steps in prop::collection::vec(step_strategy(), 0..300),
    ) {
        let mut turns = TurnController::new(
            GameEngine::new(GameConfig::lettered(players).with_seed(seed)).unwrap(),
        );

        for step in &steps {
            apply(&mut turns, step);
            let snapshot = turns.snapshot();
            let any_full = snapshot.players.iter().any(|p| p.revealed_count == 12);
            prop_assert_eq!(snapshot.round_over, any_full);
            prop_assert!(snapshot.players.iter().all(|p| p.revealed_count <= 12));
        }
    }

    #[test]
    fn prop_turns_rotate_in_seat_order(
        seed in any::<u64>(),
        players in 1usize..=5,
        steps in prop::collection::vec(step_strategy(), 0..200),
    ) {
        let mut turns = TurnController::new(
            GameEngine::new(GameConfig::lettered(players).with_seed(seed)).unwrap(),
        );

        for step in &steps {
            let before = turns.current_player();
            let turn_before = turns.engine().turn_number();
            apply(&mut turns, step);

            if turns.engine().turn_number() == turn_before {
                prop_assert_eq!(turns.current_player(), before);
            } else {
                prop_assert_eq!(turns.engine().turn_number(), turn_before + 1);
                prop_assert_eq!(turns.current_player(), before.next(players));
            }
        }
    }

    #[test]
    fn prop_reveal_is_idempotent(hand in hand_strategy(), row in 0usize..3, col in 0usize..4) {
        let at = Coord::new(row, col).unwrap();
        let mut once = hand.clone();
        let first = once.reveal(at);

        let mut twice = once.clone();
        let second = twice.reveal(at);

        prop_assert_eq!(first, second);
        prop_assert_eq!(once.view(), twice.view());
        prop_assert_eq!(once.revealed(), twice.revealed());
        prop_assert_eq!(once.revealed_total(), twice.revealed_total());
    }

    #[test]
    fn prop_replace_returns_old_and_reveals(
        hand in hand_strategy(),
        card in card_strategy(),
        row in 0usize..3,
        col in 0usize..4,
    ) {
        let at = Coord::new(row, col).unwrap();
        let old = hand.cards().nth(row * 4 + col).unwrap();
        let mut hand = hand;

        prop_assert_eq!(hand.replace(at, card), old);
        prop_assert!(hand.is_revealed(at));
        prop_assert_eq!(hand.view()[row][col].card(), Some(card));
    }
}
