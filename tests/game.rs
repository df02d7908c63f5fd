//! Round engine integration tests.

use std::collections::HashSet;

use bjterm::{
    ActionError, Card, DECK_SIZE, DealError, DealerError, ExhaustionPolicy, Game,
    GameOptions, GameState, Hand, Outcome, OutcomeError, Participant, PlayerAction, Rank,
    ResetError, Resolution, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Stacks the deck so cards come out in `draws` order.
///
/// The opening deal goes player, dealer, player, dealer.
fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    game.stack_deck(draws);
}

fn stacked_game(draws: &[Card]) -> Game {
    let mut game = Game::new("Alice", GameOptions::default(), 1);
    set_deck_from_draws(&mut game, draws);
    game
}

fn all_cards_in_play(game: &Game) -> Vec<Card> {
    game.deck()
        .cards()
        .chain(game.player().hand().cards())
        .chain(game.dealer().hand().cards())
        .copied()
        .collect()
}

#[test]
fn new_game_has_full_deck_and_empty_hands() {
    let game = Game::new("Alice", GameOptions::default(), 42);

    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert_eq!(game.player().name(), "Alice");
    assert_eq!(game.dealer().name(), "Dealer");
    assert_eq!(game.round(), 0);
    assert!(game.visible_dealer_card().is_none());
}

#[test]
fn same_seed_shuffles_the_same_way() {
    let first = Game::new("Alice", GameOptions::default(), 7);
    let second = Game::new("Bob", GameOptions::default(), 7);
    let third = Game::new("Alice", GameOptions::default(), 8);

    assert_eq!(first.deck(), second.deck());
    assert_ne!(first.deck(), third.deck());
}

#[test]
fn basic_round_flow() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Eight),   // player
        card(Suit::Clubs, Rank::Six),      // dealer up
        card(Suit::Diamonds, Rank::Seven), // player
        card(Suit::Spades, Rank::Ten),     // dealer hole
        card(Suit::Hearts, Rank::Four),    // player hit
        card(Suit::Clubs, Rank::Five),     // dealer draw
    ]);

    assert_eq!(game.deal_opening_hands().unwrap(), GameState::PlayerTurn);
    assert_eq!(game.round(), 1);
    assert_eq!(game.player().total(), 15);
    assert_eq!(game.dealer().total(), 16);

    let hit_card = game.player_hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Four);
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.player_stay().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.run_dealer_turn().unwrap();
    assert_eq!(drawn, vec![card(Suit::Clubs, Rank::Five)]);
    assert_eq!(game.state(), GameState::Resolved);

    let result = game.result().unwrap();
    assert_eq!(result.player_total, 19);
    assert_eq!(result.dealer_total, 21);
    assert_eq!(result.reason, Resolution::DealerBlackjack);
    assert_eq!(game.outcome().unwrap(), Outcome::DealerWins);
}

#[test]
fn both_blackjack_on_deal_is_a_tie() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::King),
        card(Suit::Spades, Rank::Queen),
    ]);

    assert_eq!(game.deal_opening_hands().unwrap(), GameState::Resolved);
    assert!(game.dealer().is_hole_revealed());

    let result = game.result().unwrap();
    assert_eq!(result.reason, Resolution::BothBlackjack);
    assert_eq!(result.outcome, Outcome::Tie);
}

#[test]
fn player_natural_wins_immediately() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::King),
        card(Suit::Spades, Rank::Seven),
    ]);

    assert_eq!(game.deal_opening_hands().unwrap(), GameState::Resolved);
    assert_eq!(game.result().unwrap().reason, Resolution::PlayerBlackjack);
    assert_eq!(game.outcome().unwrap(), Outcome::PlayerWins);
}

#[test]
fn player_reaching_21_by_hitting_skips_dealer_turn() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::King),
    ]);

    game.deal_opening_hands().unwrap();
    game.player_hit().unwrap();

    assert_eq!(game.state(), GameState::Resolved);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.result().unwrap().reason, Resolution::PlayerBlackjack);
    assert_eq!(game.outcome().unwrap(), Outcome::PlayerWins);
}

#[test]
fn dealer_natural_wins_immediately() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::King),
    ]);

    assert_eq!(game.deal_opening_hands().unwrap(), GameState::Resolved);
    assert_eq!(game.result().unwrap().reason, Resolution::DealerBlackjack);
    assert_eq!(game.outcome().unwrap(), Outcome::DealerWins);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::King),
        card(Suit::Clubs, Rank::Two),
    ]);

    game.deal_opening_hands().unwrap();
    assert_eq!(game.apply_player_action(PlayerAction::Hit).unwrap(), GameState::Resolved);

    assert!(game.player().is_bust());
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.result().unwrap().reason, Resolution::PlayerBust);
    assert_eq!(game.outcome().unwrap(), Outcome::DealerWins);
}

#[test]
fn dealer_bust_loses() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Nine),
    ]);

    game.deal_opening_hands().unwrap();
    assert_eq!(game.apply_player_action(PlayerAction::Stay).unwrap(), GameState::DealerTurn);

    let drawn = game.run_dealer_turn().unwrap();
    assert_eq!(drawn.len(), 1);
    assert!(game.dealer().is_bust());
    assert_eq!(game.result().unwrap().reason, Resolution::DealerBust);
    assert_eq!(game.outcome().unwrap(), Outcome::PlayerWins);
}

#[test]
fn higher_total_wins_and_equal_totals_tie() {
    let cases = [
        (Rank::Nine, Rank::Seven, Resolution::PlayerHigher, Outcome::PlayerWins),
        (Rank::Seven, Rank::Nine, Resolution::DealerHigher, Outcome::DealerWins),
        (Rank::Eight, Rank::Eight, Resolution::EqualTotals, Outcome::Tie),
    ];

    for (player_second, dealer_second, reason, outcome) in cases {
        let mut game = stacked_game(&[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, player_second),
            card(Suit::Spades, dealer_second),
        ]);

        game.deal_opening_hands().unwrap();
        game.player_stay().unwrap();
        assert!(game.run_dealer_turn().unwrap().is_empty());

        let result = game.result().unwrap();
        assert_eq!(result.reason, reason);
        assert_eq!(result.outcome, outcome);
    }
}

#[test]
fn resolution_priority_order() {
    let hand = |ranks: &[Rank]| -> Hand {
        ranks
            .iter()
            .map(|&rank| card(Suit::Clubs, rank))
            .collect()
    };

    let twenty_one = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    let bust = hand(&[Rank::King, Rank::Queen, Rank::Five]);
    let twenty = hand(&[Rank::King, Rank::Queen]);

    assert_eq!(
        Resolution::resolve(&twenty_one, &twenty_one),
        Resolution::BothBlackjack
    );
    assert_eq!(
        Resolution::resolve(&twenty_one, &bust),
        Resolution::PlayerBlackjack
    );
    assert_eq!(
        Resolution::resolve(&bust, &twenty_one),
        Resolution::DealerBlackjack
    );
    // A player bust is checked before a dealer bust.
    assert_eq!(Resolution::resolve(&bust, &bust), Resolution::PlayerBust);
    assert_eq!(Resolution::resolve(&twenty, &bust), Resolution::DealerBust);
    assert_eq!(Resolution::resolve(&twenty, &twenty), Resolution::EqualTotals);

    assert_eq!(Resolution::BothBlackjack.outcome(), Outcome::Tie);
    assert_eq!(Resolution::PlayerBust.outcome(), Outcome::DealerWins);
    assert_eq!(Resolution::DealerBust.outcome(), Outcome::PlayerWins);
}

#[test]
fn dealer_threshold_is_configurable() {
    let options = GameOptions::default().with_dealer_hit_threshold(18);
    let mut game = Game::new("Alice", options, 3);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Clubs, Rank::Two),
        ],
    );

    game.deal_opening_hands().unwrap();
    game.player_stay().unwrap();

    let drawn = game.run_dealer_turn().unwrap();
    assert_eq!(drawn, vec![card(Suit::Clubs, Rank::Two)]);
    assert_eq!(game.dealer().total(), 19);
    assert_eq!(game.outcome().unwrap(), Outcome::Tie);
}

#[test]
fn dealer_hole_card_hidden_until_player_stays() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Clubs, Rank::Nine),
    ]);

    game.deal_opening_hands().unwrap();
    assert_eq!(
        game.visible_dealer_card(),
        Some(&card(Suit::Spades, Rank::Queen))
    );
    assert!(!game.dealer().is_hole_revealed());
    assert_eq!(
        game.dealer().display().to_string(),
        "Dealer's hand: ??\n> Queen of Spades\n> ??"
    );

    game.player_stay().unwrap();
    assert!(game.dealer().is_hole_revealed());
    assert_eq!(
        game.dealer().display().to_string(),
        "Dealer's hand: 19\n> Queen of Spades\n> 9 of Clubs"
    );
}

#[test]
fn actions_rejected_in_wrong_state_leave_game_unchanged() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Two),
    ]);

    assert_eq!(game.player_hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.player_stay().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.run_dealer_turn().unwrap_err(), DealerError::InvalidState);
    assert_eq!(game.outcome().unwrap_err(), OutcomeError::InvalidState);
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), 5);

    game.deal_opening_hands().unwrap();
    assert_eq!(game.deal_opening_hands().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.run_dealer_turn().unwrap_err(), DealerError::InvalidState);
    assert_eq!(game.reset_for_next_round().unwrap_err(), ResetError::InvalidState);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player().hand().len(), 2);

    game.player_stay().unwrap();
    assert_eq!(game.player_hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.reset_for_next_round().unwrap_err(), ResetError::InvalidState);

    game.run_dealer_turn().unwrap();
    assert_eq!(
        game.apply_player_action(PlayerAction::Hit).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(game.player_stay().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.run_dealer_turn().unwrap_err(), DealerError::InvalidState);
    assert_eq!(game.state(), GameState::Resolved);
    assert_eq!(game.player().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn exhausted_deck_is_replenished_without_duplicates() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Seven),
    ]);

    game.deal_opening_hands().unwrap();
    assert_eq!(game.cards_remaining(), 0);

    let drawn = game.player_hit().unwrap();
    assert_eq!(game.player().hand().len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 5);
    assert!(!game.deck().contains(&drawn));

    let cards = all_cards_in_play(&game);
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn exhausted_deck_fails_when_configured() {
    let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Fail);
    let mut game = Game::new("Alice", options, 5);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Two),
        ],
    );

    assert_eq!(game.deal_opening_hands().unwrap_err(), DealError::OutOfCards);
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.round(), 0);
    assert!(game.player().hand().is_empty());
    assert_eq!(game.cards_remaining(), 3);

    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Five),
        ],
    );
    game.deal_opening_hands().unwrap();

    assert_eq!(game.player_hit().unwrap_err(), ActionError::OutOfCards);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player().hand().len(), 2);

    game.player_stay().unwrap();
    assert_eq!(game.run_dealer_turn().unwrap_err(), DealerError::OutOfCards);
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn dealer_turn_replenishes_without_duplicates() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Two),
    ]);

    game.deal_opening_hands().unwrap();
    game.player_stay().unwrap();
    assert_eq!(game.cards_remaining(), 0);

    let drawn = game.run_dealer_turn().unwrap();
    assert!(!drawn.is_empty());
    assert_eq!(game.state(), GameState::Resolved);
    assert_eq!(game.dealer().hand().len(), 2 + drawn.len());
    for card in &drawn {
        assert!(!game.deck().contains(card));
    }

    let cards = all_cards_in_play(&game);
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn stalled_dealer_turn_can_be_abandoned() {
    let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Fail);
    let mut game = Game::new("Alice", options, 5);
    let stacked = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Five),
    ];
    game.stack_deck(&stacked);

    game.deal_opening_hands().unwrap();
    game.player_stay().unwrap();
    assert!(!game.is_stalled());

    assert_eq!(game.run_dealer_turn().unwrap_err(), DealerError::OutOfCards);
    assert_eq!(game.run_dealer_turn().unwrap_err(), DealerError::OutOfCards);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.outcome().unwrap_err(), OutcomeError::InvalidState);
    assert!(game.is_stalled());

    game.reset_for_next_round().unwrap();
    assert_eq!(game.state(), GameState::Dealing);
    assert!(!game.is_stalled());
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert!(!game.dealer().is_hole_revealed());
    assert_eq!(game.cards_remaining(), stacked.len());

    let in_deck: HashSet<Card> = game.deck().cards().copied().collect();
    let expected: HashSet<Card> = stacked.iter().copied().collect();
    assert_eq!(in_deck, expected);

    game.deal_opening_hands().unwrap();
    assert_eq!(game.round(), 2);
}

#[test]
fn stalled_player_turn_can_be_abandoned() {
    let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Fail);
    let mut game = Game::new("Alice", options, 5);
    game.stack_deck(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Five),
    ]);

    game.deal_opening_hands().unwrap();
    assert_eq!(
        game.reset_for_next_round().unwrap_err(),
        ResetError::InvalidState
    );

    assert_eq!(game.player_hit().unwrap_err(), ActionError::OutOfCards);
    assert!(game.is_stalled());
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.reset_for_next_round().unwrap();
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), 4);
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
}

#[test]
fn failed_dealer_turn_returns_drawn_cards() {
    let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Fail);
    let mut game = Game::new("Alice", options, 5);
    let last = card(Suit::Diamonds, Rank::Two);
    game.stack_deck(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Two),
        last,
    ]);

    game.deal_opening_hands().unwrap();
    assert_eq!(game.dealer().total(), 4);
    game.player_stay().unwrap();

    assert_eq!(game.run_dealer_turn().unwrap_err(), DealerError::OutOfCards);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.dealer().total(), 4);
    assert_eq!(game.cards_remaining(), 1);
    assert!(game.deck().contains(&last));
}

#[test]
fn reset_returns_all_cards_and_reshuffles() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Clubs, Rank::Two),
    ]);

    game.deal_opening_hands().unwrap();
    game.player_stay().unwrap();
    game.run_dealer_turn().unwrap();

    game.reset_for_next_round().unwrap();
    assert_eq!(game.state(), GameState::Dealing);
    assert_eq!(game.cards_remaining(), 5);
    assert!(game.player().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert!(!game.dealer().is_hole_revealed());
}

#[test]
fn many_rounds_keep_a_full_unique_deck() {
    let mut game = Game::new("Alice", GameOptions::default(), 2024);

    for round in 1..=30 {
        game.deal_opening_hands().unwrap();
        assert_eq!(game.round(), round);

        // Hit on anything below 15, like a cautious player would.
        while game.state() == GameState::PlayerTurn && game.player().total() < 15 {
            game.player_hit().unwrap();
        }
        if game.state() == GameState::PlayerTurn {
            game.player_stay().unwrap();
        }
        if game.state() == GameState::DealerTurn {
            game.run_dealer_turn().unwrap();
        }

        assert_eq!(game.state(), GameState::Resolved);
        assert!(game.outcome().is_ok());

        let in_play: HashSet<Card> = all_cards_in_play(&game).into_iter().collect();
        assert_eq!(in_play.len(), DECK_SIZE);

        game.reset_for_next_round().unwrap();
        assert_eq!(game.cards_remaining(), DECK_SIZE);
    }
}
