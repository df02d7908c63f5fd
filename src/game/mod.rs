//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, DeckError, ResetError};
use crate::options::{ExhaustionPolicy, GameOptions};
use crate::participant::{Dealer, Participant, Player};
use crate::result::RoundResult;

mod actions;
mod dealer;
pub mod state;

pub use state::{GameState, PlayerAction};

/// Cards dealt to each participant at the start of a round.
const OPENING_CARDS: usize = 2;

/// A blackjack game between one player and the dealer.
///
/// The game owns the deck and both participants, and enforces the order of a
/// round: deal, player turn, dealer turn, resolution. Calls made in the wrong
/// state are rejected and leave the game untouched.
pub struct Game {
    /// Cards left to deal.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current round state.
    state: GameState,
    /// Set when a draw failed mid-round; the round can only be reset.
    stalled: bool,
    /// The human player.
    player: Player,
    /// The dealer.
    dealer: Dealer,
    /// Number of rounds dealt so far.
    round: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck and empty hands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new("Alice", GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(player_name: &str, options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::build();
        deck.shuffle(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Dealing,
            stalled: false,
            player: Player::new(player_name),
            dealer: Dealer::new(),
            round: 0,
            rng,
        }
    }

    /// Draws a card from the deck, applying the exhaustion policy if it is empty.
    fn draw(&mut self) -> Result<Card, DeckError> {
        let drawn = self.draw_or_replenish();
        if drawn.is_err() {
            log::warn!("deck exhausted in round {}, round stalled", self.round);
            self.stalled = true;
        }
        drawn
    }

    fn draw_or_replenish(&mut self) -> Result<Card, DeckError> {
        match self.deck.deal() {
            Ok(card) => Ok(card),
            Err(DeckError::OutOfCards) if self.options.exhaustion == ExhaustionPolicy::Replenish => {
                let held = self
                    .player
                    .hand()
                    .cards()
                    .iter()
                    .chain(self.dealer.hand().cards());
                let added = self.deck.replenish(held);
                self.deck.shuffle(&mut self.rng);
                log::warn!("deck exhausted in round {}, replenished {added} cards", self.round);
                self.deck.deal()
            }
            Err(err) => Err(err),
        }
    }

    /// Ends the round: reveals the dealer's hole card and records the result.
    fn resolve(&mut self) {
        self.dealer.reveal_hole();
        self.state = GameState::Resolved;

        let result = RoundResult::from_hands(self.player.hand(), self.dealer.hand());
        log::info!(
            "round {} resolved: {:?} ({:?}), player {} vs dealer {}",
            self.round,
            result.outcome,
            result.reason,
            result.player_total,
            result.dealer_total
        );
    }

    /// Returns whether a bust or a 21 has already decided the round.
    fn has_decisive_hand(&self) -> bool {
        self.player.is_bust()
            || self.player.is_blackjack()
            || self.dealer.is_bust()
            || self.dealer.is_blackjack()
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// The round resolves immediately if either opening hand totals 21.
    /// Otherwise the game moves to [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in [`GameState::Dealing`], or if the
    /// deck cannot supply four cards under [`ExhaustionPolicy::Fail`].
    pub fn deal_opening_hands(&mut self) -> Result<GameState, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.options.exhaustion == ExhaustionPolicy::Fail
            && self.deck.len() < OPENING_CARDS * 2
        {
            return Err(DealError::OutOfCards);
        }

        self.round += 1;

        for _ in 0..OPENING_CARDS {
            let card = self.draw()?;
            self.player.hand_mut().add_card(card);
            let card = self.draw()?;
            self.dealer.hand_mut().add_card(card);
        }

        log::debug!(
            "round {}: dealt player {} and dealer {}",
            self.round,
            self.player.total(),
            self.dealer.total()
        );

        if self.has_decisive_hand() {
            self.resolve();
        } else {
            self.state = GameState::PlayerTurn;
        }

        Ok(self.state)
    }

    /// Returns both hands to the deck, reshuffles it and hides the dealer's hole card.
    ///
    /// A round that stalled on an empty deck under [`ExhaustionPolicy::Fail`]
    /// is abandoned this way without an outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress (not `Dealing` or `Resolved`)
    /// and has not stalled.
    pub fn reset_for_next_round(&mut self) -> Result<(), ResetError> {
        if !self.stalled && !matches!(self.state, GameState::Dealing | GameState::Resolved) {
            return Err(ResetError::InvalidState);
        }

        if self.stalled && self.state != GameState::Resolved {
            log::info!("round {} abandoned after running out of cards", self.round);
        }

        self.deck.return_cards(self.player.hand_mut().take_cards());
        self.deck.return_cards(self.dealer.hand_mut().take_cards());
        self.deck.shuffle(&mut self.rng);
        self.dealer.conceal_hole();
        self.state = GameState::Dealing;
        self.stalled = false;

        log::debug!("reset for next round, {} cards in deck", self.deck.len());

        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the dealer's face-up card, if dealt.
    #[must_use]
    pub fn visible_dealer_card(&self) -> Option<&Card> {
        self.dealer.visible_card()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the deck with `cards`, dealt in order.
    ///
    /// Intended for tests and replays; the caller is responsible for not
    /// duplicating cards already held in a hand.
    #[doc(hidden)]
    pub fn stack_deck(&mut self, cards: &[Card]) {
        self.deck = Deck::from_cards(cards);
    }

    /// Returns whether the round stalled on an empty deck and must be reset.
    #[must_use]
    pub const fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of rounds dealt so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }
}
