use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, OutcomeError};
use crate::participant::Participant;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while their total is below
    /// [`crate::GameOptions::dealer_hit_threshold`], stopping early on a bust
    /// or 21, and the round is resolved.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state, or the deck is
    /// empty under [`crate::ExhaustionPolicy::Fail`] while the dealer must draw.
    /// On failure the cards drawn this turn go back to the deck, the game stays
    /// in [`GameState::DealerTurn`], and the round can only be abandoned with
    /// [`Game::reset_for_next_round`].
    pub fn run_dealer_turn(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let threshold = self.options.dealer_hit_threshold;
        let dealt = self.dealer.hand().len();
        let mut drawn_cards = Vec::new();

        while !self.dealer.is_bust()
            && !self.dealer.is_blackjack()
            && self.dealer.must_hit(threshold)
        {
            let card = match self.draw() {
                Ok(card) => card,
                Err(err) => {
                    let drawn = self.dealer.hand_mut().split_off(dealt);
                    self.deck.return_cards(drawn);
                    return Err(err.into());
                }
            };
            self.dealer.hand_mut().add_card(card);
            drawn_cards.push(card);
            log::debug!("dealer hits {card}, total {}", self.dealer.total());
        }

        self.resolve();

        Ok(drawn_cards)
    }

    /// Returns the full result of the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved.
    pub fn result(&self) -> Result<RoundResult, OutcomeError> {
        if self.state != GameState::Resolved {
            return Err(OutcomeError::InvalidState);
        }

        Ok(RoundResult::from_hands(
            self.player.hand(),
            self.dealer.hand(),
        ))
    }

    /// Returns who won the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved.
    pub fn outcome(&self) -> Result<Outcome, OutcomeError> {
        self.result().map(|result| result.outcome)
    }
}
