use crate::card::Card;
use crate::error::ActionError;
use crate::participant::Participant;

use super::{Game, GameState, PlayerAction};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust or a total of exactly 21 ends the round at once, skipping the
    /// dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck is
    /// empty under [`crate::ExhaustionPolicy::Fail`].
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.hand_mut().add_card(card);
        log::debug!("player hits {card}, total {}", self.player.total());

        if self.player.is_bust() || self.player.is_blackjack() {
            self.resolve();
        }

        Ok(card)
    }

    /// Player action: Stay (end the turn and hand over to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn player_stay(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.dealer.reveal_hole();
        self.state = GameState::DealerTurn;
        log::debug!("player stays on {}", self.player.total());

        Ok(())
    }

    /// Applies a player decision and returns the resulting state.
    ///
    /// # Errors
    ///
    /// See [`Game::player_hit`] and [`Game::player_stay`].
    pub fn apply_player_action(&mut self, action: PlayerAction) -> Result<GameState, ActionError> {
        match action {
            PlayerAction::Hit => {
                self.player_hit()?;
            }
            PlayerAction::Stay => self.player_stay()?,
        }
        Ok(self.state)
    }
}
