//! Session loop: plays rounds back to back through pluggable input and output.
//!
//! The engine never touches a terminal. A front end implements [`Prompt`] to
//! supply decisions and [`Render`] to show the table, and [`Session`] drives
//! the rounds.

use crate::error::SessionError;
use crate::game::{Game, GameState, PlayerAction};
use crate::result::{Outcome, RoundResult};

/// Source of player decisions.
pub trait Prompt {
    /// Asks the player to hit or stay. `None` means the input is closed and the
    /// session should stop.
    fn action(&mut self, game: &Game) -> Option<PlayerAction>;

    /// Asks whether to play another round.
    fn play_again(&mut self, game: &Game) -> bool;
}

/// Sink for table views and results.
pub trait Render {
    /// Shows the table. The dealer's hand is concealed while its hole card is hidden.
    fn show(&mut self, game: &Game);

    /// Announces the result of a resolved round.
    fn announce(&mut self, game: &Game, result: &RoundResult);
}

/// Tally of the rounds played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to completion.
    pub rounds: u32,
    /// Rounds the player won.
    pub player_wins: u32,
    /// Rounds the dealer won.
    pub dealer_wins: u32,
    /// Tied rounds.
    pub ties: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::DealerWins => self.dealer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// Drives rounds of a [`Game`] with a prompt and a renderer.
pub struct Session<P, R> {
    prompt: P,
    render: R,
}

impl<P: Prompt, R: Render> Session<P, R> {
    /// Creates a session.
    pub const fn new(prompt: P, render: R) -> Self {
        Self { prompt, render }
    }

    /// Plays one round from the opening deal to the announced result.
    ///
    /// Returns `Ok(None)` if the prompt closed before the round finished; the
    /// game is left where it stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is mid-round in a state the loop cannot
    /// continue from, or the deck runs out under
    /// [`crate::ExhaustionPolicy::Fail`].
    pub fn play_round(&mut self, game: &mut Game) -> Result<Option<RoundResult>, SessionError> {
        if game.state() == GameState::Dealing {
            game.deal_opening_hands()?;
        }
        self.render.show(game);

        while game.state() == GameState::PlayerTurn {
            let Some(action) = self.prompt.action(game) else {
                return Ok(None);
            };
            game.apply_player_action(action)?;
            self.render.show(game);
        }

        if game.state() == GameState::DealerTurn {
            game.run_dealer_turn()?;
            self.render.show(game);
        }

        let result = game.result()?;
        self.render.announce(game, &result);
        Ok(Some(result))
    }

    /// Plays rounds until the player declines another or the prompt closes.
    ///
    /// Cards go back into the deck and it is reshuffled between rounds.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Session::play_round`] or the reset between rounds.
    pub fn run(&mut self, game: &mut Game) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary::default();

        loop {
            let Some(result) = self.play_round(game)? else {
                break;
            };
            summary.record(result.outcome);

            if !self.prompt.play_again(game) {
                break;
            }
            game.reset_for_next_round()?;
        }

        Ok(summary)
    }

    /// Consumes the session and returns the prompt and renderer.
    pub fn into_parts(self) -> (P, R) {
        (self.prompt, self.render)
    }
}
