//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck is empty.
    #[error("no cards left in the deck")]
    OutOfCards,
}

/// Errors that can occur while dealing the opening hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    OutOfCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    OutOfCards,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer's turn.
    #[error("invalid game state for the dealer's turn")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    OutOfCards,
}

/// Errors that can occur when asking for the round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The round has not been resolved yet.
    #[error("round is not resolved")]
    InvalidState,
}

/// Errors that can occur when resetting for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// A round is in progress.
    #[error("cannot reset while a round is in progress")]
    InvalidState,
}

/// Errors that can end a session early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Dealing the opening hands failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn failed.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// The outcome was not available.
    #[error(transparent)]
    Outcome(#[from] OutcomeError),
    /// Resetting for the next round failed.
    #[error(transparent)]
    Reset(#[from] ResetError),
}

impl From<DeckError> for DealError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::OutOfCards => Self::OutOfCards,
        }
    }
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::OutOfCards => Self::OutOfCards,
        }
    }
}

impl From<DeckError> for DealerError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::OutOfCards => Self::OutOfCards,
        }
    }
}
