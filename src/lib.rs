//! A terminal blackjack game built on a small, optionally `no_std` rule engine.
//!
//! The crate provides a [`Game`] type that runs one player against the dealer:
//! the opening deal, the player's hit/stay decisions, the dealer's forced
//! draws, and resolution. Terminal input and output live behind the
//! [`session::Prompt`] and [`session::Render`] traits.
//!
//! # Example
//!
//! ```
//! use bjterm::{Game, GameOptions, GameState, PlayerAction};
//!
//! let mut game = Game::new("Alice", GameOptions::default(), 42);
//! game.deal_opening_hands().unwrap();
//!
//! if game.state() == GameState::PlayerTurn {
//!     game.apply_player_action(PlayerAction::Stay).unwrap();
//!     game.run_dealer_turn().unwrap();
//! }
//!
//! assert_eq!(game.state(), GameState::Resolved);
//! let _outcome = game.outcome().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, DealError, DealerError, DeckError, OutcomeError, ResetError, SessionError,
};
pub use game::{Game, GameState, PlayerAction};
pub use hand::Hand;
pub use options::{BLACKJACK_VALUE, DEALER_MIN_VALUE, ExhaustionPolicy, GameOptions};
pub use participant::{Dealer, HandDisplay, Participant, Player};
pub use result::{Outcome, Resolution, RoundResult};
pub use session::{Prompt, Render, Session, SessionSummary};
