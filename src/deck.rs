//! The deck of cards dealt from during play.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered pile of cards, dealt from the front.
///
/// A freshly built deck holds one card of every suit and rank. Cards leave the
/// deck through [`Deck::deal`] and come back through [`Deck::return_cards`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the full 52 card deck in generation order (suit-major).
    #[must_use]
    pub fn build() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, in order. The first card is dealt first.
    ///
    /// Useful to stack the deck for replays and tests. No uniqueness check is made.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.iter().copied().collect(),
        }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::OutOfCards`] if the deck is empty.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::OutOfCards)
    }

    /// Appends cards to the back of the deck without shuffling.
    pub fn return_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Refills the deck with every card that is neither in the deck nor in `held`.
    ///
    /// New cards are appended in generation order; shuffle afterwards.
    /// Returns the number of cards added.
    pub fn replenish<'a, I>(&mut self, held: I) -> usize
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let held: Vec<Card> = held.into_iter().copied().collect();
        let missing: Vec<Card> = Self::build()
            .cards
            .into_iter()
            .filter(|card| !held.contains(card) && !self.cards.contains(card))
            .collect();

        let added = missing.len();
        self.cards.extend(missing);
        added
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
