//! Hand representation and valuation.

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::BLACKJACK_VALUE;

/// Value lost by counting an Ace as 1 instead of 11.
const ACE_DEMOTION: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK_VALUE && aces > 0 {
        value -= ACE_DEMOTION;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK_VALUE;
    (value, is_soft)
}

/// Calculates the blackjack total of a set of cards.
///
/// Every Ace starts at 11. While the total is over 21, Aces are demoted to 1
/// one at a time until the total fits or no Ace is left to demote. The result
/// does not depend on card order.
///
/// ```
/// use bjterm::{Card, Rank, Suit, hand::hand_value};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(hand_value(&cards), 12);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// An ordered set of cards held by one participant.
///
/// The total is recomputed from the cards on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes every card from the hand and returns them in the order they were received.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Removes and returns the cards from position `at` onwards.
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<Card> {
        self.cards.split_off(at.min(self.cards.len()))
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK_VALUE
    }

    /// Returns whether the hand totals exactly 21, regardless of how many cards it took.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.total() == BLACKJACK_VALUE
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
