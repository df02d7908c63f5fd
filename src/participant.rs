//! Player and dealer.

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::DEALER_NAME;

/// Anyone seated at the table: a name and a hand.
pub trait Participant {
    /// Returns the participant's name.
    fn name(&self) -> &str;

    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Returns the hand total.
    fn total(&self) -> u8 {
        self.hand().total()
    }

    /// Returns whether the hand is bust.
    fn is_bust(&self) -> bool {
        self.hand().is_bust()
    }

    /// Returns whether the hand totals 21.
    fn is_blackjack(&self) -> bool {
        self.hand().is_blackjack()
    }

    /// Returns a view that renders every card and the total.
    fn full_hand_display(&self) -> HandDisplay<'_> {
        HandDisplay {
            name: self.name(),
            hand: self.hand(),
            concealed: false,
        }
    }
}

/// The human player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The dealer. Only the first card is visible until the hole card is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
    hole_revealed: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand and the hole card hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn visible_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Hides the hole card again for a new round.
    pub(crate) const fn conceal_hole(&mut self) {
        self.hole_revealed = false;
    }

    /// Returns whether the dealer must draw another card.
    #[must_use]
    pub fn must_hit(&self, threshold: u8) -> bool {
        self.hand.total() < threshold
    }

    /// Returns a view of the hand that hides everything but the first card
    /// until the hole card is revealed.
    #[must_use]
    pub fn display(&self) -> HandDisplay<'_> {
        HandDisplay {
            name: DEALER_NAME,
            hand: &self.hand,
            concealed: !self.hole_revealed,
        }
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        DEALER_NAME
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// Renders a hand as a header line with the total and one line per card.
///
/// ```text
/// Alice's hand: 15
/// > 5 of Hearts
/// > Queen of Spades
/// ```
///
/// A concealed hand shows `??` for the total and every card after the first.
#[derive(Debug, Clone, Copy)]
pub struct HandDisplay<'a> {
    name: &'a str,
    hand: &'a Hand,
    concealed: bool,
}

impl fmt::Display for HandDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.concealed {
            write!(f, "{}'s hand: ??", self.name)?;
        } else {
            write!(f, "{}'s hand: {}", self.name, self.hand.total())?;
        }

        for (index, card) in self.hand.cards().iter().enumerate() {
            if self.concealed && index > 0 {
                f.write_str("\n> ??")?;
            } else {
                write!(f, "\n> {card}")?;
            }
        }
        Ok(())
    }
}
