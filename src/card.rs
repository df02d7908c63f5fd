//! Card types.

use core::fmt;

/// Card suit.
///
/// Suits carry no ordering or point value; they only matter for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck generation order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Clubs, Self::Diamonds];

    const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck generation order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the base point value of the rank.
    ///
    /// Numeral ranks count their face value, Jack, Queen and King count 10, and
    /// an Ace counts 11. Demoting an Ace to 1 is a property of the whole hand,
    /// see [`crate::hand::hand_value`].
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Returns whether the rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jack => f.write_str("Jack"),
            Self::Queen => f.write_str("Queen"),
            Self::King => f.write_str("King"),
            Self::Ace => f.write_str("Ace"),
            numeral => write!(f, "{}", numeral.value()),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the base point value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
