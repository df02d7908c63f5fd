//! Game configuration options.

/// Total of a winning hand. Anything above it is bust.
pub const BLACKJACK_VALUE: u8 = 21;

/// Default total the dealer must reach before standing.
pub const DEALER_MIN_VALUE: u8 = 17;

/// Name used for the dealer.
pub const DEALER_NAME: &str = "Dealer";

/// What the engine does when it must draw from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExhaustionPolicy {
    /// Refill the deck with every card not held in a hand, reshuffle, and keep dealing.
    #[default]
    Replenish,
    /// Reject the draw with an `OutOfCards` error and leave the game unchanged.
    Fail,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjterm::{ExhaustionPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_hit_threshold(16)
///     .with_exhaustion(ExhaustionPolicy::Fail);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// The dealer keeps hitting while its total is below this value.
    pub dealer_hit_threshold: u8,
    /// Behavior when the deck runs out mid-round.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_hit_threshold: DEALER_MIN_VALUE,
            exhaustion: ExhaustionPolicy::Replenish,
        }
    }
}

impl GameOptions {
    /// Sets the dealer hit threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hit_threshold(18);
    /// assert_eq!(options.dealer_hit_threshold, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_hit_threshold(mut self, threshold: u8) -> Self {
        self.dealer_hit_threshold = threshold;
        self
    }

    /// Sets the deck exhaustion policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{ExhaustionPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Fail);
    /// assert_eq!(options.exhaustion, ExhaustionPolicy::Fail);
    /// ```
    #[must_use]
    pub const fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }
}
