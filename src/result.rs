//! Round result types.

use crate::hand::Hand;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins.
    PlayerWins,
    /// The dealer wins.
    DealerWins,
    /// Nobody wins.
    Tie,
}

/// The rule that decided the round, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Both hands total 21.
    BothBlackjack,
    /// Only the player's hand totals 21.
    PlayerBlackjack,
    /// Only the dealer's hand totals 21.
    DealerBlackjack,
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// The player's total is higher.
    PlayerHigher,
    /// The dealer's total is higher.
    DealerHigher,
    /// Both totals are equal.
    EqualTotals,
}

impl Resolution {
    /// Decides a round from the two final hands.
    ///
    /// Rules are checked in order and the first match wins, so a player bust
    /// beats a dealer bust and any 21 beats any bust.
    #[must_use]
    pub fn resolve(player: &Hand, dealer: &Hand) -> Self {
        let player_blackjack = player.is_blackjack();
        let dealer_blackjack = dealer.is_blackjack();

        if player_blackjack && dealer_blackjack {
            Self::BothBlackjack
        } else if player_blackjack {
            Self::PlayerBlackjack
        } else if dealer_blackjack {
            Self::DealerBlackjack
        } else if player.is_bust() {
            Self::PlayerBust
        } else if dealer.is_bust() {
            Self::DealerBust
        } else {
            match player.total().cmp(&dealer.total()) {
                core::cmp::Ordering::Greater => Self::PlayerHigher,
                core::cmp::Ordering::Less => Self::DealerHigher,
                core::cmp::Ordering::Equal => Self::EqualTotals,
            }
        }
    }

    /// Returns the winner this rule declares.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::BothBlackjack | Self::EqualTotals => Outcome::Tie,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerHigher => Outcome::PlayerWins,
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerHigher => Outcome::DealerWins,
        }
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won.
    pub outcome: Outcome,
    /// Why.
    pub reason: Resolution,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}

impl RoundResult {
    /// Builds the result for the two final hands.
    #[must_use]
    pub fn from_hands(player: &Hand, dealer: &Hand) -> Self {
        let reason = Resolution::resolve(player, dealer);
        Self {
            outcome: reason.outcome(),
            reason,
            player_total: player.total(),
            dealer_total: dealer.total(),
        }
    }
}
