//! Game state types.

/// Round state.
///
/// A round moves `Dealing -> PlayerTurn -> DealerTurn -> Resolved`. A bust or a
/// 21 skips straight to `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Hands are empty and the opening cards have not been dealt.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// The round is over and the outcome is available.
    Resolved,
}

/// A decision the player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// End the turn without drawing.
    Stay,
}
