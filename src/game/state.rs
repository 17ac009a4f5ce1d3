//! Table phase type.

/// Phase of the current round.
///
/// A round moves `Betting → Dealing → PlayerTurn → DealerTurn → Finished`
/// and back to `Betting` once settled. Naturals and player busts skip
/// straight to `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Waiting for the player to confirm a bet.
    #[default]
    Betting,
    /// Bet locked in; initial cards not yet dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is over and can be settled.
    Finished,
}
