//! Error types for engine and table operations.

use thiserror::Error;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid table phase for dealing.
    #[error("invalid table phase for dealing")]
    InvalidState,
    /// The shoe could not supply all four initial cards.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid table phase for dealer play.
    #[error("invalid table phase for dealer play")]
    InvalidState,
    /// The dealer must hit but the shoe is empty.
    #[error("shoe ran out of cards during dealer play")]
    DeckExhausted,
}

/// Errors that can occur while betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid table phase for betting.
    #[error("invalid table phase for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the chip stack.
    #[error("insufficient chips")]
    InsufficientChips,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table phase for this action.
    #[error("invalid table phase for this action")]
    InvalidState,
    /// The hand is bust or already at 21.
    #[error("cannot hit this hand")]
    CannotHit,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Chip stack cannot cover the doubled bet.
    #[error("insufficient chips for this action")]
    InsufficientChips,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors that can occur while settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid table phase for settlement.
    #[error("invalid table phase for settlement")]
    InvalidState,
}
