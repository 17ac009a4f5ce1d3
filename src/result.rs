//! Round outcome types.

use core::fmt;

use crate::hand::HandValue;

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Player's total beats the dealer's.
    PlayerWin,
    /// Dealer's total beats the player's.
    DealerWin,
    /// Tie, including both hands holding blackjack.
    Push,
    /// Player holds a natural and the dealer does not.
    PlayerBlackjack,
    /// Dealer holds a natural and the player does not.
    DealerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21 while the player stood.
    DealerBust,
}

impl GameOutcome {
    /// Returns whether the player comes out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(
            self,
            Self::PlayerWin | Self::PlayerBlackjack | Self::DealerBust
        )
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWin => "Player Wins!",
            Self::DealerWin => "Dealer Wins",
            Self::Push => "Push",
            Self::PlayerBlackjack => "Player Blackjack!",
            Self::DealerBlackjack => "Dealer Blackjack",
            Self::PlayerBust => "Player Bust",
            Self::DealerBust => "Dealer Bust - Player Wins!",
        })
    }
}

/// Result of comparing a finished player hand against a finished dealer hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameResult {
    /// The outcome.
    pub outcome: GameOutcome,
    /// The player's hand value.
    pub player_value: HandValue,
    /// The dealer's hand value.
    pub dealer_value: HandValue,
    /// Net chips for the player: negative on a loss, zero on a push.
    ///
    /// A blackjack pays exactly 1.5 times the bet, so odd bets produce a
    /// fractional amount.
    pub win_amount: f64,
}
