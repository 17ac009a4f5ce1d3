use log::{error, info};

use crate::error::{DealerError, SettleError};
use crate::hand::Hand;
use crate::options::RoundingMode;
use crate::result::GameResult;
use crate::rules;

use super::{GamePhase, Table};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Table {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws below 17 and on soft 17. Returns the number of cards
    /// drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, or if the shoe runs
    /// out while the dealer must draw. In the latter case the round still
    /// finishes with whatever the dealer holds.
    pub fn play_dealer(&mut self) -> Result<usize, DealerError> {
        if self.phase != GamePhase::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let before = self.dealer_hand.len();
        let result = rules::play_dealer_hand(&mut self.deck, self.dealer_hand.cards());
        self.phase = GamePhase::Finished;

        match result {
            Ok(hand) => {
                self.dealer_hand = hand;
                Ok(self.dealer_hand.len() - before)
            }
            Err(err) => {
                error!("error playing dealer hand: {err}");
                Err(err)
            }
        }
    }

    /// Returns the round result once the round is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        (self.phase == GamePhase::Finished).then(|| {
            rules::determine_game_result(
                self.player_hand.cards(),
                self.dealer_hand.cards(),
                self.current_bet,
            )
        })
    }

    /// Settles a finished round and returns to betting.
    ///
    /// This function:
    /// 1. Scores the round and updates the win/loss tally
    /// 2. Applies the win amount to the chip stack
    /// 3. Restores the original bet, lowering it if the stack no longer
    ///    covers it
    /// 4. Clears both hands
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not finished.
    pub fn settle(&mut self) -> Result<GameResult, SettleError> {
        let result = self.result().ok_or(SettleError::InvalidState)?;

        self.games_played += 1;
        if result.outcome.is_player_win() {
            self.games_won += 1;
        }

        let mode = self.options.rounding_blackjack;
        if result.win_amount < 0.0 {
            let loss = round_amount(-result.win_amount, mode);
            self.chips = self.chips.saturating_sub(loss);
        } else {
            self.chips = self.chips.saturating_add(round_amount(result.win_amount, mode));
        }

        info!(
            "round settled: {} (player {}, dealer {}), {:+} chips, stack {}",
            result.outcome,
            result.player_value,
            result.dealer_value,
            result.win_amount,
            self.chips
        );

        self.current_bet = self.original_bet;
        self.adjust_bet_if_needed(self.chips);

        self.player_hand = Hand::new();
        self.dealer_hand = Hand::new();
        self.phase = GamePhase::Betting;

        Ok(result)
    }
}
