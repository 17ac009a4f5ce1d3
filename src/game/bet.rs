use log::{debug, error};

use crate::error::{BetError, DealError};
use crate::rules;

use super::{GamePhase, Table};

impl Table {
    /// Sets the bet for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the amount is zero,
    /// or the amount exceeds the chip stack.
    pub const fn set_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !matches!(self.phase, GamePhase::Betting) {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.chips {
            return Err(BetError::InsufficientChips);
        }

        self.current_bet = amount;
        self.original_bet = amount;
        Ok(())
    }

    /// Shrinks the bet to fit `chips` if it no longer does.
    ///
    /// The bet drops to the highest affordable denomination, or to the
    /// smallest one if none is affordable. Returns the resulting bet.
    pub fn adjust_bet_if_needed(&mut self, chips: usize) -> usize {
        if self.current_bet <= chips {
            return self.current_bet;
        }

        let amounts = self.options.bet_amounts;
        let adjusted = amounts
            .iter()
            .copied()
            .filter(|&amount| amount <= chips)
            .max()
            .or_else(|| amounts.iter().copied().min());

        if let Some(bet) = adjusted {
            debug!("bet {} exceeds {chips} chips, lowering to {bet}", self.current_bet);
            self.current_bet = bet;
            self.original_bet = bet;
        }

        self.current_bet
    }

    /// Locks in the bet and prepares the shoe for a new round.
    ///
    /// The shoe is refilled and reshuffled first if it holds fewer than
    /// `min_cards_before_round` cards or has dropped below the reshuffle
    /// threshold. Returns `true` if that happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the bet is zero, or
    /// the bet exceeds the chip stack.
    pub fn start_round(&mut self) -> Result<bool, BetError> {
        if self.phase != GamePhase::Betting {
            return Err(BetError::InvalidState);
        }
        if self.current_bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.current_bet > self.chips {
            return Err(BetError::InsufficientChips);
        }

        self.original_bet = self.current_bet;

        let reshuffled = self.deck.remaining() < self.options.min_cards_before_round
            || rules::needs_reshuffle(&self.deck);
        if reshuffled {
            self.deck.reset();
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.phase = GamePhase::Dealing;

        Ok(reshuffled)
    }

    /// Deals the opening hands.
    ///
    /// If either side holds a natural the round is over immediately;
    /// otherwise it is the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the dealing phase, or if the
    /// shoe runs out mid-deal, in which case the table returns to betting.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != GamePhase::Dealing {
            return Err(DealError::InvalidState);
        }

        let hands = match rules::deal_initial_cards(&mut self.deck) {
            Ok(hands) => hands,
            Err(err) => {
                error!("error dealing initial cards: {err}");
                self.phase = GamePhase::Betting;
                return Err(err);
            }
        };

        self.player_hand = hands.player;
        self.dealer_hand = hands.dealer;

        let natural = self.player_value().is_blackjack || self.dealer_value().is_blackjack;
        self.phase = if natural {
            GamePhase::Finished
        } else {
            GamePhase::PlayerTurn
        };

        Ok(())
    }
}
