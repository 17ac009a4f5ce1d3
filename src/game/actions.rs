use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::rules::{self, BLACKJACK};

use super::{GamePhase, Table};

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != GamePhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    fn draw_for_player(&mut self) -> Result<Card, ActionError> {
        let card = self.deck.deal_card().ok_or(ActionError::NoCards)?;
        self.player_hand.add_card(card);
        debug!("player draws {card}");
        Ok(card)
    }

    fn covers_double(&self) -> bool {
        self.original_bet
            .checked_mul(2)
            .is_some_and(|doubled| doubled <= self.chips)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round; reaching exactly 21 hands over to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand cannot take
    /// another card, or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if !rules::can_player_hit(self.player_hand.cards()) {
            return Err(ActionError::CannotHit);
        }

        let card = self.draw_for_player()?;

        let value = self.player_value();
        if value.is_bust {
            self.phase = GamePhase::Finished;
        } else if value.value == BLACKJACK {
            self.phase = GamePhase::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.phase = GamePhase::DealerTurn;
        Ok(())
    }

    /// Returns whether the player may double down right now, including
    /// whether the stack covers twice the original bet.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.phase == GamePhase::PlayerTurn
            && rules::can_double_down(self.player_hand.cards())
            && self.covers_double()
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not
    /// hold exactly two cards, the stack cannot cover the doubled bet, or
    /// the shoe is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if !rules::can_double_down(self.player_hand.cards()) {
            return Err(ActionError::CannotDouble);
        }
        let Some(doubled) = self
            .original_bet
            .checked_mul(2)
            .filter(|&doubled| doubled <= self.chips)
        else {
            return Err(ActionError::InsufficientChips);
        };

        let card = self.draw_for_player()?;
        self.current_bet = doubled;

        self.phase = if self.player_value().is_bust {
            GamePhase::Finished
        } else {
            GamePhase::DealerTurn
        };

        Ok(card)
    }
}
