//! Table configuration options.

use crate::deck::DEFAULT_DECKS;

/// Rounding mode for crediting fractional payouts to a chip stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Chip denominations a bet can be adjusted to.
pub const BET_AMOUNTS: [usize; 6] = [5, 10, 25, 50, 100, 500];

/// Configuration options for a [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrules::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_starting_chips(500)
///     .with_initial_bet(25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Chips the player sits down with.
    pub starting_chips: usize,
    /// Bet in place before the first round.
    pub initial_bet: usize,
    /// Denominations used when a bet must shrink to fit the stack.
    pub bet_amounts: &'static [usize],
    /// The shoe is replaced before a round if fewer cards than this remain.
    pub min_cards_before_round: usize,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            starting_chips: 1000,
            initial_bet: 10,
            bet_amounts: &BET_AMOUNTS,
            min_cards_before_round: 23,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting chip stack.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the opening bet.
    #[must_use]
    pub const fn with_initial_bet(mut self, bet: usize) -> Self {
        self.initial_bet = bet;
        self
    }

    /// Sets the bet denominations.
    #[must_use]
    pub const fn with_bet_amounts(mut self, amounts: &'static [usize]) -> Self {
        self.bet_amounts = amounts;
        self
    }

    /// Sets the minimum shoe size required to start a round without
    /// replacing the shoe.
    #[must_use]
    pub const fn with_min_cards_before_round(mut self, cards: usize) -> Self {
        self.min_cards_before_round = cards;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
