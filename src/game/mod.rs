//! Single-player table session.
//!
//! [`Table`] holds everything a round needs (shoe, hands, bet, chip stack,
//! phase) and exposes each phase transition as a method. It never waits or
//! schedules anything: a front end that wants to pause between the deal
//! and the dealer's turn simply calls the next method later.

use crate::deck::Deck;
use crate::hand::{Hand, HandValue};
use crate::options::TableOptions;
use crate::rules;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GamePhase;

/// A blackjack table for one player against the dealer.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// The shoe.
    deck: Deck,
    /// Current phase.
    phase: GamePhase,
    /// Player's cards for the current round.
    player_hand: Hand,
    /// Dealer's cards for the current round; the first is the up card.
    dealer_hand: Hand,
    /// Bet at stake, doubled after a double down.
    current_bet: usize,
    /// Bet the round was started with.
    original_bet: usize,
    /// Player's chip stack.
    chips: usize,
    /// Rounds settled.
    games_played: u32,
    /// Rounds settled in the player's favour.
    games_won: u32,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe seeded by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{GamePhase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.phase(), GamePhase::Betting);
    /// assert_eq!(table.chips(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let deck = rules::initialize_game(options.decks, seed);
        Self::with_deck(options, deck)
    }

    /// Creates a table that deals from the given shoe.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck) -> Self {
        let chips = options.starting_chips;
        let bet = options.initial_bet;

        Self {
            options,
            deck,
            phase: GamePhase::Betting,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            current_bet: bet,
            original_bet: bet,
            chips,
            games_played: 0,
            games_won: 0,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the shoe mutably, e.g. to stack it for a replay.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns whether the shoe has dropped below the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        rules::needs_reshuffle(&self.deck)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Evaluates the player's hand.
    #[must_use]
    pub fn player_value(&self) -> HandValue {
        self.player_hand.value()
    }

    /// Evaluates the dealer's hand.
    #[must_use]
    pub fn dealer_value(&self) -> HandValue {
        self.dealer_hand.value()
    }

    /// Returns the bet at stake this round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the bet the round was started with.
    #[must_use]
    pub const fn original_bet(&self) -> usize {
        self.original_bet
    }

    /// Returns the player's chip stack.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Returns the number of settled rounds the player won.
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }
}
