//! A casino blackjack rules engine with optional `no_std` support.
//!
//! The crate models cards and multi-deck shoes, evaluates hands (including
//! soft/hard ace handling), applies the dealer's hit-soft-17 policy, and
//! scores finished rounds with their payouts. The [`rules`] functions are
//! pure; [`Table`] sequences a single-player round on top of them.
//!
//! # Example
//!
//! ```
//! use bjrules::rules;
//!
//! let mut deck = rules::initialize_game(8, 42);
//! let hands = rules::deal_initial_cards(&mut deck).unwrap();
//! let dealer = rules::play_dealer_hand(&mut deck, hands.dealer.cards()).unwrap();
//! let result = rules::determine_game_result(hands.player.cards(), dealer.cards(), 10);
//! let _ = result.outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DEFAULT_DECKS, Deck, DeckOptions};
pub use error::{ActionError, BetError, DealError, DealerError, SettleError};
pub use game::{GamePhase, Table};
pub use hand::{Hand, HandType, HandValue, calculate_hand_value};
pub use options::{BET_AMOUNTS, RoundingMode, TableOptions};
pub use result::{GameOutcome, GameResult};
pub use rules::{
    InitialHands, can_double_down, can_player_hit, deal_initial_cards, determine_game_result,
    initialize_game, needs_reshuffle, play_dealer_hand, should_dealer_hit,
};
