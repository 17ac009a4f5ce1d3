//! Hands and hand valuation.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::rules::BLACKJACK;

/// Whether an ace is still being counted as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandType {
    /// At least one ace counts as 11.
    Soft,
    /// No ace counts as 11.
    Hard,
}

/// The evaluated value of a hand.
///
/// Always derived from the cards on demand; never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    /// Point total after demoting as many aces as needed.
    pub value: usize,
    /// Soft or hard.
    pub hand_type: HandType,
    /// Total is over 21.
    pub is_bust: bool,
    /// Two-card 21.
    pub is_blackjack: bool,
}

impl HandValue {
    /// Returns whether the hand is soft.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self.hand_type, HandType::Soft)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blackjack {
            f.write_str("Blackjack!")
        } else if self.is_bust {
            write!(f, "Bust ({})", self.value)
        } else if self.is_soft() && self.value != BLACKJACK {
            write!(f, "Soft {}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Evaluates a hand.
///
/// Every ace starts at 11; while the total is over 21 one ace at a time is
/// demoted to 1. The hand is soft if any ace survives at 11. Only a two-card
/// 21 is a blackjack. An empty hand is a hard 0.
#[must_use]
pub fn calculate_hand_value(cards: &[Card]) -> HandValue {
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(usize::from(card.value()));
    }

    let mut demoted: usize = 0;
    while value > BLACKJACK && demoted < aces {
        value -= 10;
        demoted += 1;
    }

    let hand_type = if aces > 0 && demoted < aces {
        HandType::Soft
    } else {
        HandType::Hard
    };

    HandValue {
        value,
        hand_type,
        is_bust: value > BLACKJACK,
        is_blackjack: cards.len() == 2 && value == BLACKJACK,
    }
}

/// An ordered, append-only set of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates the hand as it stands now.
    #[must_use]
    pub fn value(&self) -> HandValue {
        calculate_hand_value(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card, for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}
