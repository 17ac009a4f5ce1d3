//! The shoe: a multi-deck, ordered, mutable card supply.

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Default number of 52-card decks in a shoe.
pub const DEFAULT_DECKS: u8 = 8;

/// Shoe construction options.
///
/// ```
/// use bjrules::DeckOptions;
///
/// let options = DeckOptions::default().with_decks(6);
/// assert_eq!(options.decks, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of 52-card decks combined into the shoe. Zero selects
    /// [`DEFAULT_DECKS`].
    pub decks: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    const fn effective_decks(self) -> u8 {
        if self.decks == 0 {
            DEFAULT_DECKS
        } else {
            self.decks
        }
    }
}

/// A shoe of one or more standard decks.
///
/// Cards are dealt from the end of the internal sequence, which is also
/// the end cards are pushed onto during construction. Dealt cards leave
/// the shoe; the caller owns them from then on.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    decks: u8,
    total: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled shoe. Shuffling is seeded with `seed`.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let decks = options.effective_decks();
        let total = decks as usize * DECK_SIZE;

        let mut deck = Self {
            cards: Vec::with_capacity(total),
            decks,
            total,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.populate();
        deck
    }

    /// Creates a stacked shoe that deals `draws` in the given order.
    ///
    /// The shoe reports the capacity configured by `options`; cards beyond
    /// that capacity are ignored. Useful for replaying a known sequence.
    #[must_use]
    pub fn from_draws(options: DeckOptions, seed: u64, draws: &[Card]) -> Self {
        let decks = options.effective_decks();
        let total = decks as usize * DECK_SIZE;

        let mut cards: Vec<Card> = draws.iter().take(total).copied().collect();
        cards.reverse();

        Self {
            cards,
            decks,
            total,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn populate(&mut self) {
        self.cards.clear();

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!("shuffled {} cards", self.cards.len());
    }

    /// Deals one card from the top of the shoe.
    ///
    /// Returns `None` once the shoe is empty. Callers must not treat that as
    /// a successful deal.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals up to `count` cards, stopping early if the shoe runs out.
    pub fn deal_cards(&mut self, count: usize) -> Vec<Card> {
        let available = count.min(self.cards.len());
        let mut dealt = self.cards.split_off(self.cards.len() - available);
        dealt.reverse();
        dealt
    }

    /// Refills the shoe to its full composition and shuffles it.
    pub fn reset(&mut self) {
        self.populate();
        debug!("reset shoe of {} decks", self.decks);
        self.shuffle();
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn number_of_decks(&self) -> u8 {
        self.decks
    }

    /// Returns whether the shoe has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
