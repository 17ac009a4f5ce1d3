//! Blackjack rules: action legality, dealer policy, outcomes and shoe upkeep.
//!
//! Everything here is a plain function over cards and shoes. Sequencing a
//! round (who acts when) is left to the caller; see [`Table`](crate::Table)
//! for a ready-made sequencer.

use log::{debug, error, warn};

use crate::card::Card;
use crate::deck::{Deck, DeckOptions};
use crate::error::{DealError, DealerError};
use crate::hand::{Hand, HandType, calculate_hand_value};
use crate::result::{GameOutcome, GameResult};

/// The target total.
pub const BLACKJACK: usize = 21;

/// The total at which the dealer stops drawing (except on soft 17).
pub const DEALER_STAND_VALUE: usize = 17;

/// Remaining-card fraction below which the shoe should be replaced.
pub const RESHUFFLE_THRESHOLD: f64 = 0.25;

/// Payout ratio for a player blackjack (3:2).
pub const BLACKJACK_PAYS: f64 = 1.5;

/// Returns whether the dealer must draw.
///
/// The dealer draws below 17 and on soft 17, and stands on hard 17 or more.
#[must_use]
pub fn should_dealer_hit(dealer_cards: &[Card]) -> bool {
    let hand = calculate_hand_value(dealer_cards);

    hand.value < DEALER_STAND_VALUE
        || (hand.value == DEALER_STAND_VALUE && hand.hand_type == HandType::Soft)
}

/// Returns whether the hand is structurally eligible to double down.
///
/// Only the card count is checked; whether the player can afford the extra
/// bet is the caller's concern.
#[must_use]
pub const fn can_double_down(cards: &[Card]) -> bool {
    cards.len() == 2
}

/// Returns whether the player may take another card.
#[must_use]
pub fn can_player_hit(cards: &[Card]) -> bool {
    let hand = calculate_hand_value(cards);
    !hand.is_bust && hand.value < BLACKJACK
}

/// Compares two finished hands and computes the player's net win.
///
/// Checks run in a fixed order and the first match wins: player bust,
/// dealer bust, both blackjack, player blackjack, dealer blackjack, then
/// plain totals.
#[must_use]
pub fn determine_game_result(
    player_cards: &[Card],
    dealer_cards: &[Card],
    bet: usize,
) -> GameResult {
    let player_value = calculate_hand_value(player_cards);
    let dealer_value = calculate_hand_value(dealer_cards);

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary values"
    )]
    let bet = bet as f64;

    let (outcome, win_amount) = if player_value.is_bust {
        (GameOutcome::PlayerBust, -bet)
    } else if dealer_value.is_bust {
        (GameOutcome::DealerBust, bet)
    } else if player_value.is_blackjack && dealer_value.is_blackjack {
        (GameOutcome::Push, 0.0)
    } else if player_value.is_blackjack {
        (GameOutcome::PlayerBlackjack, bet * BLACKJACK_PAYS)
    } else if dealer_value.is_blackjack {
        (GameOutcome::DealerBlackjack, -bet)
    } else if player_value.value > dealer_value.value {
        (GameOutcome::PlayerWin, bet)
    } else if dealer_value.value > player_value.value {
        (GameOutcome::DealerWin, -bet)
    } else {
        (GameOutcome::Push, 0.0)
    };

    GameResult {
        outcome,
        player_value,
        dealer_value,
        win_amount,
    }
}

/// Builds and shuffles a fresh shoe of `decks` decks.
///
/// Passing `0` builds the default eight-deck shoe.
#[must_use]
pub fn initialize_game(decks: u8, seed: u64) -> Deck {
    let mut deck = Deck::new(DeckOptions::default().with_decks(decks), seed);
    deck.shuffle();
    debug!(
        "initialized shoe: {} decks, {} cards",
        deck.number_of_decks(),
        deck.total()
    );
    deck
}

/// The two opening hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialHands {
    /// The player's two cards.
    pub player: Hand,
    /// The dealer's two cards; the first is the up card.
    pub dealer: Hand,
}

/// Deals player, dealer, player, dealer.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] if the shoe runs out before all
/// four cards are dealt. Keeping the shoe above the reshuffle threshold
/// between rounds prevents this.
pub fn deal_initial_cards(deck: &mut Deck) -> Result<InitialHands, DealError> {
    let mut player = Hand::new();
    let mut dealer = Hand::new();

    for _ in 0..2 {
        let (Some(player_card), Some(dealer_card)) = (deck.deal_card(), deck.deal_card()) else {
            error!(
                "initial deal failed with {} cards left in the shoe",
                deck.remaining()
            );
            return Err(DealError::NotEnoughCards);
        };

        player.add_card(player_card);
        dealer.add_card(dealer_card);
    }

    Ok(InitialHands { player, dealer })
}

/// Draws for the dealer until [`should_dealer_hit`] says stop.
///
/// The input cards are left untouched; the returned hand holds them plus
/// every card drawn.
///
/// # Errors
///
/// Returns [`DealerError::DeckExhausted`] if the dealer must hit but the
/// shoe is empty.
pub fn play_dealer_hand(deck: &mut Deck, dealer_cards: &[Card]) -> Result<Hand, DealerError> {
    let mut hand = Hand::from(dealer_cards.to_vec());

    while should_dealer_hit(hand.cards()) {
        let Some(card) = deck.deal_card() else {
            warn!("shoe exhausted with dealer at {}", hand.value());
            return Err(DealerError::DeckExhausted);
        };
        debug!("dealer draws {card}");
        hand.add_card(card);
    }

    Ok(hand)
}

/// Returns whether fewer than a quarter of the shoe's cards remain.
#[must_use]
pub fn needs_reshuffle(deck: &Deck) -> bool {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let remaining_ratio = deck.remaining() as f64 / deck.total() as f64;

    remaining_ratio < RESHUFFLE_THRESHOLD
}
