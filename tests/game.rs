//! Table integration tests.

use bjrules::{
    ActionError, BetError, Card, DealError, DealerError, Deck, DeckOptions, GameOutcome,
    GamePhase, Rank, RoundingMode, SettleError, Suit, Table, TableOptions,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn table(chips: usize) -> Table {
    Table::new(TableOptions::default().with_starting_chips(chips), 42)
}

fn set_deck_from_draws(table: &mut Table, draws: &[Card]) {
    *table.deck_mut() = Deck::from_draws(DeckOptions::default(), 0, draws);
}

/// Starts a round and stacks the shoe so the next deal follows `draws`.
fn start_with(table: &mut Table, draws: &[Card]) {
    table.start_round().unwrap();
    set_deck_from_draws(table, draws);
    table.deal().unwrap();
}

#[test]
fn new_table_waits_for_bets() {
    let table = table(1000);
    assert_eq!(table.phase(), GamePhase::Betting);
    assert_eq!(table.chips(), 1000);
    assert_eq!(table.current_bet(), 10);
    assert_eq!(table.deck().remaining(), 416);
    assert!(table.result().is_none());
}

#[test]
fn bet_errors() {
    let mut table = table(50);

    assert_eq!(table.set_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(table.set_bet(60).unwrap_err(), BetError::InsufficientChips);
    table.set_bet(25).unwrap();
    assert_eq!(table.current_bet(), 25);

    table.start_round().unwrap();
    assert_eq!(table.set_bet(5).unwrap_err(), BetError::InvalidState);
    assert_eq!(table.start_round().unwrap_err(), BetError::InvalidState);
}

#[test]
fn start_round_rejects_unaffordable_bet() {
    let options = TableOptions::default()
        .with_starting_chips(5)
        .with_initial_bet(10);
    let mut table = Table::new(options, 1);

    assert_eq!(
        table.start_round().unwrap_err(),
        BetError::InsufficientChips
    );
    assert_eq!(table.phase(), GamePhase::Betting);
}

#[test]
fn start_round_replaces_low_shoe() {
    let deck = Deck::from_draws(
        DeckOptions::default().with_decks(1),
        3,
        &[card(Suit::Hearts, Rank::Two); 10],
    );
    let mut table = Table::with_deck(TableOptions::default().with_decks(1), deck);
    assert!(table.needs_reshuffle());

    assert!(table.start_round().unwrap());
    assert_eq!(table.deck().remaining(), 52);
    assert_eq!(table.phase(), GamePhase::Dealing);
}

#[test]
fn start_round_keeps_healthy_shoe() {
    let mut table = table(100);
    assert!(!table.start_round().unwrap());
    assert_eq!(table.deck().remaining(), 416);
}

#[test]
fn deal_requires_dealing_phase() {
    let mut table = table(100);
    assert_eq!(table.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn deal_with_short_shoe_returns_to_betting() {
    let mut table = table(100);
    table.start_round().unwrap();
    set_deck_from_draws(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );

    assert_eq!(table.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(table.phase(), GamePhase::Betting);
}

#[test]
fn basic_round_flow() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Eight),   // player
            card(Suit::Clubs, Rank::Six),      // dealer up
            card(Suit::Diamonds, Rank::Seven), // player
            card(Suit::Spades, Rank::Ten),     // dealer hole
            card(Suit::Hearts, Rank::Four),    // player hit
            card(Suit::Clubs, Rank::Five),     // dealer draw
        ],
    );
    assert_eq!(table.phase(), GamePhase::PlayerTurn);
    assert_eq!(table.player_value().value, 15);
    assert_eq!(table.dealer_value().value, 16);

    let hit_card = table.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Four);
    assert_eq!(table.phase(), GamePhase::PlayerTurn);

    table.stand().unwrap();
    assert_eq!(table.phase(), GamePhase::DealerTurn);

    assert_eq!(table.play_dealer().unwrap(), 1);
    assert_eq!(table.phase(), GamePhase::Finished);

    let result = table.settle().unwrap();
    assert_eq!(result.outcome, GameOutcome::DealerWin);
    assert_eq!(result.dealer_value.value, 21);
    assert_eq!(table.chips(), 90);
    assert_eq!(table.games_played(), 1);
    assert_eq!(table.games_won(), 0);
    assert_eq!(table.phase(), GamePhase::Betting);
    assert!(table.player_hand().is_empty());
    assert!(table.dealer_hand().is_empty());
}

#[test]
fn natural_finishes_round_immediately() {
    let mut table = table(100);
    table.set_bet(5).unwrap();
    start_with(
        &mut table,
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Hearts, Rank::King),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );
    assert_eq!(table.phase(), GamePhase::Finished);
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidState);

    let result = table.settle().unwrap();
    assert_eq!(result.outcome, GameOutcome::PlayerBlackjack);
    // 7.5 rounded down
    assert_eq!(table.chips(), 107);
    assert_eq!(table.games_won(), 1);
}

#[test]
fn blackjack_payout_rounding_is_configurable() {
    let options = TableOptions::default()
        .with_starting_chips(100)
        .with_initial_bet(5)
        .with_rounding_blackjack(RoundingMode::Nearest);
    let mut table = Table::new(options, 42);
    start_with(
        &mut table,
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Hearts, Rank::Queen),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );

    table.settle().unwrap();
    assert_eq!(table.chips(), 108);
}

#[test]
fn dealer_natural_finishes_round() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Jack),
        ],
    );
    assert_eq!(table.phase(), GamePhase::Finished);

    let result = table.result().unwrap();
    assert_eq!(result.outcome, GameOutcome::DealerBlackjack);
    table.settle().unwrap();
    assert_eq!(table.chips(), 90);
}

#[test]
fn hit_to_21_hands_over_to_dealer() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Hearts, Rank::Ten),
        ],
    );

    table.hit().unwrap();
    assert_eq!(table.player_value().value, 21);
    assert_eq!(table.phase(), GamePhase::DealerTurn);
}

#[test]
fn hit_to_bust_finishes_round() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Hearts, Rank::King),
        ],
    );

    table.hit().unwrap();
    assert_eq!(table.phase(), GamePhase::Finished);

    let result = table.settle().unwrap();
    assert_eq!(result.outcome, GameOutcome::PlayerBust);
    assert_eq!(table.chips(), 90);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Six),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );
    assert_eq!(table.phase(), GamePhase::PlayerTurn);

    assert_eq!(table.hit().unwrap_err(), ActionError::NoCards);
    assert_eq!(table.player_hand().len(), 2);
}

#[test]
fn double_down_doubles_bet_and_stands() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Five),    // player
            card(Suit::Clubs, Rank::Two),      // dealer up
            card(Suit::Diamonds, Rank::Four),  // player
            card(Suit::Spades, Rank::Three),   // dealer hole
            card(Suit::Hearts, Rank::Ten),     // double draw
            card(Suit::Clubs, Rank::Ten),      // dealer draw
            card(Suit::Diamonds, Rank::Queen), // dealer draw
        ],
    );
    assert!(table.can_double_down());

    let drawn = table.double_down().unwrap();
    assert_eq!(drawn.rank, Rank::Ten);
    assert_eq!(table.current_bet(), 20);
    assert_eq!(table.phase(), GamePhase::DealerTurn);

    assert_eq!(table.play_dealer().unwrap(), 2);
    let result = table.settle().unwrap();
    assert_eq!(result.outcome, GameOutcome::DealerBust);
    assert_eq!(table.chips(), 120);
    assert_eq!(table.current_bet(), 10);
}

#[test]
fn double_down_requires_chips_for_twice_the_bet() {
    let mut table = table(15);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Spades, Rank::Three),
            card(Suit::Hearts, Rank::Ten),
        ],
    );

    assert!(!table.can_double_down());
    assert_eq!(
        table.double_down().unwrap_err(),
        ActionError::InsufficientChips
    );
}

#[test]
fn double_down_rejected_after_hit() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Four),
        ],
    );

    table.hit().unwrap();
    assert!(!table.can_double_down());
    assert_eq!(
        table.double_down().unwrap_err(),
        ActionError::CannotDouble
    );
}

#[test]
fn dealer_out_of_cards_still_finishes() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Six),
        ],
    );

    table.stand().unwrap();
    assert_eq!(
        table.play_dealer().unwrap_err(),
        DealerError::DeckExhausted
    );
    assert_eq!(table.phase(), GamePhase::Finished);
    assert_eq!(table.dealer_hand().len(), 2);
}

#[test]
fn settle_rejects_unfinished_round() {
    let mut table = table(100);
    assert_eq!(table.settle().unwrap_err(), SettleError::InvalidState);
    assert_eq!(table.play_dealer().unwrap_err(), DealerError::InvalidState);
    assert_eq!(table.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn losing_lowers_bet_to_affordable_denomination() {
    let mut table = table(150);
    table.set_bet(100).unwrap();
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Nine),
        ],
    );
    table.stand().unwrap();
    table.play_dealer().unwrap();
    table.settle().unwrap();

    assert_eq!(table.chips(), 50);
    assert_eq!(table.current_bet(), 50);
    assert_eq!(table.original_bet(), 50);
}

#[test]
fn broke_player_falls_back_to_smallest_bet() {
    let mut table = table(100);
    table.set_bet(100).unwrap();
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Nine),
        ],
    );
    table.stand().unwrap();
    table.play_dealer().unwrap();
    table.settle().unwrap();

    assert_eq!(table.chips(), 0);
    assert_eq!(table.current_bet(), 5);
    assert_eq!(
        table.start_round().unwrap_err(),
        BetError::InsufficientChips
    );
}

#[test]
fn push_keeps_chips() {
    let mut table = table(100);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Eight),
        ],
    );
    table.stand().unwrap();
    assert_eq!(table.play_dealer().unwrap(), 0);

    let result = table.settle().unwrap();
    assert_eq!(result.outcome, GameOutcome::Push);
    assert_eq!(table.chips(), 100);
    assert_eq!(table.games_played(), 1);
    assert_eq!(table.games_won(), 0);
}

#[test]
fn full_rounds_from_seeded_shoe() {
    let mut table = table(1000);

    for _ in 0..50 {
        table.start_round().unwrap();
        table.deal().unwrap();

        while table.phase() == GamePhase::PlayerTurn {
            if table.player_value().value < 17 {
                table.hit().unwrap();
            } else {
                table.stand().unwrap();
            }
        }

        if table.phase() == GamePhase::DealerTurn {
            table.play_dealer().unwrap();
        }

        table.settle().unwrap();
    }

    assert_eq!(table.games_played(), 50);
    assert!(table.games_won() <= 50);
}

#[test]
fn huge_bets_do_not_overflow_when_doubling() {
    let options = TableOptions::default()
        .with_starting_chips(usize::MAX)
        .with_initial_bet(usize::MAX / 2 + 1);
    let mut table = Table::new(options, 42);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Spades, Rank::Three),
            card(Suit::Hearts, Rank::Ten),
        ],
    );

    assert!(!table.can_double_down());
    assert_eq!(
        table.double_down().unwrap_err(),
        ActionError::InsufficientChips
    );
    assert_eq!(table.player_hand().len(), 2);
}

#[test]
fn winnings_saturate_the_chip_stack() {
    let options = TableOptions::default().with_starting_chips(usize::MAX);
    let mut table = Table::new(options, 42);
    start_with(
        &mut table,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::King),
        ],
    );
    table.stand().unwrap();
    table.play_dealer().unwrap();

    let result = table.settle().unwrap();
    assert_eq!(result.outcome, GameOutcome::DealerBust);
    assert_eq!(table.chips(), usize::MAX);
}
