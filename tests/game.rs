//! Game integration tests.

extern crate alloc;

use alloc::collections::VecDeque;
use core::time::Duration;
use std::thread;

use highstakes::game::{betting, round};
use highstakes::{
    BetAction, Card, DECK_SIZE, Deck, DrawSource, EntropySource, FinishError, FollowSuit, Game,
    GameError, GameEvent, HAND_SIZE, Lcg, NUM_PLAYERS, OptionsError, Phase, Rank, RoundError,
    SetupError, SpecialEffect, Standings, Suit, Table, TableOptions, run_game,
};

/// Replays a fixed list of draws.
struct Scripted(VecDeque<u32>);

impl Scripted {
    fn new(draws: &[u32]) -> Self {
        Self(draws.iter().copied().collect())
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl DrawSource for Scripted {
    fn next_draw(&mut self) -> u32 {
        self.0.pop_front().expect("script ran out of draws")
    }
}

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn table_with_hands(hands: [&[Card]; NUM_PLAYERS], dealer: usize) -> Table {
    let mut table = Table::new(100);
    for (player, hand) in table.players.iter_mut().zip(hands) {
        for &c in hand {
            assert!(player.receive(c));
        }
    }
    table.dealer = dealer;
    table
}

fn played(events: &[GameEvent]) -> Vec<(usize, Card, u32)> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::CardPlayed { seat, card, value } => Some((*seat, *card, *value)),
            _ => None,
        })
        .collect()
}

#[test]
fn default_seed_deals_recorded_hands() {
    let game = Game::new(TableOptions::default()).unwrap();
    game.setup().unwrap();

    let table = game.table.lock();
    assert_eq!(
        table.players[0].hand()[0],
        card(Suit::Diamonds, Rank::Four)
    );
    assert_eq!(
        table.players[0].hand(),
        &[
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Hearts, Rank::Three),
        ]
    );
    assert_eq!(
        table.players[3].hand(),
        &[
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Hearts, Rank::Queen),
            card(Suit::Clubs, Rank::King),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Spades, Rank::Six),
        ]
    );
    assert_eq!(table.deck.len(), DECK_SIZE - NUM_PLAYERS * HAND_SIZE);
    assert_eq!(table.dealer, 0);
    drop(table);

    assert_eq!(game.phase(), Phase::Ready);
}

#[test]
fn dealt_hands_are_disjoint() {
    let mut table = Table::new(100);
    table.deck.shuffle(&mut Lcg::new(2024));
    assert_eq!(table.deal(), 20);

    let mut seen: Vec<Card> = table
        .players
        .iter()
        .flat_map(|p| p.hand().iter().copied())
        .chain(table.deck.cards().iter().copied())
        .collect();
    assert!(table.players.iter().all(|p| p.hand_len() == HAND_SIZE));
    assert_eq!(seen.len(), DECK_SIZE);
    seen.sort_by_key(|c| (c.suit, c.rank));
    seen.dedup();
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_reproducible() {
    let mut a = Deck::build();
    let mut b = Deck::build();
    a.shuffle(&mut Lcg::new(123_456));
    b.shuffle(&mut Lcg::new(123_456));
    assert_eq!(a, b);

    let mut c = Deck::build();
    c.shuffle(&mut Lcg::new(654_321));
    assert_ne!(a, c);
}

#[test]
fn default_tournament_matches_recorded_result() {
    let standings = run_game().unwrap();
    assert_eq!(standings.chips, [130, 90, 70, 110]);
    assert_eq!(standings.winner, 0);
    assert_eq!(standings.rounds_played, 5);
}

#[test]
fn default_tournament_transcript() {
    let game = Game::new(TableOptions::default()).unwrap();
    game.run().unwrap();
    assert_eq!(game.phase(), Phase::Finished);

    let transcript = game.transcript();
    assert!(matches!(
        transcript[..5],
        [
            GameEvent::HandDealt { seat: 0, .. },
            GameEvent::HandDealt { seat: 1, .. },
            GameEvent::HandDealt { seat: 2, .. },
            GameEvent::HandDealt { seat: 3, .. },
            GameEvent::DealerChosen { seat: 0 },
        ]
    ));

    let wins: Vec<(usize, i64)> = transcript
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundWon { seat, payout, .. } => Some((*seat, *payout)),
            _ => None,
        })
        .collect();
    assert_eq!(wins, vec![(3, 30), (3, 30), (0, 30), (0, 50), (2, 40)]);

    // Round one: seat 2 doubles an Ace off-trump, seat 3 peeks then plays trump.
    let first_round_plays: Vec<_> = played(&transcript).into_iter().take(2).collect();
    assert_eq!(
        first_round_plays,
        vec![
            (2, card(Suit::Hearts, Rank::Ace), 0),
            (3, card(Suit::Diamonds, Rank::Queen), 31),
        ]
    );

    assert!(matches!(
        transcript.last(),
        Some(GameEvent::TournamentOver { standings }) if standings.winner == 0
    ));
    assert_eq!(game.take_transcript().len(), transcript.len());
    assert!(game.transcript().is_empty());
}

#[test]
fn same_seed_same_game() {
    let options = TableOptions::default().with_seed(77);
    let first = Game::new(options.clone()).unwrap();
    let second = Game::new(options).unwrap();
    assert_eq!(first.run().unwrap(), second.run().unwrap());
    assert_eq!(first.transcript(), second.transcript());
}

#[test]
fn pot_is_drained_every_round_and_chips_are_conserved() {
    for seed in 0..40 {
        let game = Game::new(TableOptions::default().with_seed(seed)).unwrap();
        game.setup().unwrap();
        for _ in 0..5 {
            let outcome = game.play_round().unwrap();
            let table = game.table.lock();
            assert_eq!(table.pot, 0);
            assert_eq!(table.current_bet, 0);
            assert_eq!(table.total_chips(), 400);
            assert_eq!(table.dealer, outcome.winner);
            assert!(table.players.iter().all(|p| !p.is_folded()));
        }
    }
}

#[test]
fn chacha_stream_runs_to_completion() {
    let game = Game::with_source(TableOptions::default(), EntropySource::chacha(5)).unwrap();
    let standings = game.run().unwrap();
    assert!(standings.rounds_played >= 1 && standings.rounds_played <= 5);
    assert_eq!(standings.chips.iter().sum::<i64>(), 400);
}

#[test]
fn tournament_stops_when_one_player_holds_chips() {
    // 51 zero draws leave seat 3 holding 5♥ 9♥ K♥ first and seat 0 2♥ first.
    let mut draws = vec![0; DECK_SIZE - 1];
    draws.push(3); // dealer
    draws.extend([1, 2, 3]); // seat 3 calls, seat 0 raises to 20, trump spades
    draws.extend([1, 2, 3]); // seat 3 calls, seat 1 raises to 20, trump spades
    draws.extend([1, 2, 3]); // seat 3 calls, seat 2 raises to 20, trump spades
    let options = TableOptions::default().with_starting_chips(20);
    let game = Game::with_source(options, Scripted::new(&draws)).unwrap();

    let standings = game.run().unwrap();
    assert_eq!(standings.chips, [0, 0, 0, 80]);
    assert_eq!(standings.winner, 3);
    assert_eq!(standings.rounds_played, 3);
    assert_eq!(game.rounds_played(), 3);

    // The last-seat King swaps with nobody.
    assert!(game.transcript().contains(&GameEvent::SpecialActivated {
        seat: 3,
        effect: SpecialEffect::SwapHands { with: None },
    }));
}

#[test]
fn final_ranking_prefers_lowest_seat_on_ties() {
    assert_eq!(Standings::from_chips([0, 130, 130, 0], 5).winner, 1);
}

#[test]
fn betting_forces_short_stacks_to_fold_without_drawing() {
    let mut table = Table::new(100);
    table.players[1].debit(90); // exactly the blind
    table.players[2].debit(95);
    let mut source = Scripted::new(&[1, 2]);
    let mut events = Vec::new();

    betting::run(&mut table, &mut source, &TableOptions::default(), &mut events);

    assert_eq!(source.remaining(), 0);
    assert_eq!(table.chip_counts(), [90, 10, 5, 80]);
    assert_eq!(table.pot, 30);
    assert_eq!(table.current_bet, 20);
    assert!(table.players[1].is_folded());
    assert!(table.players[2].is_folded());
    assert_eq!(
        events,
        vec![
            GameEvent::Bet {
                seat: 0,
                action: BetAction::Call { amount: 10 }
            },
            GameEvent::Bet {
                seat: 1,
                action: BetAction::Fold { forced: true }
            },
            GameEvent::Bet {
                seat: 2,
                action: BetAction::Fold { forced: true }
            },
            GameEvent::Bet {
                seat: 3,
                action: BetAction::Raise { to: 20 }
            },
        ]
    );
}

#[test]
fn raisers_pay_the_raised_bet_in_full() {
    let mut table = Table::new(100);
    table.dealer = 2;
    let mut source = Scripted::new(&[2, 2, 1, 0]);
    let mut events = Vec::new();

    betting::run(&mut table, &mut source, &TableOptions::default(), &mut events);

    // Order 2, 3, 0, 1: raise to 20, raise to 30, call 30, fold.
    assert_eq!(table.chip_counts(), [70, 100, 80, 70]);
    assert_eq!(table.pot, 80);
    assert_eq!(table.current_bet, 30);
    assert!(table.players[1].is_folded());
    let paid: i64 = events
        .iter()
        .map(|e| match e {
            GameEvent::Bet { action, .. } => action.paid(),
            _ => 0,
        })
        .sum();
    assert_eq!(paid, table.pot);
}

#[test]
fn folded_players_are_skipped_in_betting() {
    let mut table = Table::new(100);
    table.players[0].fold();
    let mut source = Scripted::new(&[1, 1, 1]);
    let mut events = Vec::new();

    betting::run(&mut table, &mut source, &TableOptions::default(), &mut events);

    assert_eq!(events.len(), 3);
    assert_eq!(table.chip_counts(), [100, 90, 90, 90]);
}

#[test]
fn ties_go_to_the_earliest_acting_seat() {
    // Dealer 2 acts first, then 3, 0, 1. Seats 0 and 1 tie on 9 off-suit.
    let mut table = table_with_hands(
        [
            &[card(Suit::Clubs, Rank::Ten)],
            &[card(Suit::Spades, Rank::Ten)],
            &[card(Suit::Hearts, Rank::Two)],
            &[card(Suit::Diamonds, Rank::Three)],
        ],
        2,
    );
    let mut events = Vec::new();
    let leader = round::play_cards(
        &mut table,
        &mut Scripted::new(&[]),
        Suit::Diamonds,
        FollowSuit::Carryover,
        &mut events,
    )
    .unwrap();

    assert_eq!(
        played(&events),
        vec![
            (2, card(Suit::Hearts, Rank::Two), 11),
            (3, card(Suit::Diamonds, Rank::Three), 22),
            (0, card(Suit::Clubs, Rank::Ten), 9),
            (1, card(Suit::Spades, Rank::Ten), 9),
        ]
    );
    assert_eq!(leader.seat, 3);

    // Without the dealer and trump cards the tie at 9 stays with seat 0.
    let mut table = table_with_hands(
        [
            &[card(Suit::Clubs, Rank::Ten)],
            &[card(Suit::Spades, Rank::Ten)],
            &[],
            &[],
        ],
        2,
    );
    let leader = round::play_cards(
        &mut table,
        &mut Scripted::new(&[]),
        Suit::Diamonds,
        FollowSuit::Carryover,
        &mut Vec::new(),
    )
    .unwrap();
    assert_eq!(leader.seat, 0);
    assert_eq!(leader.value, 9);
}

#[test]
fn nobody_playing_pays_the_dealer() {
    let mut table = table_with_hands([&[], &[], &[], &[]], 1);
    table.pot = 40;
    let mut events = Vec::new();
    let leader = round::play_cards(
        &mut table,
        &mut Scripted::new(&[]),
        Suit::Hearts,
        FollowSuit::Carryover,
        &mut events,
    );
    assert_eq!(leader, None);
    assert!(events.is_empty());

    assert_eq!(round::resolve(&mut table, 0, leader, &mut events), (1, 40));
    assert_eq!(table.pot, 0);
    assert_eq!(table.chip_counts(), [100, 140, 100, 100]);
}

#[test]
fn king_swaps_remaining_hand_with_next_seat() {
    let seat_two = [
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
    ];
    let seat_three = [
        card(Suit::Clubs, Rank::Four),
        card(Suit::Clubs, Rank::Five),
    ];
    let mut table = table_with_hands([&[], &[], &seat_two, &seat_three], 2);
    let mut events = Vec::new();

    round::play_cards(
        &mut table,
        &mut Scripted::new(&[]),
        Suit::Spades,
        FollowSuit::Carryover,
        &mut events,
    );

    assert_eq!(
        events[0],
        GameEvent::SpecialActivated {
            seat: 2,
            effect: SpecialEffect::SwapHands { with: Some(3) },
        }
    );
    // Seat 3 now plays from seat 2's leftover cards.
    assert_eq!(
        played(&events),
        vec![
            (2, card(Suit::Hearts, Rank::King), 22),
            (3, card(Suit::Hearts, Rank::Two), 11),
        ]
    );
    assert_eq!(table.players[2].hand(), &seat_three);
    assert_eq!(table.players[3].hand(), &[card(Suit::Hearts, Rank::Three)]);
}

#[test]
fn queen_peeks_with_one_extra_draw() {
    let mut table = table_with_hands(
        [&[card(Suit::Spades, Rank::Queen)], &[], &[], &[]],
        0,
    );
    let mut source = Scripted::new(&[6]);
    let mut events = Vec::new();
    let before = table.players[1].clone();

    round::play_cards(
        &mut table,
        &mut source,
        Suit::Hearts,
        FollowSuit::Carryover,
        &mut events,
    );

    assert_eq!(source.remaining(), 0);
    assert_eq!(
        events[0],
        GameEvent::SpecialActivated {
            seat: 0,
            effect: SpecialEffect::SeeFuture {
                suit: Suit::Clubs
            },
        }
    );
    assert_eq!(table.players[1], before);
}

#[test]
fn follow_suit_reference_depends_on_policy() {
    let setup = || {
        let mut table = table_with_hands(
            [
                &[card(Suit::Clubs, Rank::Nine)],
                &[card(Suit::Clubs, Rank::Five)],
                &[],
                &[],
            ],
            0,
        );
        // The dealer played a club last round and folds this one.
        table.record_play(0, card(Suit::Clubs, Rank::Two));
        table.players[0].fold();
        table
    };

    let mut events = Vec::new();
    round::play_cards(
        &mut setup(),
        &mut Scripted::new(&[]),
        Suit::Hearts,
        FollowSuit::Carryover,
        &mut events,
    );
    assert_eq!(played(&events), vec![(1, card(Suit::Clubs, Rank::Five), 14)]);

    let mut events = Vec::new();
    round::play_cards(
        &mut setup(),
        &mut Scripted::new(&[]),
        Suit::Hearts,
        FollowSuit::AfterDealerPlays,
        &mut events,
    );
    assert_eq!(played(&events), vec![(1, card(Suit::Clubs, Rank::Five), 4)]);
}

#[test]
fn driver_rejects_out_of_order_calls() {
    let game = Game::new(TableOptions::default()).unwrap();
    assert_eq!(game.play_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.finish().unwrap_err(), FinishError::InvalidState);
    assert_eq!(game.phase(), Phase::WaitingForSetup);
    assert!(game.transcript().is_empty());

    game.setup().unwrap();
    assert_eq!(game.setup().unwrap_err(), SetupError::InvalidState);

    game.finish().unwrap();
    assert_eq!(game.play_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(game.finish().unwrap_err(), FinishError::InvalidState);
    assert_eq!(
        game.run().unwrap_err(),
        GameError::Setup(SetupError::InvalidState)
    );
}

#[test]
fn tournament_finishes_once() {
    let game = Game::new(TableOptions::default()).unwrap();
    let standings = game.run().unwrap();
    assert_eq!(game.finish().unwrap_err(), FinishError::InvalidState);

    let transcript = game.transcript();
    let endings: Vec<&GameEvent> = transcript
        .iter()
        .filter(|e| matches!(e, GameEvent::TournamentOver { .. }))
        .collect();
    assert_eq!(endings, [&GameEvent::TournamentOver { standings }]);
    assert_eq!(transcript.last(), Some(&GameEvent::TournamentOver { standings }));
}

#[test]
fn concurrent_rounds_play_in_sequence() {
    const ROUNDS: usize = 4;

    let sequential = Game::new(TableOptions::default()).unwrap();
    sequential.setup().unwrap();
    for _ in 0..ROUNDS {
        sequential.play_round().unwrap();
    }

    let game = Game::new(TableOptions::default()).unwrap();
    game.setup().unwrap();
    let mut rounds: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..ROUNDS)
            .map(|_| scope.spawn(|| game.play_round().unwrap().round))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    rounds.sort_unstable();

    assert_eq!(rounds, [0, 1, 2, 3]);
    assert_eq!(game.rounds_played(), ROUNDS);
    assert_eq!(game.phase(), Phase::Ready);
    assert_eq!(game.transcript(), sequential.transcript());
    assert_eq!(game.table.lock().total_chips(), 400);
}

#[test]
fn pacing_delays_rounds_without_changing_the_result() {
    let options = TableOptions::default().with_pacing(Duration::from_millis(1));
    assert_eq!(options.pacing, Some(Duration::from_millis(1)));

    let game = Game::new(options).unwrap();
    let standings = game.run().unwrap();
    assert_eq!(standings.chips, [130, 90, 70, 110]);
    assert_eq!(standings.winner, 0);
    assert_eq!(standings.rounds_played, 5);
    assert_eq!(game.phase(), Phase::Finished);
}

#[test]
fn options_builder_and_validation() {
    let options = TableOptions::default()
        .with_rounds(3)
        .with_starting_chips(50)
        .with_small_blind(5)
        .with_raise_step(15)
        .with_seed(9)
        .with_follow_suit(FollowSuit::AfterDealerPlays);
    assert_eq!(options.rounds, 3);
    assert_eq!(options.starting_chips, 50);
    assert_eq!(options.small_blind, 5);
    assert_eq!(options.raise_step, 15);
    assert_eq!(options.seed, 9);
    assert_eq!(options.follow_suit, FollowSuit::AfterDealerPlays);
    assert!(options.validate().is_ok());

    assert_eq!(
        TableOptions::default().with_rounds(0).validate(),
        Err(OptionsError::ZeroRounds)
    );
    assert_eq!(
        Game::new(TableOptions::default().with_small_blind(0))
            .err()
            .map(|e| e.to_string()),
        Some("small blind must be positive".to_string())
    );
    assert_eq!(
        TableOptions::default().with_raise_step(-1).validate(),
        Err(OptionsError::NonPositiveRaiseStep)
    );
    assert_eq!(
        TableOptions::default().with_starting_chips(0).validate(),
        Err(OptionsError::NonPositiveStartingChips)
    );
}

#[test]
fn events_render_as_table_talk() {
    let game = Game::new(TableOptions::default()).unwrap();
    game.setup().unwrap();
    let lines: Vec<String> = game.transcript().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines[0],
        "Player 0 hand: 4♦ Q♠(SF) 5♥ 3♦ 3♥ | Chips: 100"
    );
    assert_eq!(lines[4], "\nPlayer 0 is dealer first");
}
