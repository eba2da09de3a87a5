//! Trump selection, card play and pot resolution for one round.

use alloc::vec::Vec;

use crate::card::{Card, Special, Suit};
use crate::events::{GameEvent, SpecialEffect};
use crate::options::FollowSuit;
use crate::player::Chips;
use crate::rng::DrawSource;
use crate::table::{NUM_PLAYERS, Seat, Table, seat_after};

/// Bonus for a card of the trump suit.
pub const TRUMP_BONUS: u32 = 20;
/// Bonus for a card matching the dealer's suit.
pub const FOLLOW_BONUS: u32 = 10;

/// The best play seen so far in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leader {
    /// Seat holding the lead.
    pub seat: Seat,
    /// Its card value.
    pub value: u32,
}

/// Draws the trump suit for a round.
pub fn draw_trump<S: DrawSource>(source: &mut S) -> Suit {
    Suit::from_draw(source.next_draw())
}

/// Scores a played card.
///
/// The base value is the rank ordinal. Trump adds [`TRUMP_BONUS`]; otherwise a
/// card matching `follow` adds [`FOLLOW_BONUS`]. Double points apply last.
#[must_use]
pub fn card_value(card: Card, trump: Suit, follow: Option<Suit>) -> u32 {
    let mut value = u32::from(card.rank.ordinal());
    if card.suit == trump {
        value += TRUMP_BONUS;
    } else if follow == Some(card.suit) {
        value += FOLLOW_BONUS;
    }
    if card.special == Special::DoublePoints {
        value *= 2;
    }
    value
}

/// Resolves the ability of a card `seat` just played.
fn activate<S: DrawSource>(
    table: &mut Table,
    source: &mut S,
    seat: Seat,
    card: Card,
) -> Option<SpecialEffect> {
    match card.special {
        Special::None => None,
        Special::DoublePoints => Some(SpecialEffect::DoublePoints),
        Special::SwapHands => Some(SpecialEffect::SwapHands {
            with: table.swap_hands(seat),
        }),
        Special::SeeFuture => Some(SpecialEffect::SeeFuture {
            suit: Suit::from_draw(source.next_draw()),
        }),
    }
}

/// Every seat from the dealer onward plays its front card once.
///
/// Folded seats and empty hands are skipped. The strictly highest value leads,
/// so ties stay with the seat that acted first. Returns `None` when nobody
/// played.
pub fn play_cards<S: DrawSource>(
    table: &mut Table,
    source: &mut S,
    trump: Suit,
    follow_suit: FollowSuit,
    events: &mut Vec<GameEvent>,
) -> Option<Leader> {
    let dealer = table.dealer;
    let mut dealer_card = None;
    let mut leader: Option<Leader> = None;

    for offset in 0..NUM_PLAYERS {
        let seat = seat_after(dealer, offset);
        if table.players[seat].is_folded() {
            continue;
        }
        let Some(card) = table.players[seat].play_front() else {
            continue;
        };

        table.record_play(seat, card);
        if seat == dealer {
            dealer_card = Some(card);
        }

        if let Some(effect) = activate(table, source, seat, card) {
            log::debug!("seat {seat} activates {effect:?}");
            events.push(GameEvent::SpecialActivated { seat, effect });
        }

        let follow = match follow_suit {
            FollowSuit::Carryover => table.last_played(dealer),
            FollowSuit::AfterDealerPlays => dealer_card,
        };
        let value = card_value(card, trump, follow.map(|c| c.suit));
        log::debug!("seat {seat} plays {card:?} for {value}");
        events.push(GameEvent::CardPlayed { seat, card, value });

        if leader.is_none_or(|best| value > best.value) {
            leader = Some(Leader { seat, value });
        }
    }

    leader
}

/// Pays the pot to the leader, or to the dealer if nobody played.
///
/// Returns the winning seat and the payout.
pub fn resolve(
    table: &mut Table,
    round: usize,
    leader: Option<Leader>,
    events: &mut Vec<GameEvent>,
) -> (Seat, Chips) {
    let seat = leader.map_or(table.dealer, |l| l.seat);
    let payout = table.award_pot(seat);
    log::info!("round {} won by seat {seat} for {payout} chips", round + 1);
    events.push(GameEvent::RoundWon {
        round,
        seat,
        payout,
    });
    (seat, payout)
}

/// Clears folds and passes the deal to the round winner.
pub fn cleanup(table: &mut Table, winner: Seat) {
    table.reset_folds();
    table.dealer = winner;
}
