//! The single betting pass that opens every round.

use alloc::vec::Vec;

use crate::events::{BetAction, GameEvent};
use crate::options::TableOptions;
use crate::rng::DrawSource;
use crate::table::{NUM_PLAYERS, Table, seat_after};

/// Runs one betting pass, starting at the dealer and visiting each seat once.
///
/// The current bet opens at the small blind. A player whose stack does not
/// exceed the current bet folds without a draw; everyone else draws
/// `next mod 3` (fold, call, raise). A raise lifts the current bet by the raise
/// step and the raiser pays the new bet in full. Players who already folded
/// are skipped.
pub fn run<S: DrawSource>(
    table: &mut Table,
    source: &mut S,
    options: &TableOptions,
    events: &mut Vec<GameEvent>,
) {
    table.current_bet = options.small_blind;

    for offset in 0..NUM_PLAYERS {
        let seat = seat_after(table.dealer, offset);
        let player = &mut table.players[seat];
        if player.is_folded() {
            continue;
        }

        let action = if player.chips() <= table.current_bet {
            BetAction::Fold { forced: true }
        } else {
            match source.next_draw() % 3 {
                0 => BetAction::Fold { forced: false },
                1 => BetAction::Call {
                    amount: table.current_bet,
                },
                _ => BetAction::Raise {
                    to: table.current_bet + options.raise_step,
                },
            }
        };

        match action {
            BetAction::Fold { .. } => player.fold(),
            BetAction::Call { amount } => {
                player.debit(amount);
                table.pot += amount;
            }
            BetAction::Raise { to } => {
                table.current_bet = to;
                player.debit(to);
                table.pot += to;
            }
        }

        log::debug!("seat {seat} bets {action:?}, pot {}", table.pot);
        events.push(GameEvent::Bet { seat, action });
    }
}
