//! Structured records of everything that happens at the table.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::player::Chips;
use crate::table::{NUM_PLAYERS, Seat};

/// What a player did in the betting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetAction {
    /// Withdrew from the round. `forced` when the stack could not beat the bet.
    Fold {
        /// Whether the fold was forced by the stack size.
        forced: bool,
    },
    /// Paid the current bet.
    Call {
        /// Chips paid.
        amount: Chips,
    },
    /// Raised the current bet and paid the new amount.
    Raise {
        /// The new current bet, which is also the amount paid.
        to: Chips,
    },
}

impl BetAction {
    /// Chips moved into the pot by this action.
    #[must_use]
    pub const fn paid(&self) -> Chips {
        match *self {
            Self::Fold { .. } => 0,
            Self::Call { amount } => amount,
            Self::Raise { to } => to,
        }
    }
}

/// A special ability as it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialEffect {
    /// The played card's value is doubled.
    DoublePoints,
    /// Hands were exchanged with `with`; `None` at the last seat.
    SwapHands {
        /// Seat whose hand was taken, if any.
        with: Option<Seat>,
    },
    /// A suit was revealed from the stream.
    SeeFuture {
        /// The revealed suit.
        suit: Suit,
    },
}

/// A single entry of the game transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A seat's opening hand after the deal.
    HandDealt {
        /// Seat.
        seat: Seat,
        /// Cards in play order.
        cards: Vec<Card>,
        /// Chips at the time of the deal.
        chips: Chips,
    },
    /// The first dealer was drawn.
    DealerChosen {
        /// Dealer seat.
        seat: Seat,
    },
    /// A betting pass opened.
    BettingOpened {
        /// Zero-based round number.
        round: usize,
        /// Opening bet.
        small_blind: Chips,
    },
    /// A player acted in the betting pass.
    Bet {
        /// Seat.
        seat: Seat,
        /// Decision.
        action: BetAction,
    },
    /// Trump for the round was drawn.
    TrumpDrawn {
        /// Zero-based round number.
        round: usize,
        /// Trump suit.
        suit: Suit,
        /// Pot after betting.
        pot: Chips,
    },
    /// A played card's ability resolved.
    SpecialActivated {
        /// Seat that played the card.
        seat: Seat,
        /// What happened.
        effect: SpecialEffect,
    },
    /// A card was played and scored.
    CardPlayed {
        /// Seat.
        seat: Seat,
        /// The card.
        card: Card,
        /// Computed value after bonuses and doubling.
        value: u32,
    },
    /// The round was won and the pot paid out.
    RoundWon {
        /// Zero-based round number.
        round: usize,
        /// Winning seat.
        seat: Seat,
        /// Chips awarded.
        payout: Chips,
    },
    /// The tournament ended.
    TournamentOver {
        /// Final standings.
        standings: Standings,
    },
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Zero-based round number.
    pub round: usize,
    /// Trump suit of the round.
    pub trump: Suit,
    /// Winning seat, which deals next.
    pub winner: Seat,
    /// Winning card value, `None` when nobody played.
    pub winning_value: Option<u32>,
    /// Chips awarded to the winner.
    pub payout: Chips,
}

/// Final chip counts and the tournament winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standings {
    /// Chips per seat.
    pub chips: [Chips; NUM_PLAYERS],
    /// Seat with the strictly greatest stack, lowest index on ties.
    pub winner: Seat,
    /// Rounds actually played.
    pub rounds_played: usize,
}

impl Standings {
    /// Ranks final stacks: the first seat holding the maximum wins.
    #[must_use]
    pub fn from_chips(chips: [Chips; NUM_PLAYERS], rounds_played: usize) -> Self {
        let mut winner = 0;
        for (seat, &stack) in chips.iter().enumerate() {
            if stack > chips[winner] {
                winner = seat;
            }
        }
        Self {
            chips,
            winner,
            rounds_played,
        }
    }
}
