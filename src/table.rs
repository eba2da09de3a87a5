//! The shared table: deck, seats, pot and dealer.

use crate::card::Card;
use crate::deck::Deck;
use crate::player::{Chips, HAND_SIZE, Player};

/// Number of seats at the table.
pub const NUM_PLAYERS: usize = 4;

/// A seat index in `0..NUM_PLAYERS`.
pub type Seat = usize;

/// Returns the seat `offset` places after `from`, wrapping around the table.
#[must_use]
pub const fn seat_after(from: Seat, offset: usize) -> Seat {
    (from + offset) % NUM_PLAYERS
}

/// Everything that changes over a tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Undealt cards.
    pub deck: Deck,
    /// Seated players, indexed by seat.
    pub players: [Player; NUM_PLAYERS],
    /// Chips waiting for the round winner.
    pub pot: Chips,
    /// Bet a player must call in the current pass.
    pub current_bet: Chips,
    /// Current dealer.
    pub dealer: Seat,
    /// Last card each seat played, kept across rounds.
    last_played: [Option<Card>; NUM_PLAYERS],
}

impl Table {
    /// Fresh table: unshuffled deck, empty hands, full stacks, empty pot.
    #[must_use]
    pub fn new(starting_chips: Chips) -> Self {
        Self {
            deck: Deck::build(),
            players: core::array::from_fn(|_| Player::new(starting_chips)),
            pot: 0,
            current_bet: 0,
            dealer: 0,
            last_played: [None; NUM_PLAYERS],
        }
    }

    /// Deals a full hand to every seat. Returns the number of cards dealt.
    pub fn deal(&mut self) -> usize {
        self.deck.deal(&mut self.players, HAND_SIZE)
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Exchanges the hands of `seat` and the next seat index.
    ///
    /// Returns the seat swapped with, or `None` at the last seat.
    pub fn swap_hands(&mut self, seat: Seat) -> Option<Seat> {
        let next = seat + 1;
        if next >= NUM_PLAYERS {
            return None;
        }
        let (left, right) = self.players.split_at_mut(next);
        left[seat].swap_hand(&mut right[0]);
        Some(next)
    }

    /// Records the card a seat just played.
    pub const fn record_play(&mut self, seat: Seat, card: Card) {
        self.last_played[seat] = Some(card);
    }

    /// The last card `seat` played in any round.
    #[must_use]
    pub const fn last_played(&self, seat: Seat) -> Option<Card> {
        self.last_played[seat]
    }

    /// Pays the whole pot to `seat` and zeroes the pot and current bet.
    ///
    /// Returns the payout.
    pub const fn award_pot(&mut self, seat: Seat) -> Chips {
        let payout = self.pot;
        self.players[seat].credit(payout);
        self.pot = 0;
        self.current_bet = 0;
        payout
    }

    /// Clears every folded flag.
    pub fn reset_folds(&mut self) {
        for player in &mut self.players {
            player.unfold();
        }
    }

    /// Number of players still holding chips.
    #[must_use]
    pub fn solvent_players(&self) -> usize {
        self.players.iter().filter(|p| p.chips() > 0).count()
    }

    /// Chip counts by seat.
    #[must_use]
    pub fn chip_counts(&self) -> [Chips; NUM_PLAYERS] {
        core::array::from_fn(|seat| self.players[seat].chips())
    }

    /// Total chips on the table, stacks plus pot.
    #[must_use]
    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(Player::chips).sum::<Chips>() + self.pot
    }
}
