//! Per-seat player state.

use alloc::vec::Vec;

use crate::card::Card;

/// Maximum number of cards a hand holds.
pub const HAND_SIZE: usize = 5;

/// Chip amounts. Signed because a raise may overdraw a stack.
pub type Chips = i64;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Cards in deal order; the front card is played first.
    hand: Vec<Card>,
    /// Chip balance.
    chips: Chips,
    /// Whether the player has folded this round.
    folded: bool,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(chips: Chips) -> Self {
        Self {
            hand: Vec::new(),
            chips,
            folded: false,
        }
    }

    /// Appends a card to the back of the hand.
    ///
    /// Returns `false` and leaves the hand untouched if it is already full.
    pub fn receive(&mut self, card: Card) -> bool {
        if self.hand.len() >= HAND_SIZE {
            return false;
        }
        self.hand.push(card);
        true
    }

    /// Removes and returns the front card, or `None` for an empty hand.
    pub fn play_front(&mut self) -> Option<Card> {
        if self.hand.is_empty() {
            None
        } else {
            Some(self.hand.remove(0))
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Exchanges hands with another player.
    pub const fn swap_hand(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.hand, &mut other.hand);
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> Chips {
        self.chips
    }

    /// Takes `amount` chips from the stack.
    pub const fn debit(&mut self, amount: Chips) {
        self.chips -= amount;
    }

    /// Adds `amount` chips to the stack.
    pub const fn credit(&mut self, amount: Chips) {
        self.chips += amount;
    }

    /// Returns whether the player has folded.
    #[must_use]
    pub const fn is_folded(&self) -> bool {
        self.folded
    }

    /// Folds for the current round.
    pub const fn fold(&mut self) {
        self.folded = true;
    }

    /// Clears the folded flag.
    pub const fn unfold(&mut self) {
        self.folded = false;
    }
}
