//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::player::Player;
use crate::rng::DrawSource;

/// An ordered pile of cards. Index 0 is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52 cards in suit-major, rank-minor order.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck with the given cards on top first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Fisher-Yates from the last index down to 1, drawing `j = next mod (i + 1)`.
    pub fn shuffle<S: DrawSource>(&mut self, source: &mut S) {
        for i in (1..self.cards.len()).rev() {
            let j = source.next_draw() as usize % (i + 1);
            self.cards.swap(i, j);
        }
        log::trace!("shuffled {} cards", self.cards.len());
    }

    /// Deals `per_player` passes round-robin from seat 0, one card per seat per
    /// pass. Dealing stops once the deck runs dry; full hands are skipped.
    ///
    /// Returns the number of cards dealt.
    pub fn deal(&mut self, players: &mut [Player], per_player: usize) -> usize {
        let mut next = 0;
        'passes: for _ in 0..per_player {
            for player in players.iter_mut() {
                let Some(&card) = self.cards.get(next) else {
                    break 'passes;
                };
                if player.receive(card) {
                    next += 1;
                }
            }
        }
        self.cards.drain(..next);
        log::trace!("dealt {next} cards, {} left in deck", self.cards.len());
        next
    }

    /// Returns the cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
