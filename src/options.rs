//! Table configuration options.

use core::time::Duration;

use crate::error::OptionsError;
use crate::player::Chips;
use crate::rng::DEFAULT_SEED;

/// Which card the follow-suit bonus compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum FollowSuit {
    /// Compare against the last card the dealer's seat played, even if that
    /// was in an earlier round. Before the seat has ever played, no bonus.
    #[default]
    Carryover,
    /// Compare only against a card the dealer played in the current round.
    AfterDealerPlays,
}

/// Configuration options for a tournament.
///
/// Seat count, hand size and deck size are fixed. Use the builder methods to
/// customize the rest:
///
/// ```
/// use highstakes::TableOptions;
///
/// let options = TableOptions::default()
///     .with_rounds(3)
///     .with_seed(7);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Maximum number of rounds.
    pub rounds: usize,
    /// Chips each player starts with.
    pub starting_chips: Chips,
    /// Opening bet every betting pass starts from.
    pub small_blind: Chips,
    /// Amount a raise adds to the current bet.
    pub raise_step: Chips,
    /// Seed for the default generator.
    pub seed: u32,
    /// Follow-suit reference rule.
    pub follow_suit: FollowSuit,
    /// Delay between rounds. Only honored with the `std` feature.
    pub pacing: Option<Duration>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            rounds: 5,
            starting_chips: 100,
            small_blind: 10,
            raise_step: 10,
            seed: DEFAULT_SEED,
            follow_suit: FollowSuit::Carryover,
            pacing: None,
        }
    }
}

impl TableOptions {
    /// Sets the maximum number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use highstakes::TableOptions;
    ///
    /// let options = TableOptions::default().with_rounds(3);
    /// assert_eq!(options.rounds, 3);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the starting chip stack.
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: Chips) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the small blind.
    #[must_use]
    pub const fn with_small_blind(mut self, blind: Chips) -> Self {
        self.small_blind = blind;
        self
    }

    /// Sets the raise increment.
    #[must_use]
    pub const fn with_raise_step(mut self, step: Chips) -> Self {
        self.raise_step = step;
        self
    }

    /// Sets the generator seed.
    ///
    /// # Example
    ///
    /// ```
    /// use highstakes::TableOptions;
    ///
    /// let options = TableOptions::default().with_seed(99);
    /// assert_eq!(options.seed, 99);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the follow-suit reference rule.
    ///
    /// # Example
    ///
    /// ```
    /// use highstakes::{FollowSuit, TableOptions};
    ///
    /// let options = TableOptions::default().with_follow_suit(FollowSuit::AfterDealerPlays);
    /// assert_eq!(options.follow_suit, FollowSuit::AfterDealerPlays);
    /// ```
    #[must_use]
    pub const fn with_follow_suit(mut self, follow_suit: FollowSuit) -> Self {
        self.follow_suit = follow_suit;
        self
    }

    /// Sets a delay between rounds.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Checks the options for values the game cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error for zero rounds or a non-positive blind, raise step or
    /// starting stack.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.rounds == 0 {
            return Err(OptionsError::ZeroRounds);
        }
        if self.small_blind <= 0 {
            return Err(OptionsError::NonPositiveBlind);
        }
        if self.raise_step <= 0 {
            return Err(OptionsError::NonPositiveRaiseStep);
        }
        if self.starting_chips <= 0 {
            return Err(OptionsError::NonPositiveStartingChips);
        }
        Ok(())
    }
}
