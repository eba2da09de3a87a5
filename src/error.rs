//! Error types for game operations.
//!
//! Only misuse of the driver is an error. Rule anomalies such as everyone
//! folding or an empty hand are ordinary game states.

use thiserror::Error;

/// Errors from validating [`TableOptions`](crate::TableOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The tournament must allow at least one round.
    #[error("round count is zero")]
    ZeroRounds,
    /// The small blind must be positive.
    #[error("small blind must be positive")]
    NonPositiveBlind,
    /// The raise step must be positive.
    #[error("raise step must be positive")]
    NonPositiveRaiseStep,
    /// Players must start with chips.
    #[error("starting chips must be positive")]
    NonPositiveStartingChips,
}

/// Errors that can occur during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The table has already been set up.
    #[error("invalid game state for setup")]
    InvalidState,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Cards have not been dealt or the tournament is over.
    #[error("invalid game state for a round")]
    InvalidState,
}

/// Errors that can occur when ending the tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// Cards have not been dealt, a round is in progress, or the tournament
    /// has already finished.
    #[error("invalid game state for finishing")]
    InvalidState,
}

/// Any error from running a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid options.
    #[error(transparent)]
    Options(#[from] OptionsError),
    /// Setup failed.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// A round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// Finishing failed.
    #[error(transparent)]
    Finish(#[from] FinishError),
}
