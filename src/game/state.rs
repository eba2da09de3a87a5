//! Game phase types.

/// Where the driver is in the tournament.
///
/// A round walks `Betting`, `TrumpSelection`, `Play`, `Resolution` and
/// `Cleanup`, then returns to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing dealt yet.
    WaitingForSetup,
    /// Cards dealt, dealer known; a round may start.
    Ready,
    /// Betting pass in progress.
    Betting,
    /// Drawing the trump suit.
    TrumpSelection,
    /// Seats are playing cards.
    Play,
    /// Paying the pot to the winner.
    Resolution,
    /// Clearing folds for the next round.
    Cleanup,
    /// The tournament is over.
    Finished,
}
