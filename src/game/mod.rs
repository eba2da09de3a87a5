//! Tournament driver and round engine.

use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::error::{FinishError, GameError, OptionsError, RoundError, SetupError};
use crate::events::{GameEvent, RoundOutcome, Standings};
use crate::options::TableOptions;
use crate::player::{Chips, Player};
use crate::rng::{DrawSource, Lcg};
use crate::table::{NUM_PLAYERS, Seat, Table};

pub mod betting;
pub mod round;
pub mod state;

pub use state::Phase;

/// A four-seat tournament: one deal, then up to `rounds` betting-and-play
/// rounds with the deal passing to each round's winner.
///
/// The game owns the table, the draw stream and the transcript. Every random
/// decision comes from the stream, so a seed replays the same tournament.
pub struct Game<S = Lcg> {
    /// Game options.
    pub options: TableOptions,
    /// Deck, seats, pot and dealer.
    pub table: Mutex<Table>,
    /// Current phase.
    phase: Mutex<Phase>,
    /// Draw stream.
    source: Mutex<S>,
    /// Events in the order they happened.
    transcript: Mutex<Vec<GameEvent>>,
    /// Rounds completed so far.
    rounds_played: AtomicUsize,
}

impl Game<Lcg> {
    /// Creates a game driven by the linear congruential stream seeded from
    /// `options.seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use highstakes::{Game, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default()).unwrap();
    /// let standings = game.run().unwrap();
    /// assert!(standings.rounds_played <= 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not validate.
    pub fn new(options: TableOptions) -> Result<Self, OptionsError> {
        let source = Lcg::new(options.seed);
        Self::with_source(options, source)
    }
}

impl<S: DrawSource> Game<S> {
    /// Creates a game driven by any draw stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not validate.
    pub fn with_source(options: TableOptions, source: S) -> Result<Self, OptionsError> {
        options.validate()?;
        let table = Table::new(options.starting_chips);

        Ok(Self {
            options,
            table: Mutex::new(table),
            phase: Mutex::new(Phase::WaitingForSetup),
            source: Mutex::new(source),
            transcript: Mutex::new(Vec::new()),
            rounds_played: AtomicUsize::new(0),
        })
    }

    /// Resets the table, shuffles, deals five cards to each seat and draws the
    /// first dealer.
    ///
    /// Shuffle and deal run while holding both the table and the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been set up.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn setup(&self) -> Result<(), SetupError> {
        let mut phase = self.phase.lock();
        if *phase != Phase::WaitingForSetup {
            return Err(SetupError::InvalidState);
        }

        let mut events = Vec::new();
        {
            let mut table = self.table.lock();
            let mut source = self.source.lock();

            *table = Table::new(self.options.starting_chips);
            table.deck.shuffle(&mut *source);
            let dealt = table.deal();

            for (seat, player) in table.players.iter().enumerate() {
                events.push(GameEvent::HandDealt {
                    seat,
                    cards: player.hand().to_vec(),
                    chips: player.chips(),
                });
            }

            let dealer = source.next_draw() as usize % NUM_PLAYERS;
            table.dealer = dealer;
            events.push(GameEvent::DealerChosen { seat: dealer });
            log::info!("dealt {dealt} cards, seat {dealer} deals first");
        }

        *phase = Phase::Ready;
        drop(phase);
        self.transcript.lock().extend(events);
        Ok(())
    }

    /// Plays the next round: betting, trump, card play, payout and cleanup.
    ///
    /// The phase stays locked for the whole round, so concurrent callers run
    /// rounds one after another.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have not been dealt or the tournament is
    /// over.
    pub fn play_round(&self) -> Result<RoundOutcome, RoundError> {
        let mut phase = self.phase.lock();
        if *phase != Phase::Ready {
            return Err(RoundError::InvalidState);
        }

        let round = self.rounds_played();
        let mut events = Vec::new();
        let mut table = self.table.lock();
        let mut source = self.source.lock();

        *phase = Phase::Betting;
        events.push(GameEvent::BettingOpened {
            round,
            small_blind: self.options.small_blind,
        });
        betting::run(&mut table, &mut *source, &self.options, &mut events);

        *phase = Phase::TrumpSelection;
        let trump = round::draw_trump(&mut *source);
        log::debug!("round {} trump {trump:?}, pot {}", round + 1, table.pot);
        events.push(GameEvent::TrumpDrawn {
            round,
            suit: trump,
            pot: table.pot,
        });

        *phase = Phase::Play;
        let leader = round::play_cards(
            &mut table,
            &mut *source,
            trump,
            self.options.follow_suit,
            &mut events,
        );

        *phase = Phase::Resolution;
        let (winner, payout) = round::resolve(&mut table, round, leader, &mut events);

        *phase = Phase::Cleanup;
        round::cleanup(&mut table, winner);
        drop(source);
        drop(table);

        self.rounds_played.fetch_add(1, Ordering::SeqCst);
        self.transcript.lock().extend(events);
        *phase = Phase::Ready;
        drop(phase);

        Ok(RoundOutcome {
            round,
            trump,
            winner,
            winning_value: leader.map(|l| l.value),
            payout,
        })
    }

    /// Ends the tournament and ranks the stacks.
    ///
    /// # Errors
    ///
    /// Returns an error unless the cards have been dealt and no round is in
    /// progress, or if the tournament has already finished.
    pub fn finish(&self) -> Result<Standings, FinishError> {
        let mut phase = self.phase.lock();
        if *phase != Phase::Ready {
            return Err(FinishError::InvalidState);
        }

        let chips = self.table.lock().chip_counts();
        let standings = Standings::from_chips(chips, self.rounds_played());
        log::info!(
            "tournament over after {} rounds, seat {} wins",
            standings.rounds_played,
            standings.winner
        );
        self.transcript
            .lock()
            .push(GameEvent::TournamentOver { standings });
        *phase = Phase::Finished;
        drop(phase);
        Ok(standings)
    }

    /// Runs a whole tournament: setup, up to `options.rounds` rounds, stopping
    /// early once fewer than two players hold chips, then the standings.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already set up.
    pub fn run(&self) -> Result<Standings, GameError> {
        self.setup()?;

        for _ in 0..self.options.rounds {
            self.play_round()?;
            self.pace();
            let solvent = self.table.lock().solvent_players();
            if solvent < 2 {
                log::info!("fewer than two players hold chips, stopping early");
                break;
            }
        }

        Ok(self.finish()?)
    }

    #[cfg(feature = "std")]
    fn pace(&self) {
        if let Some(delay) = self.options.pacing {
            std::thread::sleep(delay);
        }
    }

    #[cfg(not(feature = "std"))]
    fn pace(&self) {}

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.lock()
    }

    /// Returns the number of completed rounds.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played.load(Ordering::SeqCst)
    }

    /// Returns the current dealer.
    pub fn dealer(&self) -> Seat {
        self.table.lock().dealer
    }

    /// Returns the chips held by `seat`.
    pub fn chips(&self, seat: Seat) -> Option<Chips> {
        self.table.lock().player(seat).map(Player::chips)
    }

    /// Returns a copy of the transcript.
    pub fn transcript(&self) -> Vec<GameEvent> {
        self.transcript.lock().clone()
    }

    /// Drains the transcript.
    pub fn take_transcript(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.transcript.lock())
    }
}

/// Runs one tournament with default options.
///
/// # Errors
///
/// Never fails with the default options; the error type is shared with
/// [`Game::run`].
pub fn run_game() -> Result<Standings, GameError> {
    Game::new(TableOptions::default())?.run()
}
