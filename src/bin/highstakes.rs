//! Runs one tournament and prints the transcript.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use highstakes::{FollowSuit, Game, HAND_SIZE, NUM_PLAYERS, TableOptions};

#[derive(Parser)]
#[command(name = "highstakes")]
#[command(about = "Seeded four-seat card game with betting and special cards")]
struct Args {
    /// Seed for the draw stream
    #[arg(long, default_value_t = highstakes::rng::DEFAULT_SEED)]
    seed: u32,

    /// Maximum number of rounds
    #[arg(long, default_value_t = 5)]
    rounds: usize,

    /// Which dealer card the follow-suit bonus compares against
    #[arg(long, value_enum, default_value_t = FollowSuitArg::Carryover)]
    follow_suit: FollowSuitArg,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FollowSuitArg {
    /// Compare against the dealer's last played card, even from an earlier round
    Carryover,
    /// Compare only once the dealer has played this round
    AfterDealer,
}

impl From<FollowSuitArg> for FollowSuit {
    fn from(arg: FollowSuitArg) -> Self {
        match arg {
            FollowSuitArg::Carryover => Self::Carryover,
            FollowSuitArg::AfterDealer => Self::AfterDealerPlays,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let options = TableOptions::default()
        .with_seed(args.seed)
        .with_rounds(args.rounds)
        .with_follow_suit(args.follow_suit.into());
    let rounds = options.rounds;

    let game = match Game::new(options) {
        Ok(game) => game,
        Err(err) => {
            log::error!("invalid options: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("\n=== HIGH STAKES CARD GAME ===");
    println!("{NUM_PLAYERS} players, {HAND_SIZE} cards each, {rounds} rounds");
    println!("Special cards: 2x=Double, SW=Swap, SF=See Future\n");

    if let Err(err) = game.run() {
        log::error!("tournament failed: {err}");
        return ExitCode::FAILURE;
    }

    for event in game.take_transcript() {
        println!("{event}");
    }

    ExitCode::SUCCESS
}
