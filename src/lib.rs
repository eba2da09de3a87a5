//! A seeded four-seat trick-taking card game with betting, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that deals once and then runs up to five
//! rounds of betting, trump selection and card play, including the special
//! abilities of Aces, Kings and Queens. Every random decision comes from a
//! [`DrawSource`], so a seed replays the same tournament, and every step is
//! recorded as a [`GameEvent`].
//!
//! # Example
//!
//! ```
//! use highstakes::{Game, TableOptions};
//!
//! let game = Game::new(TableOptions::default()).unwrap();
//! let standings = game.run().unwrap();
//! for event in game.transcript() {
//!     println!("{event}");
//! }
//! println!("{standings}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod options;
pub mod player;
mod render;
pub mod rng;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Special, Suit};
pub use deck::Deck;
pub use error::{FinishError, GameError, OptionsError, RoundError, SetupError};
pub use events::{BetAction, GameEvent, RoundOutcome, SpecialEffect, Standings};
pub use game::{Game, Phase, run_game};
pub use options::{FollowSuit, TableOptions};
pub use player::{Chips, HAND_SIZE, Player};
pub use rng::{DrawSource, EntropySource, Lcg};
pub use table::{NUM_PLAYERS, Seat, Table};
