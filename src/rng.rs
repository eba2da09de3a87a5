//! Seeded draw streams.
//!
//! Every random decision in the game (shuffle swaps, dealer choice, betting
//! decisions, trump and peeked suits) consumes one value from a
//! [`DrawSource`]. Callers reduce the value with `%` for ranged draws, so a
//! given seed always replays the same game.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Multiplier of the linear congruential recurrence.
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;
/// Increment of the linear congruential recurrence.
pub const LCG_INCREMENT: u32 = 12_345;
/// Seed used when none is supplied.
pub const DEFAULT_SEED: u32 = 123_456;

const MASK_31: u32 = 0x7FFF_FFFF;

/// A stream of pseudo-random non-negative integers.
pub trait DrawSource {
    /// Advances the stream and returns the next value.
    fn next_draw(&mut self) -> u32;
}

impl<S: DrawSource + ?Sized> DrawSource for &mut S {
    fn next_draw(&mut self) -> u32 {
        (**self).next_draw()
    }
}

/// Linear congruential generator: `seed = (A * seed + C) mod 2^31`.
///
/// Not suitable for anything where fairness matters beyond a toy game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    /// Creates a generator from a seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Current state of the generator.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DrawSource for Lcg {
    fn next_draw(&mut self) -> u32 {
        // 2^31 divides 2^32, so wrapping u32 arithmetic then masking is exact.
        self.seed = LCG_MULTIPLIER
            .wrapping_mul(self.seed)
            .wrapping_add(LCG_INCREMENT)
            & MASK_31;
        self.seed
    }
}

/// Adapts any [`rand`] generator into a [`DrawSource`] producing 31-bit values.
#[derive(Debug, Clone)]
pub struct EntropySource<R> {
    inner: R,
}

impl<R: RngCore> EntropySource<R> {
    /// Wraps a generator.
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl EntropySource<ChaCha8Rng> {
    /// Creates a `ChaCha8` backed source from a seed.
    #[must_use]
    pub fn chacha(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> DrawSource for EntropySource<R> {
    fn next_draw(&mut self) -> u32 {
        self.inner.next_u32() & MASK_31
    }
}
