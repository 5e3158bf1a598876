//! Deterministic random rolls.
//!
//! Random movement must replay identically for a given game seed, so rolls are
//! a pure function of a seed derived from (game seed, tick, entity) instead of
//! a stateful generator.

use crate::state::{EntityId, Tick};

/// Source of deterministic random numbers.
///
/// Implementations must return the same value for the same seed.
pub trait RngOracle {
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes the game seed with the tick and the rolling entity so that every
/// enemy gets an independent roll each tick.
pub fn compute_seed(game_seed: u64, tick: Tick, entity: EntityId) -> u64 {
    let mut hash = game_seed;
    hash ^= tick.0.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(entity.0).wrapping_mul(0x517cc1b727220a95);

    // SplitMix64-style finaliser
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
