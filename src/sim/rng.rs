//! Seeded random source
//!
//! One generator per run. Seeds come from config or the wall clock, so runs
//! differ by default but a fixed seed reproduces a scene exactly.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::lerp;

#[derive(Debug, Clone)]
pub struct Random {
    seed: u64,
    rng: Pcg32,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the current time
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in [0, 1)
    pub fn next_float(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform in [lo, hi)
    pub fn next_float_range(&mut self, lo: f32, hi: f32) -> f32 {
        lerp(lo, hi, self.next_float())
    }

    /// Uniform in [lo, hi], bounds may be given in either order
    pub fn next_int_range(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.random_range(lo..=hi)
    }
}

/// Seed derived from wall-clock nanoseconds
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
