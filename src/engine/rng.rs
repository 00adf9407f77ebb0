//! Injectable random source.
//!
//! Every spawn roll, drop chance and launch angle goes through a
//! `GameRng` owned by the loop, so a fixed seed replays a run exactly.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

pub type GameRng = Pcg32;

pub fn seeded(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Seed derived from the wall clock, used when no seed is configured.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

/// Seed from configuration, falling back to the clock. Returns the seed
/// too so it can be logged for replay.
pub fn from_config(seed: Option<u64>) -> (GameRng, u64) {
    let seed = seed.unwrap_or_else(time_seed);
    (seeded(seed), seed)
}
