//! Wave timeline construction for the GRIDFIRE simulation.
//!
//! A wave is a spawn timeline: entries with exact-tick delays, depths, and
//! lateral positions. The first few waves come from an authored table; past
//! the table the generator scales counts and compresses spacing with the
//! wave index. All randomness flows through the caller's seeded RNG, so a
//! seed fully determines every wave of a session.

pub mod procgen;
pub mod script;
pub mod table;

use rand_chacha::ChaCha8Rng;

use gridfire_core::constants::STATIC_WAVE_COUNT;

use crate::script::WaveScript;

/// Build the spawn timeline for a wave index.
pub fn build_wave(index: u32, rng: &mut ChaCha8Rng) -> WaveScript {
    if index < STATIC_WAVE_COUNT {
        table::authored_wave(index, rng)
    } else {
        procgen::generated_wave(index, rng)
    }
}

#[cfg(test)]
mod tests;
