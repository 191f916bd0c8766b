//! Player ship state.
//!
//! The ship lives on a fixed depth plane; only its lateral position is
//! free. Vertical position is derived from the bob oscillator each tick,
//! never stored as independent state.

use gridfire_core::constants::*;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    /// Lateral velocity.
    pub vx: f64,
    pub bob_phase: f64,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            vx: 0.0,
            bob_phase: 0.0,
            fire_cooldown: 0,
        }
    }

    /// Vertical position, derived from the bob phase.
    pub fn y(&self) -> f64 {
        PLAYER_BASE_Y + self.bob_phase.sin() * PLAYER_BOB_AMPLITUDE
    }

    /// The player's fixed depth plane.
    pub fn z(&self) -> f64 {
        PLAYER_Z
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
