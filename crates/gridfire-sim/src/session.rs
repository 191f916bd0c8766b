//! Session state: score, health, combo, speed, and timers.
//!
//! Mutated only by the tick function and its direct synchronous callees —
//! single writer per tick, no locking.

use gridfire_core::config::GameConfig;
use gridfire_core::constants::*;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub score: u64,
    pub health: u32,
    /// Speed baseline; bumped at each wave transition.
    pub base_speed: f64,
    /// Effective world scroll speed this tick.
    pub speed: f64,
    pub combo: u32,
    /// Ticks left before the combo decays.
    pub combo_timer: u32,
    pub multiplier: u32,
    /// Highest combo milestone already rewarded this streak.
    pub last_milestone: u32,
    /// Ticks of remaining post-hit immunity.
    pub invincibility_timer: u32,
    /// Set at game over when the final score beat the stored high score.
    pub new_high_score: bool,
}

impl SessionState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            health: config.starting_health,
            base_speed: config.base_speed,
            speed: config.base_speed,
            combo: 0,
            combo_timer: 0,
            multiplier: 1,
            last_milestone: 0,
            invincibility_timer: 0,
            new_high_score: false,
        }
    }
}

/// Combo multiplier tier table.
pub fn multiplier_for(combo: u32) -> u32 {
    if combo < 5 {
        1
    } else if combo < 10 {
        2
    } else if combo < 20 {
        3
    } else if combo < 50 {
        4
    } else {
        5
    }
}

/// Whether `combo` sits on a milestone not yet rewarded this streak.
pub fn milestone_due(combo: u32, last_milestone: u32) -> bool {
    combo > 0 && combo % COMBO_MILESTONE_INTERVAL == 0 && combo > last_milestone
}
