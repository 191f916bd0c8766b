//! Per-tick steering evaluation for enemies.

use gridfire_core::constants::*;
use gridfire_core::enums::EnemyKind;

use crate::profiles::get_profile;

/// Input to the steering function for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct SteerContext {
    pub kind: EnemyKind,
    pub x: f64,
    pub z: f64,
    /// Lateral position at spawn time; fixes the sweeper drift direction.
    pub start_x: f64,
    /// The player's current lateral position (weaver tracking target).
    pub player_x: f64,
    /// Global world scroll speed this tick.
    pub global_speed: f64,
    /// Sweepers use the faster lateral drift at higher difficulty.
    pub fast_drift: bool,
    /// Global sinusoidal jitter term, zero below the score threshold.
    pub jitter: f64,
}

/// Output of the steering function: the enemy's next position.
#[derive(Debug, Clone, Copy)]
pub struct Steering {
    pub x: f64,
    pub z: f64,
}

/// Evaluate one tick of movement for an enemy.
///
/// The weaver's lateral update is a first-order low-pass tracking filter,
/// not true seeking: it approaches the player's x asymptotically and may
/// never exactly reach it. The Z despawn threshold bounds its lifetime.
pub fn steer(ctx: &SteerContext) -> Steering {
    let profile = get_profile(ctx.kind, ctx.fast_drift);

    let x = match ctx.kind {
        EnemyKind::Diver => ctx.x,
        EnemyKind::Weaver => ctx.x + (ctx.player_x - ctx.x) * WEAVER_TRACK_RATE,
        EnemyKind::Sweeper => {
            // Spawned left of center drifts right, and vice versa.
            if ctx.start_x < 0.0 {
                ctx.x + profile.drift
            } else {
                ctx.x - profile.drift
            }
        }
    };

    Steering {
        x: x + ctx.jitter,
        z: ctx.z - (ctx.global_speed + profile.forward_speed),
    }
}

/// The global lateral jitter term for a tick, applied to every enemy once
/// the score threshold is reached.
pub fn global_jitter(tick: u64, score: u64) -> f64 {
    if score < JITTER_SCORE_THRESHOLD {
        0.0
    } else {
        (tick as f64 * JITTER_FREQUENCY).sin() * JITTER_AMPLITUDE
    }
}
