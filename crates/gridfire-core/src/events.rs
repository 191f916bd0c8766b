//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Audio cues for the frontend sound system.
///
/// Fired synchronously the tick the condition is detected and drained into
/// that tick's snapshot. The presentation layer must not block on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioCue {
    /// Player fired a projectile.
    Shoot,
    /// Projectile destroyed an enemy.
    EnemyHit,
    /// Player took a hit.
    ShipCrash,
    /// Combo multiplier tier rose.
    Combo { combo: u32 },
    /// A new wave began spawning.
    WaveStart { wave_number: u32 },
    /// The active wave was cleared.
    WaveComplete { wave_number: u32 },
    /// Countdown tick during the inter-wave delay.
    WaveCountdown,
    /// Milestone granted a health point.
    LifeGain,
}
