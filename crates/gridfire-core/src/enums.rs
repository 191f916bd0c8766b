//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy behavior kind. Behavior is dispatched on this tag; no entity
/// carries kind-specific fields beyond its shared animation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Flies straight down the spawn lane.
    #[default]
    Diver,
    /// Lateral low-pass tracking toward the player's x.
    Weaver,
    /// Constant lateral drift, direction fixed at spawn.
    Sweeper,
}

/// Obstacle kind. Both kinds share movement; the tag selects animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Bobs vertically on a sine around the floor line.
    #[default]
    Pyramid,
    /// Rotates continuously with hue cycling (cosmetic only).
    Crystal,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle before the first session starts.
    #[default]
    Attract,
    Running,
    Paused,
    GameOver,
}

/// Wave director phase as exposed to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum WavePhase {
    /// Spawning from the current wave script.
    Active,
    /// Counting down to the next wave.
    Intermission { remaining_ticks: u32 },
}
