//! Wave script data model.

use serde::{Deserialize, Serialize};

use gridfire_core::enums::{EnemyKind, ObstacleKind};

/// One scheduled enemy spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Wave-local tick at which this entry fires (exact match, not >=).
    pub delay: u32,
    pub z: f64,
    pub x: f64,
    pub kind: EnemyKind,
}

/// One scheduled obstacle spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleSpawn {
    pub delay: u32,
    pub z: f64,
    pub x: f64,
    pub kind: ObstacleKind,
}

/// The complete spawn timeline for one wave.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveScript {
    pub enemies: Vec<EnemySpawn>,
    pub obstacles: Vec<ObstacleSpawn>,
}

impl WaveScript {
    /// Tick of the last scheduled spawn in this wave (enemy or obstacle).
    pub fn last_event_delay(&self) -> u32 {
        let last_enemy = self.enemies.iter().map(|e| e.delay).max().unwrap_or(0);
        let last_obstacle = self.obstacles.iter().map(|o| o.delay).max().unwrap_or(0);
        last_enemy.max(last_obstacle)
    }

    /// Total scheduled enemy count.
    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }
}
