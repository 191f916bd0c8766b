//! Session configuration.
//!
//! Built once at session start and passed by reference into the components
//! that need it. Nothing reads tuning values from ambient globals.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Immutable per-session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Screen dimensions the projector centers on.
    pub screen_width: f64,
    pub screen_height: f64,
    /// World scroll speed at session start (units per tick).
    pub base_speed: f64,
    /// Health at session start.
    pub starting_health: u32,
    /// Health ceiling for milestone recovery.
    pub max_health: u32,
    /// Fixed pool capacities.
    pub projectile_pool: usize,
    pub enemy_pool: usize,
    pub obstacle_pool: usize,
    pub explosion_pool: usize,
    pub text_pool: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            base_speed: BASE_SPEED,
            starting_health: STARTING_HEALTH,
            max_health: MAX_HEALTH,
            projectile_pool: PROJECTILE_POOL_SIZE,
            enemy_pool: ENEMY_POOL_SIZE,
            obstacle_pool: OBSTACLE_POOL_SIZE,
            explosion_pool: EXPLOSION_POOL_SIZE,
            text_pool: TEXT_POOL_SIZE,
        }
    }
}
