//! Perspective projection from world space to screen space.
//!
//! One pure function; every on-screen position and sprite size in the game
//! derives from the single scale factor it returns.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::constants::FOCAL_LENGTH;
use crate::types::WorldPos;

/// Camera parameters for the projector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub focal_length: f64,
    pub center_x: f64,
    pub center_y: f64,
}

/// A projected point: screen position plus the perspective scale factor.
/// Callers size sprites as `world_size * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub screen: DVec2,
    pub scale: f64,
}

impl Camera {
    pub fn new(focal_length: f64, center_x: f64, center_y: f64) -> Self {
        Self {
            focal_length,
            center_x,
            center_y,
        }
    }

    /// Camera centered on the configured screen.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            FOCAL_LENGTH,
            config.screen_width / 2.0,
            config.screen_height / 2.0,
        )
    }

    /// Project a world point to screen space.
    ///
    /// Returns `None` for any point at or behind the camera (`z <= 0`);
    /// callers treat that as "not visible, skip" — never as an error.
    pub fn project(&self, x: f64, y: f64, z: f64) -> Option<Projection> {
        if z <= 0.0 {
            return None;
        }
        let scale = self.focal_length / z;
        Some(Projection {
            screen: DVec2::new(self.center_x + x * scale, self.center_y + y * scale),
            scale,
        })
    }

    /// Project a `WorldPos`.
    pub fn project_pos(&self, pos: &WorldPos) -> Option<Projection> {
        self.project(pos.x, pos.y, pos.z)
    }
}
