//! Projectile entity.

use gridfire_core::constants::*;

use crate::pool::Slot;

/// The only entity that moves away from the camera: +z each tick until it
/// passes the draw limit.
#[derive(Debug, Clone, Default)]
pub struct Projectile {
    pub active: bool,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Collision radius source.
    pub width: f64,
}

impl Projectile {
    pub fn spawn(&mut self, x: f64, y: f64, z: f64) {
        self.active = true;
        self.x = x;
        self.y = y;
        self.z = z;
        self.width = PROJECTILE_WIDTH;
    }

    pub fn update(&mut self) {
        if !self.active {
            return;
        }

        self.z += PROJECTILE_SPEED;

        if self.z > MAX_DRAW_DISTANCE {
            self.active = false;
        }
    }
}

impl Slot for Projectile {
    fn active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}
