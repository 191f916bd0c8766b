//! Obstacle entity.

use gridfire_core::constants::*;
use gridfire_core::enums::ObstacleKind;

use crate::pool::Slot;

#[derive(Debug, Clone, Default)]
pub struct Obstacle {
    pub active: bool,
    pub kind: ObstacleKind,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub prev_z: f64,
    pub width: f64,
    /// Pyramid bob oscillator phase.
    pub bob_phase: f64,
    /// Crystal rotation angle (radians). Cosmetic.
    pub spin: f64,
    /// Crystal hue cycle position (degrees). Cosmetic.
    pub hue: f64,
}

impl Obstacle {
    pub fn spawn(&mut self, z: f64, x: f64, kind: ObstacleKind) {
        self.active = true;
        self.kind = kind;
        self.x = x;
        self.y = FLOOR_Y;
        self.z = z;
        self.prev_z = z;
        self.width = OBSTACLE_WIDTH;
        self.bob_phase = 0.0;
        self.spin = 0.0;
        self.hue = 0.0;
    }

    /// Obstacles ride the world scroll with no speed offset of their own.
    pub fn update(&mut self, global_speed: f64) {
        if !self.active {
            return;
        }

        self.prev_z = self.z;
        self.z -= global_speed;

        match self.kind {
            ObstacleKind::Pyramid => {
                self.bob_phase += PYRAMID_BOB_RATE;
                self.y = FLOOR_Y + self.bob_phase.sin() * PYRAMID_BOB_AMPLITUDE;
            }
            ObstacleKind::Crystal => {
                self.spin += CRYSTAL_SPIN_RATE;
                self.hue = (self.hue + CRYSTAL_HUE_RATE) % 360.0;
            }
        }

        if self.z < NEAR_CLIP_Z {
            self.active = false;
        }
    }
}

impl Slot for Obstacle {
    fn active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}
