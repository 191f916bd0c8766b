//! Enemy entity.

use gridfire_behavior::steering::{steer, SteerContext};
use gridfire_core::constants::*;
use gridfire_core::enums::EnemyKind;

use crate::pool::Slot;

/// Per-tick context shared by every enemy update.
#[derive(Debug, Clone, Copy)]
pub struct EnemyUpdateContext {
    pub global_speed: f64,
    pub player_x: f64,
    /// Sweepers drift faster at higher difficulty.
    pub fast_drift: bool,
    /// Global lateral jitter term; zero below the score threshold.
    pub jitter: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Enemy {
    pub active: bool,
    pub kind: EnemyKind,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Depth at the start of the last update; the player sweep needs it.
    pub prev_z: f64,
    /// Lateral position at spawn; fixes the sweeper drift direction.
    pub start_x: f64,
    pub width: f64,
    pub height: f64,
}

impl Enemy {
    pub fn spawn(&mut self, z: f64, x: f64, kind: EnemyKind) {
        self.active = true;
        self.kind = kind;
        self.x = x;
        self.start_x = x;
        self.y = FLOOR_Y;
        self.z = z;
        self.prev_z = z;
        self.width = ENEMY_WIDTH;
        self.height = ENEMY_HEIGHT;
    }

    pub fn update(&mut self, ctx: &EnemyUpdateContext) {
        if !self.active {
            return;
        }

        self.prev_z = self.z;

        let next = steer(&SteerContext {
            kind: self.kind,
            x: self.x,
            z: self.z,
            start_x: self.start_x,
            player_x: ctx.player_x,
            global_speed: ctx.global_speed,
            fast_drift: ctx.fast_drift,
            jitter: ctx.jitter,
        });
        self.x = next.x;
        self.z = next.z;

        if self.z < NEAR_CLIP_Z {
            self.active = false;
        }
    }
}

impl Slot for Enemy {
    fn active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}
