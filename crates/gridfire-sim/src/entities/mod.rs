//! Pooled entity types and their per-tick update rules.
//!
//! Each entity is a plain struct living in exactly one pool slot:
//! `INACTIVE --spawn--> ACTIVE --update until exit condition--> INACTIVE`.
//! Nothing re-enters ACTIVE without an explicit spawn from the pool owner.

mod effects;
mod enemy;
mod obstacle;
mod projectile;

pub use effects::{Explosion, FloatingText};
pub use enemy::{Enemy, EnemyUpdateContext};
pub use obstacle::Obstacle;
pub use projectile::Projectile;
