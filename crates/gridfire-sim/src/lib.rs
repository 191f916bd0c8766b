//! The GRIDFIRE simulation engine.
//!
//! `GameEngine` owns the entity pools, the player, the wave director, and
//! all session state; one `tick` call runs every system to completion and
//! produces a `FrameSnapshot`. Completely headless (no rendering or audio
//! dependency), enabling deterministic testing.

pub mod engine;
pub mod entities;
pub mod player;
pub mod pool;
pub mod session;
pub mod systems;
