//! Headless runner for the GRIDFIRE simulation.
//!
//! Owns the fixed-rate game loop thread, the autopilot that synthesizes
//! input, and the file-backed high-score store. Presentation here is just
//! structured logging — the loop consumes the same snapshot contract a
//! renderer would.

pub mod autopilot;
pub mod game_loop;
pub mod persistence;
pub mod state;
