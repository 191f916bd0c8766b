//! Session commands and the per-tick input snapshot.
//!
//! Commands are queued and processed at the next tick boundary. Input is a
//! plain held/not-held snapshot read once per tick — no event queue.

use serde::{Deserialize, Serialize};

/// Session-level control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Start a session from Attract or GameOver. Full atomic reset.
    Start,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
    /// Abandon the session and return to Attract.
    Reset,
}

/// Snapshot of currently-held keys, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputState {
    /// Net steer direction: -1 (left), 0, or +1 (right).
    pub fn steer(&self) -> f64 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
