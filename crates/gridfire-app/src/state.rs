//! Shared state between the main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use gridfire_core::commands::SessionCommand;
use gridfire_core::state::FrameSnapshot;

/// Commands sent into the game loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    Session(SessionCommand),
    Shutdown,
}

/// Latest snapshot slot, polled by the main thread.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
