//! Game loop thread — runs the engine at the fixed tick rate.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc`; the latest snapshot is stored in
//! shared state for synchronous polling. A panicking tick is contained at
//! the loop boundary and logged; the loop carries on with the next
//! scheduled tick rather than taking the session down.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use gridfire_core::commands::InputState;
use gridfire_core::constants::TICK_RATE;
use gridfire_core::enums::GamePhase;
use gridfire_sim::engine::{GameEngine, SimConfig};

use crate::autopilot;
use crate::persistence::HighScoreStore;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the caller to drive the session with.
pub fn spawn_game_loop(
    sim_config: SimConfig,
    store: Box<dyn HighScoreStore>,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("gridfire-game-loop".into())
        .spawn(move || {
            run_game_loop(sim_config, store, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    sim_config: SimConfig,
    mut store: Box<dyn HighScoreStore>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = GameEngine::new(sim_config);
    let mut next_tick_time = Instant::now();
    let mut input = InputState::default();
    let mut prev_phase = engine.phase();

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Session(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick, contained: a panicked tick is logged and
        //    skipped, not fatal.
        let result = catch_unwind(AssertUnwindSafe(|| engine.tick(&input)));
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(_) => {
                error!("tick panicked; continuing with next scheduled tick");
                next_tick_time += TICK_DURATION;
                continue;
            }
        };

        // 3. React to session transitions.
        if snapshot.phase == GamePhase::GameOver && prev_phase != GamePhase::GameOver {
            info!(
                score = snapshot.hud.score,
                wave = snapshot.hud.wave_number,
                "game over"
            );
            if snapshot.hud.new_high_score {
                if let Err(e) = store.save(snapshot.hud.score) {
                    warn!("failed to save high score: {e}");
                } else {
                    info!(high_score = snapshot.hud.score, "new high score saved");
                }
            }
        }
        prev_phase = snapshot.phase;

        // 4. Next tick's input from this tick's state.
        input = autopilot::decide(&snapshot);

        // 5. Publish for polling.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until the next tick.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfire_core::commands::SessionCommand;
    use gridfire_core::events::AudioCue;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Session(SessionCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::Session(SessionCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Session(SessionCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Session(SessionCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_autopilot_drives_opening_wave() {
        // Drive the engine directly with the autopilot for the opening
        // intermission-free stretch: shots go out, waves schedule.
        let mut engine = GameEngine::new(SimConfig::default());
        engine.queue_command(SessionCommand::Start);

        let mut input = InputState::default();
        let mut shots = 0;
        for _ in 0..120 {
            let snapshot = engine.tick(&input);
            shots += snapshot
                .audio_events
                .iter()
                .filter(|c| matches!(c, AudioCue::Shoot))
                .count();
            input = autopilot::decide(&snapshot);
        }

        assert!(shots > 0, "autopilot should be firing");
        assert!(
            engine.enemies().active_count() > 0,
            "wave 1 should have spawned enemies by tick 120"
        );
    }

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / TICK_RATE as u64;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = GameEngine::new(SimConfig::default());
        engine.queue_command(SessionCommand::Start);

        for _ in 0..200 {
            engine.tick(&InputState {
                fire: true,
                ..Default::default()
            });
        }

        let snapshot = engine.tick(&InputState::default());
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {elapsed:?}, should be <3ms"
        );
        assert!(!json.is_empty());
    }
}
