//! GRIDFIRE headless runner.
//!
//! Runs the simulation at full rate with the demo autopilot at the stick,
//! logging session progress. Usage:
//!
//! ```text
//! gridfire [seed] [run-seconds]
//! ```

use std::time::{Duration, Instant};

use tracing::info;
use tracing_subscriber::EnvFilter;

use gridfire_core::commands::SessionCommand;
use gridfire_core::enums::GamePhase;
use gridfire_sim::engine::SimConfig;

use gridfire_app::game_loop::spawn_game_loop;
use gridfire_app::persistence::{FileHighScoreStore, HighScoreStore};
use gridfire_app::state::{shared_snapshot, GameLoopCommand};

const HIGH_SCORE_FILE: &str = ".gridfire_highscore";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);
    let run_secs: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(60);

    let store = FileHighScoreStore::new(HIGH_SCORE_FILE);
    let high_score = store.load();
    info!(seed, high_score, "starting session");

    let latest = shared_snapshot();
    let cmd_tx = spawn_game_loop(
        SimConfig {
            seed,
            high_score,
            ..Default::default()
        },
        Box::new(store),
        latest.clone(),
    );

    cmd_tx
        .send(GameLoopCommand::Session(SessionCommand::Start))
        .expect("game loop should be running");

    // Poll the shared snapshot, logging wave transitions until the session
    // ends or the time budget runs out.
    let deadline = Instant::now() + Duration::from_secs(run_secs);
    let mut last_wave = 0;
    loop {
        std::thread::sleep(Duration::from_millis(250));

        let snapshot = latest.lock().ok().and_then(|lock| lock.clone());
        if let Some(snapshot) = snapshot {
            if snapshot.hud.wave_number != last_wave {
                last_wave = snapshot.hud.wave_number;
                info!(
                    wave = last_wave,
                    score = snapshot.hud.score,
                    speed = snapshot.hud.speed,
                    "wave started"
                );
            }
            if snapshot.phase == GamePhase::GameOver {
                info!(
                    score = snapshot.hud.score,
                    high_score = snapshot.hud.high_score,
                    new_high = snapshot.hud.new_high_score,
                    "session ended"
                );
                break;
            }
        }

        if Instant::now() >= deadline {
            info!("time budget reached, shutting down");
            break;
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
