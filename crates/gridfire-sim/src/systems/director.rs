//! Wave director — drives scheduled spawning from wave scripts.
//!
//! State machine: `Active (spawning) -> Intermission (fixed delay with
//! countdown cues) -> Active -> ...`, looping indefinitely. Scripts come
//! from the authored table first, then the procedural generator.

use rand_chacha::ChaCha8Rng;

use gridfire_core::constants::*;
use gridfire_core::enums::WavePhase;
use gridfire_core::events::AudioCue;
use gridfire_waves::build_wave;
use gridfire_waves::script::WaveScript;

use crate::entities::{Enemy, Obstacle};
use crate::pool::Pool;
use crate::session::SessionState;

#[derive(Debug, Clone)]
pub struct WaveDirector {
    pub(crate) wave_index: u32,
    /// Wave-local tick counter while a wave is active.
    pub(crate) frame_timer: u32,
    pub(crate) intermission_timer: u32,
    pub(crate) active: bool,
    pub(crate) script: WaveScript,
}

impl WaveDirector {
    pub fn new() -> Self {
        Self {
            wave_index: 0,
            frame_timer: 0,
            intermission_timer: 0,
            active: false,
            script: WaveScript::default(),
        }
    }

    /// Begin the first wave immediately (no opening intermission).
    pub fn start(
        &mut self,
        session: &mut SessionState,
        rng: &mut ChaCha8Rng,
        audio_events: &mut Vec<AudioCue>,
    ) {
        self.start_wave(0, session, rng, audio_events);
    }

    /// 1-based wave counter for display.
    pub fn wave_number(&self) -> u32 {
        self.wave_index + 1
    }

    pub fn wave_index(&self) -> u32 {
        self.wave_index
    }

    pub fn phase(&self) -> WavePhase {
        if self.active {
            WavePhase::Active
        } else {
            WavePhase::Intermission {
                remaining_ticks: WAVE_DELAY_TICKS.saturating_sub(self.intermission_timer),
            }
        }
    }

    /// Advance the director one tick: countdown or scheduled spawning.
    pub fn run(
        &mut self,
        enemies: &mut Pool<Enemy>,
        obstacles: &mut Pool<Obstacle>,
        session: &mut SessionState,
        rng: &mut ChaCha8Rng,
        audio_events: &mut Vec<AudioCue>,
    ) {
        if !self.active {
            self.intermission_timer += 1;

            if WAVE_COUNTDOWN_CUES.contains(&self.intermission_timer) {
                audio_events.push(AudioCue::WaveCountdown);
            }

            if self.intermission_timer > WAVE_DELAY_TICKS {
                self.intermission_timer = 0;
                self.start_wave(self.wave_index + 1, session, rng, audio_events);
            }
            return;
        }

        self.frame_timer += 1;

        // Exact-tick match: an entry whose tick passed while its pool was
        // full is permanently skipped, never retried.
        for entry in &self.script.enemies {
            if entry.delay == self.frame_timer {
                if let Some(enemy) = enemies.acquire() {
                    enemy.spawn(entry.z, entry.x, entry.kind);
                }
            }
        }
        for entry in &self.script.obstacles {
            if entry.delay == self.frame_timer {
                if let Some(obstacle) = obstacles.acquire() {
                    obstacle.spawn(entry.z, entry.x, entry.kind);
                }
            }
        }

        let last = self.script.last_event_delay();

        // Completion couples timeline exhaustion with actual enemy
        // clearance; obstacles are not required to be gone.
        let timeline_done = self.frame_timer > last + WAVE_CLEAR_GRACE;
        let stalled = self.frame_timer > last + WAVE_STALL_TIMEOUT;

        if (timeline_done && enemies.active_count() == 0) || stalled {
            self.active = false;
            self.intermission_timer = 0;
            audio_events.push(AudioCue::WaveComplete {
                wave_number: self.wave_number(),
            });
        }
    }

    fn start_wave(
        &mut self,
        index: u32,
        session: &mut SessionState,
        rng: &mut ChaCha8Rng,
        audio_events: &mut Vec<AudioCue>,
    ) {
        if index > 0 {
            // The primary difficulty ramp.
            session.base_speed += WAVE_SPEED_INCREMENT;
            session.speed = session.base_speed;
        }

        self.wave_index = index;
        self.frame_timer = 0;
        self.active = true;
        self.script = build_wave(index, rng);

        audio_events.push(AudioCue::WaveStart {
            wave_number: self.wave_number(),
        });
    }
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self::new()
    }
}
