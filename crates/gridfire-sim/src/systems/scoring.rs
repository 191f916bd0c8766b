//! Combo, multiplier, milestone, and health accounting.

use gridfire_core::config::GameConfig;
use gridfire_core::constants::*;
use gridfire_core::events::AudioCue;

use crate::entities::{Explosion, FloatingText};
use crate::pool::Pool;
use crate::session::{milestone_due, multiplier_for, SessionState};
use crate::systems::collision::KillEvent;

/// Apply one projectile kill: combo, score, milestone, and the juice
/// (explosion, score popup, audio).
pub fn apply_kill(
    session: &mut SessionState,
    config: &GameConfig,
    kill: &KillEvent,
    explosions: &mut Pool<Explosion>,
    texts: &mut Pool<FloatingText>,
    audio_events: &mut Vec<AudioCue>,
) {
    session.combo += 1;
    session.combo_timer = COMBO_WINDOW_TICKS;

    let tier = multiplier_for(session.combo);
    if tier > session.multiplier {
        audio_events.push(AudioCue::Combo {
            combo: session.combo,
        });
    }
    session.multiplier = tier;

    let points = KILL_SCORE * tier as u64;
    session.score += points;

    if milestone_due(session.combo, session.last_milestone) {
        session.last_milestone = session.combo;
        if session.health < config.max_health {
            session.health += 1;
            audio_events.push(AudioCue::LifeGain);
        } else {
            session.score += MILESTONE_SCORE_BONUS;
        }
    }

    audio_events.push(AudioCue::EnemyHit);

    if let Some(explosion) = explosions.acquire() {
        explosion.spawn(kill.x, kill.y, kill.z);
    }
    if let Some(text) = texts.acquire() {
        text.spawn(kill.x, kill.y, kill.z, points);
    }
}

/// Apply one player hit. Exactly one health decrement and one
/// invincibility window per tick, no matter how many entities connected.
/// Returns true when the session is over.
pub fn apply_damage(session: &mut SessionState, audio_events: &mut Vec<AudioCue>) -> bool {
    session.health = session.health.saturating_sub(1);
    session.invincibility_timer = INVINCIBILITY_TICKS;
    audio_events.push(AudioCue::ShipCrash);
    session.health == 0
}

/// Per-tick countdowns: combo decay and invincibility.
///
/// The combo window counts down independently of kill events; when it
/// empties the combo, multiplier, and milestone watermark all reset.
pub fn tick_timers(session: &mut SessionState) {
    if session.combo > 0 {
        session.combo_timer = session.combo_timer.saturating_sub(1);
        if session.combo_timer == 0 {
            session.combo = 0;
            session.multiplier = 1;
            session.last_milestone = 0;
        }
    }

    session.invincibility_timer = session.invincibility_timer.saturating_sub(1);
}
