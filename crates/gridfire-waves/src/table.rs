//! The authored wave table.
//!
//! Three hand-tuned waves: an intro of divers and weavers, a sweeper-heavy
//! ramp, and a mixed chaos wave. Lateral positions are rolled through the
//! session RNG with a center bias for enemies so the opening fights happen
//! in front of the player.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::constants::{FIELD_HALF_WIDTH, SPAWN_Z, STATIC_WAVE_COUNT};
use gridfire_core::enums::{EnemyKind, ObstacleKind};

use crate::script::{EnemySpawn, ObstacleSpawn, WaveScript};

/// Build one of the authored waves. `index` must be below
/// [`STATIC_WAVE_COUNT`].
pub fn authored_wave(index: u32, rng: &mut ChaCha8Rng) -> WaveScript {
    debug_assert!(index < STATIC_WAVE_COUNT);
    match index {
        0 => intro_wave(rng),
        1 => ramp_wave(rng),
        _ => chaos_wave(rng),
    }
}

/// Wave 1: scripted opening quartet, then a loose trickle.
fn intro_wave(rng: &mut ChaCha8Rng) -> WaveScript {
    let mut enemies = vec![
        scripted(60, 0.0, EnemyKind::Diver),
        scripted(120, -200.0, EnemyKind::Diver),
        scripted(180, 200.0, EnemyKind::Diver),
        scripted(300, 0.0, EnemyKind::Weaver),
    ];
    for i in 0..10 {
        let kind = if rng.gen_bool(0.5) {
            EnemyKind::Diver
        } else {
            EnemyKind::Weaver
        };
        enemies.push(EnemySpawn {
            delay: 400 + i * 100,
            z: SPAWN_Z,
            x: center_biased_x(rng),
            kind,
        });
    }

    WaveScript {
        enemies,
        obstacles: obstacle_column(rng, 50, 30, 0.3),
    }
}

/// Wave 2: sweepers take over, obstacle spacing tightens.
fn ramp_wave(rng: &mut ChaCha8Rng) -> WaveScript {
    let mut enemies = Vec::with_capacity(20);
    for i in 0..20 {
        let kind = if rng.gen_bool(0.7) {
            EnemyKind::Sweeper
        } else {
            EnemyKind::Diver
        };
        enemies.push(EnemySpawn {
            delay: 60 + i * 80,
            z: SPAWN_Z,
            x: center_biased_x(rng),
            kind,
        });
    }

    WaveScript {
        enemies,
        obstacles: obstacle_column(rng, 60, 25, 0.4),
    }
}

/// Wave 3: everything at once.
fn chaos_wave(rng: &mut ChaCha8Rng) -> WaveScript {
    let mut enemies = Vec::with_capacity(30);
    for i in 0..30 {
        enemies.push(EnemySpawn {
            delay: 60 + i * 60,
            z: SPAWN_Z,
            x: center_biased_x(rng),
            kind: random_kind(rng),
        });
    }

    WaveScript {
        enemies,
        obstacles: obstacle_column(rng, 80, 20, 0.5),
    }
}

fn scripted(delay: u32, x: f64, kind: EnemyKind) -> EnemySpawn {
    EnemySpawn {
        delay,
        z: SPAWN_Z,
        x,
        kind,
    }
}

/// A rapid-fire obstacle stream across the whole field.
/// Delays start at `spacing`: the wave timer never reads zero, so a
/// delay-0 entry could never fire.
pub(crate) fn obstacle_column(
    rng: &mut ChaCha8Rng,
    count: u32,
    spacing: u32,
    crystal_chance: f64,
) -> Vec<ObstacleSpawn> {
    (0..count)
        .map(|i| {
            let kind = if rng.gen_bool(crystal_chance) {
                ObstacleKind::Crystal
            } else {
                ObstacleKind::Pyramid
            };
            ObstacleSpawn {
                delay: (i + 1) * spacing,
                z: SPAWN_Z,
                x: full_field_x(rng),
                kind,
            }
        })
        .collect()
}

/// Lateral position biased toward the center of the field.
pub(crate) fn center_biased_x(rng: &mut ChaCha8Rng) -> f64 {
    (rng.gen::<f64>() - 0.5) * (FIELD_HALF_WIDTH * 2.0) * (rng.gen::<f64>() * 0.5)
}

/// Uniform lateral position across the field.
pub(crate) fn full_field_x(rng: &mut ChaCha8Rng) -> f64 {
    (rng.gen::<f64>() - 0.5) * (FIELD_HALF_WIDTH * 2.0)
}

pub(crate) fn random_kind(rng: &mut ChaCha8Rng) -> EnemyKind {
    match rng.gen_range(0..3) {
        0 => EnemyKind::Diver,
        1 => EnemyKind::Weaver,
        _ => EnemyKind::Sweeper,
    }
}
