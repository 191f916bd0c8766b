//! Procedural wave generation past the authored table.
//!
//! Enemy and obstacle counts grow linearly with the wave index and delay
//! spacing compresses, so pressure keeps rising after the authored content
//! runs out. From [`SQUAD_WAVE_THRESHOLD`] onward some enemies arrive as
//! squads: 3-4 same-kind entities with offset lateral positions and
//! compressed delay spacing.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::constants::{
    ENEMY_WIDTH, SPAWN_Z, SQUAD_SPACING_TICKS, SQUAD_WAVE_THRESHOLD,
};

use crate::script::{EnemySpawn, WaveScript};
use crate::table::{center_biased_x, obstacle_column, random_kind};

/// Build a generated wave for `index` (past the authored table).
pub fn generated_wave(index: u32, rng: &mut ChaCha8Rng) -> WaveScript {
    let enemy_budget = 12 + index * 3;
    let obstacle_count = (40 + index * 8).min(120);
    let spacing = 80u32.saturating_sub(index * 2).max(30);

    let mut enemies: Vec<EnemySpawn> = Vec::with_capacity(enemy_budget as usize);
    let mut next_delay = 60u32;

    while (enemies.len() as u32) < enemy_budget {
        let as_squad = index >= SQUAD_WAVE_THRESHOLD && rng.gen_bool(0.35);
        if as_squad {
            next_delay = push_squad(&mut enemies, rng, next_delay, enemy_budget);
        } else {
            enemies.push(EnemySpawn {
                delay: next_delay,
                z: SPAWN_Z,
                x: center_biased_x(rng),
                kind: random_kind(rng),
            });
            next_delay += spacing;
        }
    }

    WaveScript {
        enemies,
        obstacles: obstacle_column(rng, obstacle_count, 20, 0.5),
    }
}

/// Schedule a tight same-kind squad. Returns the delay for the entry after
/// the squad. The squad never overshoots the wave's enemy budget.
fn push_squad(
    enemies: &mut Vec<EnemySpawn>,
    rng: &mut ChaCha8Rng,
    start_delay: u32,
    budget: u32,
) -> u32 {
    let kind = random_kind(rng);
    let size = rng.gen_range(3..=4).min(budget - enemies.len() as u32);
    let anchor_x = center_biased_x(rng);

    let mut delay = start_delay;
    for i in 0..size {
        // Members fan out by a couple of body widths around the anchor.
        let offset = (i as f64 - (size as f64 - 1.0) / 2.0) * ENEMY_WIDTH * 2.0;
        enemies.push(EnemySpawn {
            delay,
            z: SPAWN_Z,
            x: anchor_x + offset,
            kind,
        });
        delay += SQUAD_SPACING_TICKS;
    }

    // Breathing room after the squad before the next entry.
    delay + SQUAD_SPACING_TICKS * 2
}
