//! Tests for wave script construction.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::constants::*;
use gridfire_core::enums::EnemyKind;

use crate::build_wave;
use crate::script::WaveScript;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// ---- Determinism ----

#[test]
fn test_same_seed_same_script() {
    for index in [0, 1, 2, 5, 12] {
        let a = build_wave(index, &mut rng(7));
        let b = build_wave(index, &mut rng(7));
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.delay, eb.delay);
            assert_eq!(ea.kind, eb.kind);
            assert!((ea.x - eb.x).abs() < 1e-12);
        }
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.delay, ob.delay);
            assert_eq!(oa.kind, ob.kind);
        }
    }
}

// ---- Authored table ----

#[test]
fn test_intro_wave_scripted_opening() {
    let script = build_wave(0, &mut rng(1));
    // The first four entries are fixed regardless of seed.
    assert_eq!(script.enemies[0].delay, 60);
    assert_eq!(script.enemies[0].kind, EnemyKind::Diver);
    assert_eq!(script.enemies[1].x, -200.0);
    assert_eq!(script.enemies[3].kind, EnemyKind::Weaver);
    assert_eq!(script.enemies.len(), 14);
    assert_eq!(script.obstacles.len(), 50);
}

#[test]
fn test_authored_waves_escalate() {
    let w0 = build_wave(0, &mut rng(3));
    let w1 = build_wave(1, &mut rng(3));
    let w2 = build_wave(2, &mut rng(3));
    assert!(w1.enemies.len() > w0.enemies.len());
    assert!(w2.enemies.len() > w1.enemies.len());
    assert!(w2.obstacles.len() > w0.obstacles.len());
}

#[test]
fn test_spawns_inside_field_and_at_spawn_depth() {
    for index in 0..10 {
        let script = build_wave(index, &mut rng(99));
        for e in &script.enemies {
            assert_eq!(e.z, SPAWN_Z);
            // Squad fan-out can push slightly past the band edge.
            assert!(e.x.abs() <= FIELD_HALF_WIDTH + ENEMY_WIDTH * 4.0);
        }
        for o in &script.obstacles {
            assert_eq!(o.z, SPAWN_Z);
            assert!(o.x.abs() <= FIELD_HALF_WIDTH);
        }
    }
}

// ---- Procedural generation ----

#[test]
fn test_generated_counts_scale_with_index() {
    let w3 = build_wave(3, &mut rng(5));
    let w10 = build_wave(10, &mut rng(5));
    assert_eq!(w3.enemies.len(), 12 + 3 * 3);
    assert_eq!(w10.enemies.len(), 12 + 10 * 3);
    assert!(w10.obstacles.len() > w3.obstacles.len());
}

#[test]
fn test_delays_are_ascending() {
    for index in 0..15 {
        let script = build_wave(index, &mut rng(42));
        let mut prev = 0;
        for e in &script.enemies {
            assert!(e.delay >= prev, "enemy delays must not go backwards");
            prev = e.delay;
        }
    }
}

#[test]
fn test_squads_appear_past_threshold() {
    // A squad shows up as consecutive same-kind entries spaced exactly
    // SQUAD_SPACING_TICKS apart. Scan several seeds; at least one wave past
    // the threshold must contain one.
    let mut found = false;
    for seed in 0..20 {
        let script = build_wave(SQUAD_WAVE_THRESHOLD + 2, &mut rng(seed));
        for pair in script.enemies.windows(2) {
            if pair[1].delay - pair[0].delay == SQUAD_SPACING_TICKS
                && pair[0].kind == pair[1].kind
            {
                found = true;
            }
        }
    }
    assert!(found, "expected squad spacing past the squad threshold");
}

#[test]
fn test_no_squads_before_threshold() {
    for seed in 0..10 {
        let script = build_wave(SQUAD_WAVE_THRESHOLD - 1, &mut rng(seed));
        for pair in script.enemies.windows(2) {
            assert_ne!(
                pair[1].delay - pair[0].delay,
                SQUAD_SPACING_TICKS,
                "no squad spacing expected below the threshold"
            );
        }
    }
}

// ---- Script helpers ----

#[test]
fn test_last_event_delay() {
    let script = build_wave(2, &mut rng(8));
    let max_enemy = script.enemies.iter().map(|e| e.delay).max().unwrap();
    let max_obstacle = script.obstacles.iter().map(|o| o.delay).max().unwrap();
    assert_eq!(script.last_event_delay(), max_enemy.max(max_obstacle));

    assert_eq!(WaveScript::default().last_event_delay(), 0);
}
