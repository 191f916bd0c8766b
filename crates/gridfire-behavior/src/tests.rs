//! Tests for enemy steering behavior.

use gridfire_core::constants::*;
use gridfire_core::enums::EnemyKind;

use crate::steering::{global_jitter, steer, SteerContext};

fn ctx(kind: EnemyKind, x: f64, start_x: f64, player_x: f64) -> SteerContext {
    SteerContext {
        kind,
        x,
        z: 5000.0,
        start_x,
        player_x,
        global_speed: BASE_SPEED,
        fast_drift: false,
        jitter: 0.0,
    }
}

// ---- Diver ----

#[test]
fn test_diver_holds_lane() {
    let out = steer(&ctx(EnemyKind::Diver, -200.0, -200.0, 500.0));
    assert_eq!(out.x, -200.0);
    assert!((out.z - (5000.0 - BASE_SPEED - DIVER_SPEED)).abs() < 1e-10);
}

// ---- Weaver ----

#[test]
fn test_weaver_tracks_toward_player() {
    let out = steer(&ctx(EnemyKind::Weaver, 0.0, 0.0, 1000.0));
    assert!((out.x - 1000.0 * WEAVER_TRACK_RATE).abs() < 1e-10);
    assert!((out.z - (5000.0 - BASE_SPEED - WEAVER_SPEED)).abs() < 1e-10);
}

#[test]
fn test_weaver_approach_is_asymptotic() {
    // The tracking filter closes a fixed fraction of the gap per tick,
    // so the gap shrinks monotonically but never flips sign.
    let mut x: f64 = -800.0;
    let player_x: f64 = 400.0;
    let mut prev_gap = (player_x - x).abs();
    for _ in 0..500 {
        let out = steer(&ctx(EnemyKind::Weaver, x, -800.0, player_x));
        x = out.x;
        let gap = (player_x - x).abs();
        assert!(gap < prev_gap, "gap should shrink every tick");
        assert!(x < player_x, "weaver should never overshoot the target");
        prev_gap = gap;
    }
}

// ---- Sweeper ----

#[test]
fn test_sweeper_direction_fixed_by_spawn_side() {
    // Spawned left — drifts right even after crossing center.
    let out = steer(&ctx(EnemyKind::Sweeper, 300.0, -600.0, 0.0));
    assert!((out.x - (300.0 + SWEEPER_DRIFT)).abs() < 1e-10);

    // Spawned right — drifts left.
    let out = steer(&ctx(EnemyKind::Sweeper, 300.0, 600.0, 0.0));
    assert!((out.x - (300.0 - SWEEPER_DRIFT)).abs() < 1e-10);
}

#[test]
fn test_sweeper_fast_drift() {
    let mut c = ctx(EnemyKind::Sweeper, 0.0, -600.0, 0.0);
    c.fast_drift = true;
    let out = steer(&c);
    assert!((out.x - SWEEPER_DRIFT_FAST).abs() < 1e-10);
}

#[test]
fn test_sweeper_is_fastest_inbound() {
    let diver = steer(&ctx(EnemyKind::Diver, 0.0, 0.0, 0.0));
    let weaver = steer(&ctx(EnemyKind::Weaver, 0.0, 0.0, 0.0));
    let sweeper = steer(&ctx(EnemyKind::Sweeper, 0.0, -1.0, 0.0));
    assert!(sweeper.z < diver.z);
    assert!(diver.z < weaver.z);
}

// ---- Jitter ----

#[test]
fn test_jitter_gated_by_score() {
    assert_eq!(global_jitter(100, 0), 0.0);
    assert_eq!(global_jitter(100, JITTER_SCORE_THRESHOLD - 1), 0.0);
    // Above the threshold the term is bounded by the amplitude.
    for tick in 0..200 {
        let j = global_jitter(tick, JITTER_SCORE_THRESHOLD);
        assert!(j.abs() <= JITTER_AMPLITUDE + 1e-10);
    }
}

#[test]
fn test_jitter_applies_to_all_kinds() {
    for kind in [EnemyKind::Diver, EnemyKind::Weaver, EnemyKind::Sweeper] {
        let mut c = ctx(kind, 0.0, -1.0, 0.0);
        let base = steer(&c).x;
        c.jitter = 4.0;
        assert!((steer(&c).x - base - 4.0).abs() < 1e-10);
    }
}
