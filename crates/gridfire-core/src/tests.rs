//! Tests for projection, core types, and serde round-trips.

use crate::commands::{InputState, SessionCommand};
use crate::config::GameConfig;
use crate::constants::*;
use crate::enums::*;
use crate::events::AudioCue;
use crate::projector::Camera;
use crate::state::FrameSnapshot;
use crate::types::{SimTime, WorldPos};

// ---- Projection ----

#[test]
fn test_project_at_or_behind_camera_is_none() {
    let cam = Camera::new(400.0, 640.0, 360.0);
    assert!(cam.project(0.0, 0.0, 0.0).is_none());
    assert!(cam.project(100.0, 50.0, -1.0).is_none());
    assert!(cam.project(0.0, 0.0, -7000.0).is_none());
}

#[test]
fn test_project_basic_math() {
    let cam = Camera::new(400.0, 640.0, 360.0);
    let p = cam.project(100.0, 200.0, 400.0).unwrap();
    // scale = 400 / 400 = 1.0
    assert!((p.scale - 1.0).abs() < 1e-10);
    assert!((p.screen.x - 740.0).abs() < 1e-10);
    assert!((p.screen.y - 560.0).abs() < 1e-10);
}

#[test]
fn test_projection_scale_strictly_decreases_with_depth() {
    let cam = Camera::new(FOCAL_LENGTH, 640.0, 360.0);
    let mut prev_scale = f64::INFINITY;
    for z in [1.0, 10.0, 100.0, 500.0, 2000.0, 7000.0] {
        let p = cam.project(50.0, 200.0, z).unwrap();
        assert!(
            p.scale < prev_scale,
            "scale should strictly decrease with z, got {} at z={z}",
            p.scale
        );
        prev_scale = p.scale;
    }
}

#[test]
fn test_project_pos_matches_scalar_form() {
    let cam = Camera::from_config(&GameConfig::default());
    let pos = WorldPos::new(-300.0, FLOOR_Y, 1500.0);
    let a = cam.project_pos(&pos).unwrap();
    let b = cam.project(pos.x, pos.y, pos.z).unwrap();
    assert_eq!(a, b);
}

// ---- Types ----

#[test]
fn test_world_pos_distances() {
    let a = WorldPos::new(0.0, 0.0, 100.0);
    let b = WorldPos::new(3.0, 4.0, 900.0);
    assert!((a.planar_distance_to(&b) - 5.0).abs() < 1e-10);
    assert!((a.lateral_distance_to(&b) - 3.0).abs() < 1e-10);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    // One full tick-rate's worth of ticks is one second.
    assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
}

// ---- Input ----

#[test]
fn test_input_steer_direction() {
    let mut input = InputState::default();
    assert_eq!(input.steer(), 0.0);
    input.left = true;
    assert_eq!(input.steer(), -1.0);
    input.right = true;
    // Both held cancel out.
    assert_eq!(input.steer(), 0.0);
    input.left = false;
    assert_eq!(input.steer(), 1.0);
}

// ---- Config ----

#[test]
fn test_default_config_pool_capacities() {
    let config = GameConfig::default();
    assert_eq!(config.projectile_pool, 50);
    assert_eq!(config.enemy_pool, 30);
    assert_eq!(config.obstacle_pool, 100);
    assert_eq!(config.explosion_pool, 20);
    assert!(config.starting_health <= config.max_health);
}

// ---- Serde ----

#[test]
fn test_enemy_kind_serde() {
    let variants = vec![EnemyKind::Diver, EnemyKind::Weaver, EnemyKind::Sweeper];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: EnemyKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_obstacle_kind_serde() {
    let variants = vec![ObstacleKind::Pyramid, ObstacleKind::Crystal];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: ObstacleKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_session_command_serde() {
    let commands = vec![
        SessionCommand::Start,
        SessionCommand::Pause,
        SessionCommand::Resume,
        SessionCommand::Reset,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: SessionCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_audio_cue_serde() {
    let cues = vec![
        AudioCue::Shoot,
        AudioCue::EnemyHit,
        AudioCue::ShipCrash,
        AudioCue::Combo { combo: 10 },
        AudioCue::WaveStart { wave_number: 4 },
        AudioCue::WaveComplete { wave_number: 4 },
        AudioCue::WaveCountdown,
        AudioCue::LifeGain,
    ];
    for cue in &cues {
        let json = serde_json::to_string(cue).unwrap();
        let back: AudioCue = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_wave_phase_serde() {
    let phases = vec![
        WavePhase::Active,
        WavePhase::Intermission {
            remaining_ticks: 120,
        },
    ];
    for p in &phases {
        let json = serde_json::to_string(p).unwrap();
        let back: WavePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(*p, back);
    }
}

#[test]
fn test_snapshot_serde() {
    let snapshot = FrameSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.phase, back.phase);
    assert!(
        json.len() < 1024,
        "Empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}
