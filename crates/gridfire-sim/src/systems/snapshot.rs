//! Snapshot system: projects every active entity and builds the complete
//! per-tick `FrameSnapshot`.
//!
//! Read-only over the simulation state. Entities that fail projection
//! (`z <= 0`) are absent from the snapshot for this tick — not an error,
//! and never a reason to deactivate them.

use gridfire_core::config::GameConfig;
use gridfire_core::enums::GamePhase;
use gridfire_core::events::AudioCue;
use gridfire_core::projector::Camera;
use gridfire_core::state::*;
use gridfire_core::types::{SimTime, WorldPos};

use crate::entities::{Enemy, Explosion, FloatingText, Obstacle, Projectile};
use crate::player::Player;
use crate::pool::Pool;
use crate::session::SessionState;
use crate::systems::director::WaveDirector;

pub fn build(
    camera: &Camera,
    time: &SimTime,
    phase: GamePhase,
    config: &GameConfig,
    session: &SessionState,
    high_score: u64,
    player: &Player,
    director: &WaveDirector,
    enemies: &Pool<Enemy>,
    obstacles: &Pool<Obstacle>,
    projectiles: &Pool<Projectile>,
    explosions: &Pool<Explosion>,
    texts: &Pool<FloatingText>,
    audio_events: Vec<AudioCue>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        hud: build_hud(phase, config, session, high_score, director),
        player: build_player(camera, player, session),
        enemies: build_enemies(camera, enemies),
        obstacles: build_obstacles(camera, obstacles),
        projectiles: build_projectiles(camera, projectiles),
        explosions: build_explosions(camera, explosions),
        texts: build_texts(camera, texts),
        audio_events,
    }
}

fn build_hud(
    phase: GamePhase,
    config: &GameConfig,
    session: &SessionState,
    high_score: u64,
    director: &WaveDirector,
) -> HudView {
    let wave_phase = match phase {
        GamePhase::Running | GamePhase::Paused => Some(director.phase()),
        GamePhase::Attract | GamePhase::GameOver => None,
    };

    HudView {
        score: session.score,
        high_score,
        new_high_score: session.new_high_score,
        health: session.health,
        max_health: config.max_health,
        combo: session.combo,
        multiplier: session.multiplier,
        wave_number: director.wave_number(),
        wave_phase,
        speed: session.speed,
    }
}

fn build_player(camera: &Camera, player: &Player, session: &SessionState) -> PlayerView {
    let position = WorldPos::new(player.x, player.y(), player.z());
    PlayerView {
        position,
        projection: camera.project_pos(&position),
        invincible: session.invincibility_timer > 0,
    }
}

fn build_enemies(camera: &Camera, enemies: &Pool<Enemy>) -> Vec<EnemyView> {
    enemies
        .iter_active()
        .filter_map(|e| {
            let position = WorldPos::new(e.x, e.y, e.z);
            camera.project_pos(&position).map(|projection| EnemyView {
                kind: e.kind,
                position,
                projection,
                width: e.width,
            })
        })
        .collect()
}

fn build_obstacles(camera: &Camera, obstacles: &Pool<Obstacle>) -> Vec<ObstacleView> {
    obstacles
        .iter_active()
        .filter_map(|o| {
            let position = WorldPos::new(o.x, o.y, o.z);
            camera.project_pos(&position).map(|projection| ObstacleView {
                kind: o.kind,
                position,
                projection,
                width: o.width,
                spin: o.spin,
                hue: o.hue,
            })
        })
        .collect()
}

fn build_projectiles(camera: &Camera, projectiles: &Pool<Projectile>) -> Vec<ProjectileView> {
    projectiles
        .iter_active()
        .filter_map(|p| {
            let position = WorldPos::new(p.x, p.y, p.z);
            camera
                .project_pos(&position)
                .map(|projection| ProjectileView {
                    position,
                    projection,
                    width: p.width,
                })
        })
        .collect()
}

fn build_explosions(camera: &Camera, explosions: &Pool<Explosion>) -> Vec<ExplosionView> {
    explosions
        .iter_active()
        .filter_map(|e| {
            let position = WorldPos::new(e.x, e.y, e.z);
            camera
                .project_pos(&position)
                .map(|projection| ExplosionView {
                    position,
                    projection,
                    frame: e.frame,
                })
        })
        .collect()
}

fn build_texts(camera: &Camera, texts: &Pool<FloatingText>) -> Vec<TextView> {
    texts
        .iter_active()
        .filter_map(|t| {
            let position = WorldPos::new(t.x, t.y, t.z);
            camera.project_pos(&position).map(|projection| TextView {
                position,
                projection,
                value: t.value,
                life: t.life_fraction(),
            })
        })
        .collect()
}
