//! Frame snapshot — the complete visible state handed to presentation each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioCue;
use crate::projector::Projection;
use crate::types::{SimTime, WorldPos};

/// Complete per-tick state for the presentation layer.
///
/// Every entity view carries its projected screen position and scale;
/// entities that failed projection this tick are simply absent. The core
/// never draws — presentation consumes this and nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub obstacles: Vec<ObstacleView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub texts: Vec<TextView>,
    pub audio_events: Vec<AudioCue>,
}

/// Scoreboard and status values for HUD text layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub high_score: u64,
    pub new_high_score: bool,
    pub health: u32,
    pub max_health: u32,
    pub combo: u32,
    pub multiplier: u32,
    /// 1-based wave counter for display.
    pub wave_number: u32,
    pub wave_phase: Option<WavePhase>,
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: WorldPos,
    pub projection: Option<Projection>,
    /// Presentation blinks the ship while this holds.
    pub invincible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: WorldPos,
    pub projection: Projection,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    pub position: WorldPos,
    pub projection: Projection,
    pub width: f64,
    /// Crystal rotation angle (radians); zero for pyramids.
    pub spin: f64,
    /// Crystal hue cycle position (degrees); zero for pyramids.
    pub hue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: WorldPos,
    pub projection: Projection,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: WorldPos,
    pub projection: Projection,
    /// Current animation frame index.
    pub frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextView {
    pub position: WorldPos,
    pub projection: Projection,
    /// Point value the popup displays.
    pub value: u64,
    /// Remaining life fraction (1.0 = fresh) for fade-out.
    pub life: f64,
}
