//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Projection ---

/// Camera focal length in screen units.
pub const FOCAL_LENGTH: f64 = 400.0;

/// Nominal screen width the projector centers on.
pub const SCREEN_WIDTH: f64 = 1280.0;

/// Nominal screen height the projector centers on.
pub const SCREEN_HEIGHT: f64 = 720.0;

// --- World bounds ---

/// Depth at which inbound entities spawn.
pub const SPAWN_Z: f64 = 7000.0;

/// Maximum draw distance; projectiles past this deactivate.
pub const MAX_DRAW_DISTANCE: f64 = 8000.0;

/// Near-clip despawn threshold for inbound entities.
/// Leaves a margin above the projector's z <= 0 failure boundary.
pub const NEAR_CLIP_Z: f64 = 10.0;

/// Vertical floor reference below the camera.
pub const FLOOR_Y: f64 = 200.0;

/// Half-width of the lateral spawn band.
pub const FIELD_HALF_WIDTH: f64 = 1500.0;

// --- Speed ---

/// World scroll speed at session start (units per tick).
pub const BASE_SPEED: f64 = 20.0;

/// Added to the speed baseline at each wave transition.
pub const WAVE_SPEED_INCREMENT: f64 = 2.0;

// --- Enemies ---

pub const ENEMY_WIDTH: f64 = 60.0;
pub const ENEMY_HEIGHT: f64 = 60.0;

/// Per-kind forward speed added to the global speed.
pub const DIVER_SPEED: f64 = 20.0;
pub const WEAVER_SPEED: f64 = 15.0;
pub const SWEEPER_SPEED: f64 = 30.0;

/// Weaver lateral tracking filter coefficient (per tick).
pub const WEAVER_TRACK_RATE: f64 = 0.02;

/// Sweeper lateral drift (units per tick).
pub const SWEEPER_DRIFT: f64 = 10.0;

/// Faster sweeper drift used at higher difficulty.
pub const SWEEPER_DRIFT_FAST: f64 = 16.0;

/// Wave index (0-based) from which sweepers use the fast drift.
pub const FAST_SWEEPER_WAVE: u32 = 6;

/// Score at which the global lateral jitter kicks in for all enemies.
pub const JITTER_SCORE_THRESHOLD: u64 = 5000;

/// Amplitude of the global lateral jitter (units per tick).
pub const JITTER_AMPLITUDE: f64 = 4.0;

/// Angular frequency of the global lateral jitter (radians per tick).
pub const JITTER_FREQUENCY: f64 = 0.05;

// --- Obstacles ---

pub const OBSTACLE_WIDTH: f64 = 70.0;

/// Pyramid vertical bob amplitude and rate.
pub const PYRAMID_BOB_AMPLITUDE: f64 = 30.0;
pub const PYRAMID_BOB_RATE: f64 = 0.05;

/// Crystal rotation rate (radians per tick) and hue cycle rate (degrees per tick).
pub const CRYSTAL_SPIN_RATE: f64 = 0.1;
pub const CRYSTAL_HUE_RATE: f64 = 3.0;

// --- Projectiles ---

/// Projectile forward speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 10.0;

pub const PROJECTILE_WIDTH: f64 = 10.0;

// --- Player ---

/// The player's fixed depth plane.
pub const PLAYER_Z: f64 = 300.0;

/// Vertical base the bob oscillator swings around; the ship rides the
/// floor line so projectiles leave at enemy height.
pub const PLAYER_BASE_Y: f64 = FLOOR_Y;

pub const PLAYER_WIDTH: f64 = 80.0;

/// Lateral acceleration per tick while a steer key is held.
pub const PLAYER_ACCEL: f64 = 3.0;

/// Lateral velocity damping factor applied each tick.
pub const PLAYER_DRAG: f64 = 0.9;

/// Lateral position clamp.
pub const PLAYER_BOUND_X: f64 = 1400.0;

pub const PLAYER_BOB_RATE: f64 = 0.08;
pub const PLAYER_BOB_AMPLITUDE: f64 = 12.0;

/// Minimum ticks between shots.
pub const FIRE_COOLDOWN_TICKS: u32 = 8;

// --- Collision ---

/// Floor of the projectile-vs-enemy swept-Z window.
pub const SWEPT_WINDOW_MIN: f64 = 60.0;

/// Added to the global speed to widen the swept-Z window as speed rises.
pub const SWEPT_WINDOW_SPEED_PAD: f64 = 40.0;

/// Enemy hitbox inflation for projectile hits.
pub const ENEMY_HIT_SCALE: f64 = 1.3;

/// Player proximity fallback window around the player depth plane.
pub const PLAYER_PROXIMITY_WINDOW: f64 = 50.0;

/// Invincibility window granted after a player hit (ticks).
pub const INVINCIBILITY_TICKS: u32 = 120;

// --- Health / scoring ---

pub const STARTING_HEALTH: u32 = 3;
pub const MAX_HEALTH: u32 = 5;

/// Base points per kill before the combo multiplier.
pub const KILL_SCORE: u64 = 100;

/// Ticks the combo survives without a fresh kill.
pub const COMBO_WINDOW_TICKS: u32 = 180;

/// Combo milestones fire at every multiple of this count.
pub const COMBO_MILESTONE_INTERVAL: u32 = 10;

/// Score bonus when a milestone lands at full health.
pub const MILESTONE_SCORE_BONUS: u64 = 500;

// --- Waves ---

/// Inter-wave delay (ticks).
pub const WAVE_DELAY_TICKS: u32 = 180;

/// Countdown cue ticks within the inter-wave delay.
pub const WAVE_COUNTDOWN_CUES: [u32; 4] = [60, 90, 120, 150];

/// Grace period after the last scheduled spawn before completion is checked.
pub const WAVE_CLEAR_GRACE: u32 = 200;

/// Force-complete a wave this long after its last scheduled spawn.
/// Safety net against an enemy that never reaches the despawn threshold.
pub const WAVE_STALL_TIMEOUT: u32 = 3600;

/// Number of authored waves before procedural generation takes over.
pub const STATIC_WAVE_COUNT: u32 = 3;

/// Wave index (0-based) from which squad spawns may appear.
pub const SQUAD_WAVE_THRESHOLD: u32 = 6;

/// Delay spacing between members of a squad (ticks).
pub const SQUAD_SPACING_TICKS: u32 = 20;

// --- Pools ---

pub const PROJECTILE_POOL_SIZE: usize = 50;
pub const ENEMY_POOL_SIZE: usize = 30;
pub const OBSTACLE_POOL_SIZE: usize = 100;
pub const EXPLOSION_POOL_SIZE: usize = 20;
pub const TEXT_POOL_SIZE: usize = 20;

// --- Effects ---

/// Ticks per explosion animation frame.
pub const EXPLOSION_FRAME_TICKS: u32 = 4;

/// Number of explosion animation frames.
pub const EXPLOSION_FRAMES: u32 = 4;

/// Floating text lifetime (ticks) and rise speed (units per tick).
pub const TEXT_LIFE_TICKS: u32 = 45;
pub const TEXT_RISE_SPEED: f64 = 2.0;
