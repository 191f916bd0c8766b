//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns every pool and all session state, processes session
//! commands at tick boundaries, runs all systems in a fixed order, and
//! produces `FrameSnapshot`s. One tick runs to completion synchronously;
//! no partial-tick state is ever observable.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridfire_behavior::steering::global_jitter;
use gridfire_core::commands::{InputState, SessionCommand};
use gridfire_core::config::GameConfig;
use gridfire_core::constants::FAST_SWEEPER_WAVE;
use gridfire_core::enums::GamePhase;
use gridfire_core::events::AudioCue;
use gridfire_core::projector::Camera;
use gridfire_core::state::FrameSnapshot;
use gridfire_core::types::SimTime;

use crate::entities::{Enemy, EnemyUpdateContext, Explosion, FloatingText, Obstacle, Projectile};
use crate::player::Player;
use crate::pool::Pool;
use crate::session::SessionState;
use crate::systems;
use crate::systems::collision::KillEvent;
use crate::systems::director::WaveDirector;

/// Configuration for starting a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same wave scripts.
    pub seed: u64,
    pub config: GameConfig,
    /// Best score from the persistence port, read once at startup.
    pub high_score: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            config: GameConfig::default(),
            high_score: 0,
        }
    }
}

/// The simulation engine. Owns all pools and session state.
pub struct GameEngine {
    config: GameConfig,
    camera: Camera,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SessionCommand>,
    audio_events: Vec<AudioCue>,
    player: Player,
    session: SessionState,
    director: WaveDirector,
    high_score: u64,

    enemies: Pool<Enemy>,
    obstacles: Pool<Obstacle>,
    projectiles: Pool<Projectile>,
    explosions: Pool<Explosion>,
    texts: Pool<FloatingText>,

    // Per-tick event buffers, reused to avoid allocation in the hot loop.
    kill_buffer: Vec<KillEvent>,
    crash_buffer: Vec<KillEvent>,
}

impl GameEngine {
    pub fn new(sim: SimConfig) -> Self {
        let config = sim.config;
        Self {
            camera: Camera::from_config(&config),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(sim.seed),
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
            player: Player::new(),
            session: SessionState::new(&config),
            director: WaveDirector::new(),
            high_score: sim.high_score,
            enemies: Pool::new(config.enemy_pool),
            obstacles: Pool::new(config.obstacle_pool),
            projectiles: Pool::new(config.projectile_pool),
            explosions: Pool::new(config.explosion_pool),
            texts: Pool::new(config.text_pool),
            kill_buffer: Vec::new(),
            crash_buffer: Vec::new(),
            config,
        }
    }

    /// Queue a session command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems(input);
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(
            &self.camera,
            &self.time,
            self.phase,
            &self.config,
            &self.session,
            self.high_score,
            &self.player,
            &self.director,
            &self.enemies,
            &self.obstacles,
            &self.projectiles,
            &self.explosions,
            &self.texts,
            audio_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &Pool<Enemy> {
        &self.enemies
    }

    pub fn obstacles(&self) -> &Pool<Obstacle> {
        &self.obstacles
    }

    pub fn projectiles(&self) -> &Pool<Projectile> {
        &self.projectiles
    }

    pub fn explosions(&self) -> &Pool<Explosion> {
        &self.explosions
    }

    // --- Test hooks ---

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut Pool<Enemy> {
        &mut self.enemies
    }

    #[cfg(test)]
    pub(crate) fn projectiles_mut(&mut self) -> &mut Pool<Projectile> {
        &mut self.projectiles
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Pool<Obstacle> {
        &mut self.obstacles
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    #[cfg(test)]
    pub(crate) fn director_mut(&mut self) -> &mut WaveDirector {
        &mut self.director
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Start => {
                if matches!(self.phase, GamePhase::Attract | GamePhase::GameOver) {
                    self.reset_session();
                    self.phase = GamePhase::Running;
                    self.director
                        .start(&mut self.session, &mut self.rng, &mut self.audio_events);
                }
            }
            SessionCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            SessionCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            SessionCommand::Reset => {
                self.reset_session();
                self.phase = GamePhase::Attract;
            }
        }
    }

    /// Full session reset: every pool slot released, every counter zeroed.
    /// Atomic within this call — nothing observes a half-reset session.
    fn reset_session(&mut self) {
        self.enemies.clear();
        self.obstacles.clear();
        self.projectiles.clear();
        self.explosions.clear();
        self.texts.clear();
        self.player.reset();
        self.session = SessionState::new(&self.config);
        self.director = WaveDirector::new();
        self.time = SimTime::default();
        self.kill_buffer.clear();
        self.crash_buffer.clear();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputState) {
        // 1. Wave director: countdown cues or scheduled spawning.
        self.director.run(
            &mut self.enemies,
            &mut self.obstacles,
            &mut self.session,
            &mut self.rng,
            &mut self.audio_events,
        );

        // 2. Player input: steer, bob, fire.
        systems::player::run(
            &mut self.player,
            input,
            &mut self.projectiles,
            &mut self.audio_events,
        );

        // 3. Entity update sweep. Every pool walks all slots, O(capacity).
        let enemy_ctx = EnemyUpdateContext {
            global_speed: self.session.speed,
            player_x: self.player.x,
            fast_drift: self.director.wave_index() >= FAST_SWEEPER_WAVE,
            jitter: global_jitter(self.time.tick, self.session.score),
        };
        for enemy in self.enemies.slots_mut() {
            enemy.update(&enemy_ctx);
        }
        for obstacle in self.obstacles.slots_mut() {
            obstacle.update(self.session.speed);
        }
        for projectile in self.projectiles.slots_mut() {
            projectile.update();
        }
        for explosion in self.explosions.slots_mut() {
            explosion.update(self.session.speed);
        }
        for text in self.texts.slots_mut() {
            text.update();
        }

        // 4. Collision resolution, after all updates.
        let player_hit = systems::collision::run(
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.obstacles,
            &self.player,
            self.session.speed,
            self.session.invincibility_timer > 0,
            &mut self.kill_buffer,
            &mut self.crash_buffer,
        );

        // 5. Consume collision events.
        for kill in self.kill_buffer.drain(..) {
            systems::scoring::apply_kill(
                &mut self.session,
                &self.config,
                &kill,
                &mut self.explosions,
                &mut self.texts,
                &mut self.audio_events,
            );
        }
        for crash in self.crash_buffer.drain(..) {
            if let Some(explosion) = self.explosions.acquire() {
                explosion.spawn(crash.x, crash.y, crash.z);
            }
        }
        if player_hit {
            let dead = systems::scoring::apply_damage(&mut self.session, &mut self.audio_events);
            if dead {
                self.game_over();
            }
        }

        // 6. Combo decay and invincibility countdown.
        systems::scoring::tick_timers(&mut self.session);
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        if self.session.score > self.high_score {
            self.high_score = self.session.score;
            self.session.new_high_score = true;
        }
    }
}
