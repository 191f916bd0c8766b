//! Collision resolution.
//!
//! Runs once per tick after all entity updates. Projectile hits resolve
//! before the player sweep, so an enemy killed this tick can no longer
//! damage the player in the same tick.

use gridfire_core::constants::*;

use crate::entities::{Enemy, Obstacle, Projectile};
use crate::player::Player;
use crate::pool::Pool;

/// A projectile kill, carrying the enemy position for scoring and effects.
#[derive(Debug, Clone, Copy)]
pub struct KillEvent {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Resolve all intersections for this tick.
///
/// Kills land in `kills`; enemies destroyed by ramming the player land in
/// `crashes` (effects only, no score). Returns whether the player was hit.
/// The invincibility gate applies to the whole player sweep at once —
/// checked once per tick, never per entity.
pub fn run(
    projectiles: &mut Pool<Projectile>,
    enemies: &mut Pool<Enemy>,
    obstacles: &mut Pool<Obstacle>,
    player: &Player,
    global_speed: f64,
    invincible: bool,
    kills: &mut Vec<KillEvent>,
    crashes: &mut Vec<KillEvent>,
) -> bool {
    resolve_projectile_hits(projectiles, enemies, global_speed, kills);

    if invincible {
        return false;
    }
    resolve_player_hits(enemies, obstacles, player, crashes)
}

/// Projectile-vs-enemy, with a dynamic swept-Z window.
///
/// Both parties cover large Z distances per tick and would tunnel past an
/// exact-overlap test, so the depth check accepts anything inside a window
/// that widens with the world speed. Within the window a circle-circle
/// test in the screen-facing plane decides the hit.
fn resolve_projectile_hits(
    projectiles: &mut Pool<Projectile>,
    enemies: &mut Pool<Enemy>,
    global_speed: f64,
    kills: &mut Vec<KillEvent>,
) {
    let window = SWEPT_WINDOW_MIN.max(global_speed + SWEPT_WINDOW_SPEED_PAD);

    for projectile in projectiles.slots_mut() {
        if !projectile.active {
            continue;
        }

        for enemy in enemies.slots_mut() {
            if !enemy.active {
                continue;
            }
            if (projectile.z - enemy.z).abs() >= window {
                continue;
            }

            let dx = projectile.x - enemy.x;
            let dy = projectile.y - enemy.y;
            let hit_radius = enemy.width * ENEMY_HIT_SCALE / 2.0 + projectile.width / 2.0;
            if dx * dx + dy * dy < hit_radius * hit_radius {
                projectile.active = false;
                enemy.active = false;
                kills.push(KillEvent {
                    x: enemy.x,
                    y: enemy.y,
                    z: enemy.z,
                });
                break;
            }
        }
    }
}

/// Player-vs-enemy/obstacle, resolved in array order.
///
/// The depth test is a true swept crossing of the player's plane, with a
/// proximity fallback for entities that linger near it without crossing.
/// The hit flag is OR-accumulated across the whole sweep: however many
/// entities connect this tick, the caller applies exactly one health
/// decrement and one invincibility window.
fn resolve_player_hits(
    enemies: &mut Pool<Enemy>,
    obstacles: &mut Pool<Obstacle>,
    player: &Player,
    crashes: &mut Vec<KillEvent>,
) -> bool {
    let player_z = player.z();
    let mut hit = false;

    for enemy in enemies.slots_mut() {
        if !enemy.active {
            continue;
        }
        if !crossed_player_plane(enemy.prev_z, enemy.z, player_z) {
            continue;
        }
        if (enemy.x - player.x).abs() < (enemy.width + PLAYER_WIDTH) / 2.0 {
            hit = true;
            // Ramming destroys the enemy; no score for it.
            enemy.active = false;
            crashes.push(KillEvent {
                x: enemy.x,
                y: enemy.y,
                z: enemy.z,
            });
        }
    }

    for obstacle in obstacles.slots_mut() {
        if !obstacle.active {
            continue;
        }
        if !crossed_player_plane(obstacle.prev_z, obstacle.z, player_z) {
            continue;
        }
        if (obstacle.x - player.x).abs() < (obstacle.width + PLAYER_WIDTH) / 2.0 {
            // Obstacles register the hit but stay in the world.
            hit = true;
        }
    }

    hit
}

/// Swept depth test against the player's fixed plane, plus the proximity
/// fallback: a crossing alone would miss an entity that decelerates onto
/// the plane without passing it.
fn crossed_player_plane(prev_z: f64, z: f64, player_z: f64) -> bool {
    (prev_z >= player_z && z <= player_z) || (z - player_z).abs() < PLAYER_PROXIMITY_WINDOW
}
