//! Player input integration and firing.

use gridfire_core::commands::InputState;
use gridfire_core::constants::*;
use gridfire_core::events::AudioCue;

use crate::entities::Projectile;
use crate::player::Player;
use crate::pool::Pool;

/// Integrate one tick of player input: steer, clamp, bob, fire.
///
/// Input is the held/not-held snapshot for this tick; there is no event
/// queue to drain.
pub fn run(
    player: &mut Player,
    input: &InputState,
    projectiles: &mut Pool<Projectile>,
    audio_events: &mut Vec<AudioCue>,
) {
    player.vx += input.steer() * PLAYER_ACCEL;
    player.vx *= PLAYER_DRAG;
    player.x = (player.x + player.vx).clamp(-PLAYER_BOUND_X, PLAYER_BOUND_X);

    player.bob_phase += PLAYER_BOB_RATE;

    if player.fire_cooldown > 0 {
        player.fire_cooldown -= 1;
    }

    if input.fire && player.fire_cooldown == 0 {
        // Pool exhaustion drops the shot; the cooldown is only consumed by
        // a shot that actually left.
        if let Some(projectile) = projectiles.acquire() {
            projectile.spawn(player.x, player.y(), player.z());
            player.fire_cooldown = FIRE_COOLDOWN_TICKS;
            audio_events.push(AudioCue::Shoot);
        }
    }
}
