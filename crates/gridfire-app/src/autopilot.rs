//! Demo autopilot — synthesizes the pressed-key snapshot from the frame
//! snapshot, standing in for a human on the keyboard.

use gridfire_core::commands::InputState;
use gridfire_core::state::FrameSnapshot;

/// Lateral gap below which the autopilot stops correcting.
const STEER_DEADBAND: f64 = 30.0;

/// Steer toward the nearest enemy's lane and hold fire.
pub fn decide(snapshot: &FrameSnapshot) -> InputState {
    let player_x = snapshot.player.position.x;

    // Nearest enemy by depth; sit still when the lanes are clear.
    let target_x = snapshot
        .enemies
        .iter()
        .min_by(|a, b| a.position.z.total_cmp(&b.position.z))
        .map(|e| e.position.x);

    let mut input = InputState {
        fire: true,
        ..Default::default()
    };

    if let Some(target_x) = target_x {
        let gap = target_x - player_x;
        if gap < -STEER_DEADBAND {
            input.left = true;
        } else if gap > STEER_DEADBAND {
            input.right = true;
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfire_core::projector::Camera;
    use gridfire_core::state::EnemyView;
    use gridfire_core::types::WorldPos;

    fn enemy_at(x: f64, z: f64) -> EnemyView {
        let camera = Camera::new(400.0, 640.0, 360.0);
        EnemyView {
            kind: Default::default(),
            position: WorldPos::new(x, 200.0, z),
            projection: camera.project(x, 200.0, z).unwrap(),
            width: 60.0,
        }
    }

    #[test]
    fn test_holds_fire_always() {
        let snapshot = FrameSnapshot::default();
        assert!(decide(&snapshot).fire);
    }

    #[test]
    fn test_steers_toward_nearest_enemy() {
        let mut snapshot = FrameSnapshot::default();
        snapshot.enemies.push(enemy_at(800.0, 4000.0));
        snapshot.enemies.push(enemy_at(-500.0, 1000.0));

        // The closer enemy (z=1000) is to the left.
        let input = decide(&snapshot);
        assert!(input.left);
        assert!(!input.right);
    }

    #[test]
    fn test_deadband_stops_jitter() {
        let mut snapshot = FrameSnapshot::default();
        snapshot.enemies.push(enemy_at(10.0, 1000.0));

        let input = decide(&snapshot);
        assert!(!input.left && !input.right);
    }
}
