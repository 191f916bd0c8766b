//! Per-kind movement parameters.

use gridfire_core::constants::*;
use gridfire_core::enums::EnemyKind;

/// Movement parameters for one enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    /// Forward speed added to the global scroll speed (units per tick).
    pub forward_speed: f64,
    /// Lateral drift per tick; zero for kinds that do not drift.
    pub drift: f64,
}

/// Look up the movement profile for an enemy kind.
///
/// `fast_drift` selects the higher-difficulty sweeper drift; it has no
/// effect on other kinds.
pub fn get_profile(kind: EnemyKind, fast_drift: bool) -> EnemyProfile {
    match kind {
        EnemyKind::Diver => EnemyProfile {
            forward_speed: DIVER_SPEED,
            drift: 0.0,
        },
        EnemyKind::Weaver => EnemyProfile {
            forward_speed: WEAVER_SPEED,
            drift: 0.0,
        },
        EnemyKind::Sweeper => EnemyProfile {
            forward_speed: SWEEPER_SPEED,
            drift: if fast_drift {
                SWEEPER_DRIFT_FAST
            } else {
                SWEEPER_DRIFT
            },
        },
    }
}
