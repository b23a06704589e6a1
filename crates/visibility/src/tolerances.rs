use serde::{Deserialize, Serialize};

use sightcone_geometry::RaycastTolerances;

/// Each obstacle corner is probed by rays this many radians to either side of it, as well as by one straight at it.
///
/// One of the two offset rays slips past the corner and finds whatever is behind it.
pub const ANGLE_PERTURBATION: f64 = 1e-4;

/// Obstacle endpoints closer than this on both axes count as the same corner.
pub const POINT_DEDUP_EPSILON: f64 = 1e-9;

/// Numeric thresholds for a [crate::VisibilityCalculator].
///
/// Missing fields deserialize to their defaults, so a scene file only needs to mention the ones it changes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub raycast: RaycastTolerances,
    pub angle_perturbation: f64,
    pub dedup_epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            raycast: RaycastTolerances::default(),
            angle_perturbation: ANGLE_PERTURBATION,
            dedup_epsilon: POINT_DEDUP_EPSILON,
        }
    }
}
