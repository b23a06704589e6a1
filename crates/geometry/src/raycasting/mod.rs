use serde::{Deserialize, Serialize};

use crate::*;

pub(crate) mod ray_segment;

pub use ray_segment::*;

/// Below this magnitude, the cross product of a ray and a segment's directions counts as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-3;

/// Rays whose x direction is smaller than this in magnitude are pushed out to it before solving.
pub const VERTICAL_NUDGE: f64 = 1e-3;

/// The result of casting a ray against a segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Where did the ray hit the segment?
    pub point: Point,
    /// Multiple of the ray's direction vector at which the hit happened (T1).
    pub ray_parameter: f64,
    /// Where along the segment the hit is, from 0 at `a` to 1 at `b` (T2).
    pub segment_parameter: f64,
    /// Angle of the ray which produced this hit, in radians.
    pub angle: f64,
}

/// Thresholds for the numerically awkward cases of ray casting.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastTolerances {
    pub parallel_epsilon: f64,
    pub vertical_nudge: f64,
}

impl Default for RaycastTolerances {
    fn default() -> Self {
        RaycastTolerances {
            parallel_epsilon: PARALLEL_EPSILON,
            vertical_nudge: VERTICAL_NUDGE,
        }
    }
}
