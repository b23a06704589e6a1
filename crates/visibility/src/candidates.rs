//! Choosing the angles at which rays get cast.
use sightcone_geometry::angle::{in_cone, sweep_offset};
use sightcone_geometry::{Point, Segment};

use crate::Tolerances;

/// The cone swept by one query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Cone {
    pub(crate) pivot: Point,
    /// Angle the cone is centered on, in radians.
    pub(crate) direction: f64,
    /// Radians from the center to either edge, in `[0, pi]`.
    pub(crate) half_width: f64,
}

impl Cone {
    pub(crate) fn start(&self) -> f64 {
        self.direction - self.half_width
    }

    pub(crate) fn end(&self) -> f64 {
        self.direction + self.half_width
    }
}

/// An angle to cast a ray at, along with how far it is from the start of the cone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) angle: f64,
    /// Sort key: 0 at the start edge, `2 * half_width` at the end edge.
    pub(crate) sweep: f64,
}

/// Obstacle endpoints with near-duplicates removed, keeping the first occurrence.
///
/// Polygons share every corner between two segments, so without this each corner would be probed twice.
pub(crate) fn distinct_endpoints(segments: &[Segment], epsilon: f64) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(segments.len() * 2);
    for p in segments.iter().flat_map(|s| s.endpoints()) {
        if !points.iter().any(|u| u.approx_eq(&p, epsilon)) {
            points.push(p);
        }
    }
    points
}

/// The two cone edges, followed by three angles for every distinct endpoint inside the cone.
///
/// An empty cone gets only its edges: a corner on the centre line would otherwise add perturbed rays outside it.
///
/// The edges get their sort keys directly rather than through [sweep_offset]: for a full circle both edges point the
/// same way, and the end edge has to sort last so that the fan closes.
pub(crate) fn candidate_angles(
    cone: &Cone,
    segments: &[Segment],
    tolerances: &Tolerances,
) -> Vec<Candidate> {
    let mut candidates = vec![
        Candidate {
            angle: cone.start(),
            sweep: 0.0,
        },
        Candidate {
            angle: cone.end(),
            sweep: 2.0 * cone.half_width,
        },
    ];
    if cone.half_width <= 0.0 {
        return candidates;
    }

    let eps = tolerances.angle_perturbation;
    for corner in distinct_endpoints(segments, tolerances.dedup_epsilon) {
        let angle = corner.angle_from(&cone.pivot);
        if !in_cone(angle, cone.direction, cone.half_width) {
            continue;
        }

        for a in [angle - eps, angle, angle + eps] {
            candidates.push(Candidate {
                angle: a,
                sweep: sweep_offset(a, cone.direction, cone.half_width),
            });
        }
    }

    candidates
}
