use std::f64::consts::PI;

use log::*;
use sightcone_geometry::{nearest_hit, point_in_polygon, Intersection, Point, Ray, Segment, Shape};

use crate::candidates::*;
use crate::errors::*;
use crate::{Scene, Tolerances};

/// Computes field-of-view polygons against a set of opaque segments.
///
/// Queries take `&self` and mutators take `&mut self`, so sharing a calculator between threads needs the usual
/// single writer or many readers arrangement (for example an `RwLock`).  Nothing is cached between queries: changing
/// the obstacles never triggers any work.
#[derive(Debug, Clone, Default)]
pub struct VisibilityCalculator {
    segments: Vec<Segment>,
    tolerances: Tolerances,
}

fn check_segments(segments: &[Segment], first_index: usize) -> Result<()> {
    for (i, segment) in segments.iter().enumerate() {
        if segment.check_finite().is_err() {
            return Err(VisibilityError::NonFiniteSegment {
                index: first_index + i,
                segment: *segment,
            });
        }
    }
    Ok(())
}

fn check_point(what: &'static str, point: Point) -> Result<Point> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(VisibilityError::NonFinitePoint { what, point })
    }
}

impl VisibilityCalculator {
    pub fn new(segments: Vec<Segment>) -> Result<VisibilityCalculator> {
        check_segments(&segments, 0)?;
        Ok(VisibilityCalculator {
            segments,
            tolerances: Tolerances::default(),
        })
    }

    /// Build a calculator for all of a scene's obstacles, using the scene's tolerances.
    pub fn from_scene(scene: &Scene) -> Result<VisibilityCalculator> {
        Ok(VisibilityCalculator::new(scene.segments())?.with_tolerances(scene.tolerances))
    }

    #[must_use = "This doesn't mutate the calculator in-place"]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> VisibilityCalculator {
        self.tolerances = tolerances;
        self
    }

    pub fn set_tolerances(&mut self, tolerances: Tolerances) {
        self.tolerances = tolerances;
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn add_segment(&mut self, segment: Segment) -> Result<()> {
        check_segments(std::slice::from_ref(&segment), self.segments.len())?;
        self.segments.push(segment);
        Ok(())
    }

    /// Add every edge of a shape.  If any edge is invalid, nothing is added.
    pub fn add_shape(&mut self, shape: &Shape) -> Result<()> {
        let new_segments = shape.segments();
        check_segments(&new_segments, self.segments.len())?;
        self.segments.extend(new_segments);
        Ok(())
    }

    /// Swap out the whole obstacle set.  On error, the old set is kept.
    pub fn replace_segments(&mut self, segments: Vec<Segment>) -> Result<()> {
        check_segments(&segments, 0)?;
        self.segments = segments;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Compute the region visible from `pivot` when facing `aim_point` with a cone `fov_degrees` wide.
    ///
    /// The result is a closed fan: `pivot`, then the boundary of the visible region in order of increasing angle,
    /// then `pivot` again.  It can be filled directly.  Rays which escape without hitting anything are left out, so
    /// a scene without an enclosing boundary may produce gaps; [sightcone_geometry::Aabb::segments] gives one.
    ///
    /// Degenerate queries don't fail:
    ///
    /// - If `aim_point == pivot` there is no direction, so the cone faces +x (angle 0).
    /// - A `fov_degrees` of 0 or less is an empty cone: both edges are the same ray, so the fan has no area.
    /// - A `fov_degrees` of 360 or more is the full circle.
    ///
    /// NaN or infinite inputs are rejected with an error before any work is done.
    pub fn compute_visibility_polygon(
        &self,
        pivot: Point,
        aim_point: Point,
        fov_degrees: f64,
    ) -> Result<Vec<Point>> {
        let hits = self.cast_rays(pivot, aim_point, fov_degrees)?;
        let mut polygon = Vec::with_capacity(hits.len() + 2);
        polygon.push(pivot);
        polygon.extend(hits.iter().map(|h| h.point));
        polygon.push(pivot);
        Ok(polygon)
    }

    /// The hits behind [Self::compute_visibility_polygon], in fan order.
    ///
    /// Each hit's angle is the angle the ray was cast at.  Useful for drawing debug rays.
    pub fn cast_rays(
        &self,
        pivot: Point,
        aim_point: Point,
        fov_degrees: f64,
    ) -> Result<Vec<Intersection>> {
        let cone = self.cone(pivot, aim_point, fov_degrees)?;
        let candidates = candidate_angles(&cone, &self.segments, &self.tolerances);
        let candidate_count = candidates.len();

        let mut hits: Vec<(f64, Intersection)> = candidates
            .into_iter()
            .filter_map(|c| {
                let ray = Ray::from_angle(pivot, c.angle);
                nearest_hit(&ray, &self.segments, &self.tolerances.raycast).map(|hit| {
                    (
                        c.sweep,
                        Intersection {
                            angle: c.angle,
                            ..hit
                        },
                    )
                })
            })
            .collect();

        // Stable, so that hits at the same sweep keep the order their candidates were generated in.
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));

        trace!(
            "Cast {} rays from {} against {} segments, {} hit",
            candidate_count,
            pivot,
            self.segments.len(),
            hits.len()
        );

        Ok(hits.into_iter().map(|(_, hit)| hit).collect())
    }

    /// Line of sight: is `target` inside the visibility polygon for this query?
    pub fn is_visible(
        &self,
        pivot: Point,
        aim_point: Point,
        fov_degrees: f64,
        target: Point,
    ) -> Result<bool> {
        let target = check_point("target", target)?;
        let polygon = self.compute_visibility_polygon(pivot, aim_point, fov_degrees)?;
        Ok(point_in_polygon(&target, &polygon))
    }

    fn cone(&self, pivot: Point, aim_point: Point, fov_degrees: f64) -> Result<Cone> {
        let pivot = check_point("pivot", pivot)?;
        let aim_point = check_point("aim point", aim_point)?;
        if !fov_degrees.is_finite() {
            return Err(VisibilityError::NonFiniteFov(fov_degrees));
        }

        let direction = if aim_point == pivot {
            debug!(
                "Aim point is the pivot {}, facing along +x instead",
                pivot
            );
            0.0
        } else {
            aim_point.angle_from(&pivot)
        };

        let half_width = if fov_degrees <= 0.0 {
            debug!("Field of view of {} degrees is an empty cone", fov_degrees);
            0.0
        } else if fov_degrees >= 360.0 {
            PI
        } else {
            fov_degrees * PI / 360.0
        };

        Ok(Cone {
            pivot,
            direction,
            half_width,
        })
    }
}
