//! Test a ray against a line segment.
use crate::raycasting::*;

/// A ray-segment intersection test using the parametric form of both lines.
///
/// The ray is `origin + t1 * direction` with `t1 >= 0`, the segment is `a + t2 * (b - a)` with `t2` in `[0, 1]`.
/// Solving the 2x2 system gives both parameters.  Parallel lines (which includes zero-length segments) never hit.
pub fn ray_segment_test(
    ray: &Ray,
    segment: &Segment,
    tolerances: &RaycastTolerances,
) -> Option<Intersection> {
    let r_p = ray.origin;
    let mut r_d = ray.direction();
    let s_p = segment.a;
    let s_d = segment.direction();

    // We divide by the ray's x direction below, so a vertical ray would blow up.  Push it slightly off vertical,
    // keeping the side it leans toward so that neighbouring rays keep their order.
    if r_d.x.abs() < tolerances.vertical_nudge {
        r_d.x = tolerances.vertical_nudge.copysign(r_d.x);
    }

    let denom = s_d.x * r_d.y - s_d.y * r_d.x;
    if denom.abs() < tolerances.parallel_epsilon {
        return None;
    }

    let t2 = (r_d.x * (s_p.y - r_p.y) + r_d.y * (r_p.x - s_p.x)) / denom;
    let t1 = (s_p.x + s_d.x * t2 - r_p.x) / r_d.x;

    // Written so that NaN fails both checks.
    if !(t1 >= 0.0 && (0.0..=1.0).contains(&t2)) {
        return None;
    }

    // Evaluate on the segment rather than the ray: the nudge moved the ray, but the hit must stay on the obstacle.
    Some(Intersection {
        point: segment.evaluate(t2),
        ray_parameter: t1,
        segment_parameter: t2,
        angle: ray.angle(),
    })
}

/// Cast a ray against a set of segments and return the hit closest to the ray's origin.
///
/// When two segments are hit at the same parameter, the earlier one in the slice wins.
pub fn nearest_hit(
    ray: &Ray,
    segments: &[Segment],
    tolerances: &RaycastTolerances,
) -> Option<Intersection> {
    let mut closest: Option<Intersection> = None;
    for segment in segments {
        let Some(hit) = ray_segment_test(ray, segment, tolerances) else {
            continue;
        };
        match closest {
            Some(ref c) if c.ray_parameter <= hit.ray_parameter => {}
            _ => closest = Some(hit),
        }
    }
    closest
}
