//! Angle normalization shared by everything that sorts by angle.
//!
//! Angles come out of `atan2` in `[-pi, pi]`, but cones can straddle the `pi`/`-pi` seam.  Everything that compares
//! angles goes through these functions so that there is exactly one place where the wraparound is handled.
use std::f64::consts::{PI, TAU};

/// Wrap an angle into `[-pi, pi)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let mut shifted = (angle + PI).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if shifted >= TAU {
        shifted -= TAU;
    }
    shifted - PI
}

/// How far `angle` is past the start of a cone, sweeping in the direction of increasing angle.
///
/// The cone is centered on `direction` and spans `half_width` radians to either side, so it starts at
/// `direction - half_width`.  The result is `angle - start` modulo `2 * pi`, placed in the window
/// `[half_width - pi, half_width + pi)`: angles inside the cone map to `[0, 2 * half_width]`, and angles just
/// outside either edge stay just outside instead of wrapping around to the far end.
pub fn sweep_offset(angle: f64, direction: f64, half_width: f64) -> f64 {
    wrap_angle(angle - direction) + half_width
}

/// Is `angle` inside the cone centered on `direction`, edges included?
pub fn in_cone(angle: f64, direction: f64, half_width: f64) -> bool {
    wrap_angle(angle - direction).abs() <= half_width
}

#[cfg(test)]
mod tests {
    use approx::*;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_wrap_basics() {
        assert_relative_eq!(wrap_angle(0.0), 0.0);
        assert_relative_eq!(wrap_angle(PI), -PI);
        assert_relative_eq!(wrap_angle(-PI), -PI);
        assert_relative_eq!(wrap_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(5.0 * TAU + 0.25), 0.25, epsilon = 1e-12);
        assert!(wrap_angle(-1e-18) < PI);
    }

    // A cone facing left straddles the seam: start is just below pi, end is just above -pi.
    #[test]
    fn test_sweep_across_seam() {
        let direction = PI;
        let half = 0.5;
        let before_seam = PI - 0.25;
        let after_seam = -PI + 0.25;
        let a = sweep_offset(before_seam, direction, half);
        let b = sweep_offset(after_seam, direction, half);
        assert_relative_eq!(a, 0.25, epsilon = 1e-12);
        assert_relative_eq!(b, 0.75, epsilon = 1e-12);
        assert!(a < b);
        assert!(in_cone(before_seam, direction, half));
        assert!(in_cone(after_seam, direction, half));
        assert!(!in_cone(0.0, direction, half));
    }

    #[test]
    fn test_sweep_edges_stay_outside() {
        let direction = -PI / 2.0;
        let half = PI / 4.0;
        let start = direction - half;
        let end = direction + half;
        assert_relative_eq!(sweep_offset(start, direction, half), 0.0, epsilon = 1e-12);
        assert_relative_eq!(sweep_offset(end, direction, half), 2.0 * half, epsilon = 1e-12);
        // Just before the start is negative, not nearly 2 pi.
        assert!(sweep_offset(start - 1e-4, direction, half) < 0.0);
        assert!(sweep_offset(end + 1e-4, direction, half) > 2.0 * half);
    }

    proptest! {
        #[test]
        fn wrap_range(angle in -100.0..100.0f64) {
            let w = wrap_angle(angle);
            prop_assert!((-PI..PI).contains(&w), "{} -> {}", angle, w);
            // Same direction.
            prop_assert!((w.cos() - angle.cos()).abs() < 1e-9);
            prop_assert!((w.sin() - angle.sin()).abs() < 1e-9);
        }

        // Sweeping through a cone in order of offset visits angles in increasing order from the start.
        #[test]
        fn sweep_is_monotonic(
            direction in -10.0..10.0f64,
            half in 0.0..PI,
            a in 0.0..1.0f64,
            b in 0.0..1.0f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let start = direction - half;
            let first = start + lo * 2.0 * half;
            let second = start + hi * 2.0 * half;
            let fo = sweep_offset(first, direction, half);
            let so = sweep_offset(second, direction, half);
            prop_assert!(fo <= so + 1e-9, "{} {}", fo, so);
            prop_assert!((fo - lo * 2.0 * half).abs() < 1e-9);
        }
    }
}
