use crate::*;

/// A half-infinite ray starting at `origin` and passing through `through`.
///
/// The direction is `through - origin` and is not normalized, so ray
/// parameters are measured in multiples of that vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub through: Point,
}

impl Ray {
    pub fn new(origin: Point, through: Point) -> Ray {
        Ray { origin, through }
    }

    /// Build a ray with a unit-length direction at angle `theta`.
    pub fn from_angle(origin: Point, theta: f64) -> Ray {
        Ray::new(origin, origin + Point::new(theta.cos(), theta.sin()))
    }

    pub fn direction(&self) -> Point {
        self.through - self.origin
    }

    /// Angle of the direction vector, in radians.
    pub fn angle(&self) -> f64 {
        self.through.angle_from(&self.origin)
    }

    /// Evaluate the ray at a given `t`.
    pub fn evaluate(&self, t: f64) -> Point {
        self.origin + self.direction() * t
    }
}
