//! An opaque line segment, which blocks sight.
use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Segment {
        Segment { a, b }
    }

    /// The vector from `a` to `b`.
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    /// Zero-length segments are allowed, but can never be hit by a ray.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    /// Evaluate the segment at a given `t`, where 0 is `a` and 1 is `b`.
    pub fn evaluate(&self, t: f64) -> Point {
        self.a + self.direction() * t
    }

    pub fn check_finite(self) -> Result<Segment> {
        self.a.check_finite()?;
        self.b.check_finite()?;
        Ok(self)
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    fn from(other: ((f64, f64), (f64, f64))) -> Segment {
        Segment::new(other.0.into(), other.1.into())
    }
}
