//! An axis-aligned bounding box.
use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::*;

/// An axis-aligned bounding box is specified by the minimum point and a width/height vector.
///
/// Boxes can never be a single point or line.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "AabbCorners", into = "AabbCorners")]
pub struct Aabb {
    p1: Point,
    /// width-height
    wh: Point,
}

/// The serialized form of a box.  Goes through `from_points` so that bad boxes can't be loaded.
#[derive(Serialize, Deserialize)]
struct AabbCorners {
    min: Point,
    max: Point,
}

impl Aabb {
    pub fn from_points(p1: Point, p2: Point) -> Result<Aabb, AabbError> {
        // Written so that NaN is rejected too.
        if !(p1.x < p2.x && p1.y < p2.y) {
            return Err(AabbError::AabbInvalidDims);
        }

        let wh = p2 - p1;
        Ok(Aabb { p1, wh })
    }

    /// A box with its minimum corner at the origin, for example a screen or canvas.
    pub fn from_size(width: f64, height: f64) -> Result<Aabb, AabbError> {
        Aabb::from_points(Point::new(0.0, 0.0), Point::new(width, height))
    }

    pub fn get_p1(&self) -> Point {
        self.p1
    }

    pub fn get_p2(&self) -> Point {
        self.p1 + self.wh
    }

    pub fn get_width(&self) -> f64 {
        self.wh.x
    }

    pub fn get_height(&self) -> f64 {
        self.wh.y
    }

    pub fn get_center(&self) -> Point {
        self.p1 + self.wh / 2.0
    }

    /// Is the point inside the box? Points on the boundary count.
    pub fn contains_point(&self, point: &Point) -> bool {
        let p2 = self.get_p2();
        (self.p1.x..=p2.x).contains(&point.x) && (self.p1.y..=p2.y).contains(&point.y)
    }

    /// The four corners, going around the box starting at the minimum corner.
    pub fn corners(&self) -> [Point; 4] {
        let p1 = self.p1;
        let p2 = self.get_p2();
        [
            p1,
            Point::new(p2.x, p1.y),
            p2,
            Point::new(p1.x, p2.y),
        ]
    }

    /// The edges of the box as segments: with y pointing down, top, right, bottom, then left.
    ///
    /// Put these in a scene to guarantee that every ray cast from inside the box hits something.
    pub fn segments(&self) -> [Segment; 4] {
        let [c0, c1, c2, c3] = self.corners();
        [
            Segment::new(c0, c1),
            Segment::new(c1, c2),
            Segment::new(c2, c3),
            Segment::new(c3, c0),
        ]
    }
}

impl TryFrom<AabbCorners> for Aabb {
    type Error = AabbError;

    fn try_from(other: AabbCorners) -> Result<Aabb, AabbError> {
        Aabb::from_points(other.min, other.max)
    }
}

impl From<Aabb> for AabbCorners {
    fn from(other: Aabb) -> AabbCorners {
        AabbCorners {
            min: other.get_p1(),
            max: other.get_p2(),
        }
    }
}
