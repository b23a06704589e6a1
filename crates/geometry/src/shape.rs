//! A shape is one of the concrete obstacle types behind an enum, each of which breaks down into opaque segments.
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Segment(Segment),
    /// A closed outline: the last vertex connects back to the first.
    Polygon(Vec<Point>),
    Aabb(Aabb),
}

impl Shape {
    /// Build a closed polygon from `(x, y)` pairs.
    pub fn polygon(vertices: &[(f64, f64)]) -> Shape {
        Shape::Polygon(vertices.iter().copied().map(Point::from).collect())
    }

    /// The opaque edges of this shape, in order.
    pub fn segments(&self) -> Vec<Segment> {
        match self {
            Shape::Segment(ref s) => vec![*s],
            Shape::Polygon(ref vertices) => polygon_segments(vertices),
            Shape::Aabb(ref a) => a.segments().to_vec(),
        }
    }
}

/// Edges of a closed polygon.  Fewer than 2 vertices has no edges; 2 vertices is a single segment rather than a
/// doubled one.
fn polygon_segments(vertices: &[Point]) -> Vec<Segment> {
    match vertices.len() {
        0 | 1 => vec![],
        2 => vec![Segment::new(vertices[0], vertices[1])],
        n => (0..n)
            .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
            .collect(),
    }
}

impl From<Segment> for Shape {
    fn from(other: Segment) -> Shape {
        Shape::Segment(other)
    }
}

impl From<Aabb> for Shape {
    fn from(other: Aabb) -> Shape {
        Shape::Aabb(other)
    }
}
