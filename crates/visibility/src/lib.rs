//! Field-of-view visibility polygons.
//!
//! A [VisibilityCalculator] owns a set of opaque segments and, given an observer, a point to face and a cone width,
//! computes the fan-shaped polygon of everything the observer can see.  The polygon is recomputed from scratch on
//! every call.
mod calculator;
mod candidates;
mod errors;
mod scene;
mod tolerances;

pub use calculator::*;
pub use errors::*;
pub use scene::*;
pub use tolerances::*;

pub use sightcone_geometry::{Aabb, Intersection, Point, Segment, Shape};
