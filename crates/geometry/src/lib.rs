//! Geometry primitives for 2D line-of-sight computations.
mod aabb;
pub mod angle;
mod errors;
mod point;
mod polygon;
mod ray;
mod raycasting;
mod segment;
mod shape;

pub use aabb::*;
pub use errors::*;
pub use point::*;
pub use polygon::*;
pub use ray::*;
pub use raycasting::*;
pub use segment::*;
pub use shape::*;
