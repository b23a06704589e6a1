use crate::Point;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AabbError {
    #[error("Attempted to create an AABB which would have an invalid width or height")]
    AabbInvalidDims,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeometryError {
    #[error("Point {point} has a coordinate which is NaN or infinite")]
    NonFinite { point: Point },
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
