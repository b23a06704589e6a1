use sightcone_geometry::{Point, Segment};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum VisibilityError {
    #[error("The {what} {point} has a coordinate which is NaN or infinite")]
    NonFinitePoint { what: &'static str, point: Point },

    #[error("The field of view must be a finite number of degrees, got {0}")]
    NonFiniteFov(f64),

    #[error("Obstacle segment {index} ({segment:?}) has an endpoint which is NaN or infinite")]
    NonFiniteSegment { index: usize, segment: Segment },

    #[error("Unable to parse scene: {}", _0)]
    SceneParse(#[from] serde_json::Error),
}

pub type Result<T, E = VisibilityError> = std::result::Result<T, E>;
