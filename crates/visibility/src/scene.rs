//! A description of the obstacles in a level, which can be loaded from JSON.
use serde::{Deserialize, Serialize};
use sightcone_geometry::{Aabb, Segment, Shape};

use crate::errors::*;
use crate::Tolerances;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// The enclosing box; every ray cast from inside it hits something.
    pub bounds: Option<Aabb>,
    pub obstacles: Vec<Shape>,
    pub tolerances: Tolerances,
}

/// Width and height of the demo arena.
const DEMO_SIZE: (f64, f64) = (840.0, 360.0);

const DEMO_POLYGONS: &[&[(f64, f64)]] = &[
    &[(100.0, 150.0), (120.0, 50.0), (200.0, 80.0), (140.0, 210.0)],
    &[(100.0, 200.0), (120.0, 250.0), (60.0, 300.0)],
    &[(200.0, 260.0), (220.0, 150.0), (300.0, 200.0), (350.0, 320.0)],
    &[(540.0, 60.0), (560.0, 40.0), (570.0, 70.0)],
    &[(650.0, 190.0), (760.0, 170.0), (740.0, 270.0), (630.0, 290.0)],
    &[(600.0, 95.0), (780.0, 50.0), (680.0, 150.0)],
];

impl Scene {
    pub fn new(bounds: Option<Aabb>, obstacles: Vec<Shape>) -> Scene {
        Scene {
            bounds,
            obstacles,
            tolerances: Tolerances::default(),
        }
    }

    /// An 840x360 arena with six scattered polygons, handy for demos and benchmarks.
    pub fn demo() -> Scene {
        let bounds = Aabb::from_size(DEMO_SIZE.0, DEMO_SIZE.1).ok();
        let obstacles = DEMO_POLYGONS.iter().map(|p| Shape::polygon(p)).collect();
        Scene::new(bounds, obstacles)
    }

    pub fn from_json(text: &str) -> Result<Scene> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All opaque segments: the edges of the bounds first, then each obstacle's in order.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = self
            .bounds
            .iter()
            .flat_map(|b| b.segments())
            .collect();
        segments.extend(self.obstacles.iter().flat_map(|o| o.segments()));
        segments
    }
}
