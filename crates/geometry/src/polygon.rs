//! Queries on polygons given as vertex lists, such as the output of a visibility computation.
use crate::*;

/// Area of a polygon via the shoelace formula.  Positive regardless of winding order.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice_area: f64 = (0..n)
        .map(|i| vertices[i].cross(&vertices[(i + 1) % n]))
        .sum();
    twice_area.abs() / 2.0
}

/// Even-odd point in polygon test, casting a ray toward +x.
///
/// Points exactly on an edge may land either way.
pub fn point_in_polygon(point: &Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let crossing_x = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use approx::*;

    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_area() {
        assert_relative_eq!(polygon_area(&square()), 100.0);
        let mut reversed = square();
        reversed.reverse();
        assert_relative_eq!(polygon_area(&reversed), 100.0);
        assert_relative_eq!(polygon_area(&square()[..2]), 0.0);
    }

    // A fan closed at the pivot, as produced for renderers.
    #[test]
    fn test_area_of_closed_fan() {
        let pivot = Point::new(0.0, 0.0);
        let fan = vec![pivot, Point::new(4.0, 0.0), Point::new(4.0, 3.0), pivot];
        assert_relative_eq!(polygon_area(&fan), 6.0);
    }

    #[test]
    fn test_contains() {
        let sq = square();
        assert!(point_in_polygon(&Point::new(5.0, 5.0), &sq));
        assert!(point_in_polygon(&Point::new(0.5, 9.5), &sq));
        assert!(!point_in_polygon(&Point::new(15.0, 5.0), &sq));
        assert!(!point_in_polygon(&Point::new(-1.0, 5.0), &sq));
        assert!(!point_in_polygon(&Point::new(5.0, 5.0), &sq[..2]));
    }
}
