use geo::{Coord, Point};

/// Even-odd (crossing number) point-in-polygon test.
///
/// Casts a horizontal ray from `point` towards +x and toggles on every edge it crosses.
/// An edge `(v[i], v[j])` crosses when exactly one endpoint lies strictly above the
/// point and the edge meets the line `y = point.y` to the right of the point. The ring
/// wraps from the last vertex back to the first.
///
/// No epsilon is applied. Points lying exactly on an edge or vertex get whatever answer
/// the arithmetic produces; callers needing boundary-inclusive semantics must handle
/// that themselves.
pub fn contains(point: Point<f64>, ring: &[Coord<f64>]) -> bool {
    let (x, y) = (point.x(), point.y());
    let mut inside = false;

    let Some(mut vj) = ring.last() else {
        return false;
    };

    for vi in ring {
        if (vi.y > y) != (vj.y > y) {
            let cross_x = vi.x + (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y);
            if x < cross_x {
                inside = !inside;
            }
        }
        vj = vi;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Centroid;

    fn ring(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
        points.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[test]
    fn test_square_inside() {
        let square = ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert!(contains(Point::new(1.0, 1.0), &square));
    }

    #[test]
    fn test_square_outside() {
        let square = ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert!(!contains(Point::new(5.0, 5.0), &square));
        assert!(!contains(Point::new(-1.0, 1.0), &square));
        assert!(!contains(Point::new(1.0, -0.5), &square));
    }

    #[test]
    fn test_concave_notch() {
        // U shape: the notch between the arms is outside
        let u = ring(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]);
        assert!(contains(Point::new(0.5, 2.0), &u));
        assert!(contains(Point::new(2.5, 2.0), &u));
        assert!(contains(Point::new(1.5, 0.5), &u));
        assert!(!contains(Point::new(1.5, 2.0), &u));
    }

    #[test]
    fn test_winding_direction_does_not_matter() {
        let cw = ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        let ccw: Vec<_> = cw.iter().rev().copied().collect();
        for p in [Point::new(1.0, 1.0), Point::new(3.0, 1.0), Point::new(1.0, 0.5)] {
            assert_eq!(contains(p, &cw), contains(p, &ccw));
        }
    }

    #[test]
    fn test_convex_centroid_is_inside() {
        let shapes = [
            ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]),
            ring(&[(153.0, -27.5), (153.1, -27.5), (153.1, -27.4), (153.0, -27.4)]),
            ring(&[(1.0, 0.0), (2.0, 1.0), (1.5, 2.0), (0.5, 2.0), (0.0, 1.0)]),
        ];
        for shape in &shapes {
            let poly = geo::Polygon::new(geo::LineString::new(shape.clone()), vec![]);
            let centroid = poly.centroid().unwrap();
            assert!(contains(centroid, shape), "centroid of {:?}", shape);
        }
    }

    #[test]
    fn test_far_point_is_outside() {
        let triangle = ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        for p in [
            Point::new(1e6, 1e6),
            Point::new(-1e6, 1.0),
            Point::new(2.0, -1e6),
        ] {
            assert!(!contains(p, &triangle));
        }
    }

    #[test]
    fn test_empty_ring_is_outside() {
        assert!(!contains(Point::new(0.0, 0.0), &[]));
    }
}
