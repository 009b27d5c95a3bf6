//! Division polygons and the per-jurisdiction boundary set.

use geo::{BoundingRect, Coord, LineString, Point, Rect};
use hashbrown::HashMap;

use super::Jurisdiction;
use crate::pip;

/// A simple closed boundary ring, x = longitude, y = latitude.
///
/// The ring is implicitly closed: the last vertex connects back to the first. A trailing
/// copy of the first vertex is tolerated but not required.
#[derive(Debug, Clone)]
pub struct Polygon {
    ring: LineString<f64>,
    bbox: Rect<f64>,
}

impl Polygon {
    /// Build a polygon from its vertices, rejecting rings the tester cannot handle.
    pub fn new(vertices: Vec<Coord<f64>>) -> Result<Self, &'static str> {
        if vertices.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err("vertex is not a finite number");
        }

        if distinct_vertices(&vertices) < 3 {
            return Err("polygon needs at least 3 distinct vertices");
        }

        let ring = LineString::new(vertices);
        let bbox = ring.bounding_rect().ok_or("polygon has no extent")?;

        Ok(Self { ring, bbox })
    }

    pub fn vertices(&self) -> &[Coord<f64>] {
        &self.ring.0
    }

    pub fn bbox(&self) -> Rect<f64> {
        self.bbox
    }

    /// Even-odd membership test.
    ///
    /// Points outside the latitude band `[min_y, max_y)` are rejected before walking the
    /// edges; under the strict `>` comparison no edge can cross the ray there, so the
    /// answer is the same as the full walk.
    pub fn contains(&self, point: Point<f64>) -> bool {
        let y = point.y();
        if y < self.bbox.min().y || y >= self.bbox.max().y {
            return false;
        }
        pip::contains(point, self.vertices())
    }

    /// As a `geo` polygon, for area and boolean operations
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(self.ring.clone(), vec![])
    }
}

/// Number of distinct vertices, repeated points (including a closing vertex) counted once
fn distinct_vertices(vertices: &[Coord<f64>]) -> usize {
    let mut sorted = vertices.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    sorted.len()
}

/// A named electoral boundary.
#[derive(Debug, Clone)]
pub struct Division {
    pub name: String,
    /// Jurisdiction whose dataset this division came from
    pub jurisdiction: Jurisdiction,
    /// Owning state/territory, recorded only for FEDERAL divisions
    pub owner: Option<Jurisdiction>,
    pub polygon: Polygon,
}

impl Division {
    pub fn contains(&self, point: Point<f64>) -> bool {
        self.polygon.contains(point)
    }
}

/// All divisions of one jurisdiction, in dataset order, addressable by name.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    jurisdiction: Jurisdiction,
    divisions: Vec<Division>,
    by_name: HashMap<String, usize>,
}

impl BoundarySet {
    /// Create an empty set for a jurisdiction
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            divisions: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Append a division. Returns it back if the name is already taken.
    pub fn insert(&mut self, division: Division) -> Result<(), Division> {
        if self.by_name.contains_key(&division.name) {
            return Err(division);
        }
        self.by_name
            .insert(division.name.clone(), self.divisions.len());
        self.divisions.push(division);
        Ok(())
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    pub fn get(&self, name: &str) -> Option<&Division> {
        self.by_name.get(name).map(|&i| &self.divisions[i])
    }

    /// Divisions in stored (insertion) order
    pub fn iter(&self) -> impl Iterator<Item = &Division> {
        self.divisions.iter()
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    /// First division in stored order containing the point
    pub fn locate(&self, point: Point<f64>) -> Option<&Division> {
        self.divisions.iter().find(|d| d.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Coord<f64>> {
        vec![
            Coord { x: x0, y: y0 },
            Coord { x: x0, y: y0 + size },
            Coord { x: x0 + size, y: y0 + size },
            Coord { x: x0 + size, y: y0 },
        ]
    }

    fn division(name: &str, ring: Vec<Coord<f64>>) -> Division {
        Division {
            name: name.to_string(),
            jurisdiction: Jurisdiction::Qld,
            owner: None,
            polygon: Polygon::new(ring).unwrap(),
        }
    }

    #[test]
    fn test_polygon_rejects_short_rings() {
        let two = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }];
        assert!(Polygon::new(two).is_err());

        // Closed triangle written as 3 vertices + closing vertex is fine,
        // but 2 vertices + closing vertex is not.
        let closed_line = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 0.0 },
        ];
        assert!(Polygon::new(closed_line).is_err());
    }

    #[test]
    fn test_polygon_rejects_repeated_vertices() {
        let repeated = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
        ];
        assert!(Polygon::new(repeated).is_err());

        let mut ring = square(0.0, 0.0, 1.0);
        ring.insert(1, ring[0]);
        ring.push(ring[0]);
        assert!(Polygon::new(ring).is_ok());
    }

    #[test]
    fn test_polygon_rejects_non_finite() {
        let mut ring = square(0.0, 0.0, 1.0);
        ring[2].x = f64::NAN;
        assert!(Polygon::new(ring).is_err());
    }

    #[test]
    fn test_closing_vertex_is_optional() {
        let open = Polygon::new(square(0.0, 0.0, 2.0)).unwrap();
        let mut ring = square(0.0, 0.0, 2.0);
        ring.push(ring[0]);
        let closed = Polygon::new(ring).unwrap();

        for p in [Point::new(1.0, 1.0), Point::new(0.5, 1.9), Point::new(3.0, 1.0)] {
            assert_eq!(open.contains(p), closed.contains(p));
        }
    }

    #[test]
    fn test_band_reject_matches_full_walk() {
        let poly = Polygon::new(square(0.0, 0.0, 2.0)).unwrap();
        for y in [-1.0, 0.0, 1.0, 2.0, 3.0] {
            let p = Point::new(1.0, y);
            assert_eq!(poly.contains(p), pip::contains(p, poly.vertices()));
        }
    }

    #[test]
    fn test_set_keeps_insertion_order_and_rejects_duplicates() {
        let mut set = BoundarySet::new(Jurisdiction::Qld);
        set.insert(division("Zeta", square(0.0, 0.0, 1.0))).unwrap();
        set.insert(division("Alpha", square(5.0, 5.0, 1.0))).unwrap();
        assert!(set.insert(division("Zeta", square(9.0, 9.0, 1.0))).is_err());

        let names: Vec<&str> = set.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(set.len(), 2);
        assert!(set.get("Alpha").is_some());
    }

    #[test]
    fn test_locate_first_match_wins() {
        let mut set = BoundarySet::new(Jurisdiction::Qld);
        set.insert(division("First", square(0.0, 0.0, 4.0))).unwrap();
        set.insert(division("Second", square(1.0, 1.0, 1.0))).unwrap();

        let hit = set.locate(Point::new(1.5, 1.5)).unwrap();
        assert_eq!(hit.name, "First");
        assert!(set.locate(Point::new(10.0, 10.0)).is_none());
    }
}
