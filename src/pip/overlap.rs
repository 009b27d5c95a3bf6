//! Overlap audit for boundary sets.
//!
//! Resolution stops at the first containing division, which is only the sole match when
//! divisions do not overlap. This module checks that assumption on real data.

use geo::{Area, BooleanOps};
use rayon::prelude::*;
use rstar::{RTree, RTreeObject, AABB};
use tracing::info;

use crate::models::{BoundarySet, Division};

/// Wrapper for R-tree indexing of divisions by bounding box
struct IndexedDivision<'a> {
    position: usize,
    division: &'a Division,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedDivision<'_> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl<'a> IndexedDivision<'a> {
    fn new(position: usize, division: &'a Division) -> Self {
        let bbox = division.polygon.bbox();
        Self {
            position,
            division,
            envelope: AABB::from_corners([bbox.min().x, bbox.min().y], [bbox.max().x, bbox.max().y]),
        }
    }
}

/// Two divisions whose interiors intersect
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    /// Earlier division in stored order; wins ties during resolution
    pub first: String,
    pub second: String,
    /// Intersection area in square degrees
    pub area: f64,
}

/// Find every pair of divisions in `set` whose intersection area exceeds `min_area`.
///
/// Neighbours sharing an edge intersect with zero area and are never reported. Pairs are
/// returned in stored order of their first member.
pub fn find_overlaps(set: &BoundarySet, min_area: f64) -> Vec<Overlap> {
    let indexed: Vec<IndexedDivision> = set
        .iter()
        .enumerate()
        .map(|(i, d)| IndexedDivision::new(i, d))
        .collect();

    let tree = RTree::bulk_load(indexed);
    let tree = &tree;

    // Candidate pairs by bounding box, each pair once
    let mut candidates: Vec<(&IndexedDivision, &IndexedDivision)> = tree
        .iter()
        .flat_map(move |a| {
            tree.locate_in_envelope_intersecting(&a.envelope)
                .filter(move |b| a.position < b.position)
                .map(move |b| (a, b))
        })
        .collect();
    candidates.sort_by_key(|(a, b)| (a.position, b.position));

    info!(
        "Checking {} candidate pairs among {} {} divisions",
        candidates.len(),
        set.len(),
        set.jurisdiction()
    );

    candidates
        .par_iter()
        .filter_map(|(a, b)| {
            let area = a
                .division
                .polygon
                .to_geo()
                .intersection(&b.division.polygon.to_geo())
                .unsigned_area();
            (area > min_area).then(|| Overlap {
                first: a.division.name.clone(),
                second: b.division.name.clone(),
                area,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Jurisdiction, Polygon};
    use geo::Coord;

    fn square(name: &str, x0: f64, y0: f64, size: f64) -> Division {
        let ring = vec![
            Coord { x: x0, y: y0 },
            Coord { x: x0, y: y0 + size },
            Coord { x: x0 + size, y: y0 + size },
            Coord { x: x0 + size, y: y0 },
        ];
        Division {
            name: name.to_string(),
            jurisdiction: Jurisdiction::Vic,
            owner: None,
            polygon: Polygon::new(ring).unwrap(),
        }
    }

    #[test]
    fn test_tiled_divisions_do_not_overlap() {
        let mut set = BoundarySet::new(Jurisdiction::Vic);
        for i in 0..4 {
            set.insert(square(&format!("D{}", i), i as f64, 0.0, 1.0))
                .unwrap();
        }
        assert!(find_overlaps(&set, 1e-9).is_empty());
    }

    #[test]
    fn test_overlapping_pair_is_reported() {
        let mut set = BoundarySet::new(Jurisdiction::Vic);
        set.insert(square("West", 0.0, 0.0, 2.0)).unwrap();
        set.insert(square("East", 1.0, 0.0, 2.0)).unwrap();
        set.insert(square("Far", 10.0, 10.0, 1.0)).unwrap();

        let overlaps = find_overlaps(&set, 1e-9);
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].first, "West");
        assert_eq!(overlaps[0].second, "East");
        assert!((overlaps[0].area - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_set() {
        let set = BoundarySet::new(Jurisdiction::Vic);
        assert!(find_overlaps(&set, 0.0).is_empty());
    }
}
