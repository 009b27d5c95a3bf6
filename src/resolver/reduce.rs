//! Federal search-space reduction.
//!
//! Federal divisions never cross state or territory borders (s.29 of the Constitution),
//! so only the divisions owned by the caller's jurisdiction can contain its points.

use crate::boundary::BoundaryStore;
use crate::models::{BoundarySet, Division, Jurisdiction};

/// FEDERAL divisions owned by `jurisdiction`, in stored order.
pub fn candidates(
    federal: &BoundarySet,
    jurisdiction: Jurisdiction,
) -> impl Iterator<Item = &Division> {
    federal
        .iter()
        .filter(move |d| d.owner == Some(jurisdiction))
}

/// Names of the FEDERAL divisions owned by `jurisdiction`.
///
/// Empty when FEDERAL data has not been loaded yet; load it first.
pub fn federal_candidates(store: &BoundaryStore, jurisdiction: Jurisdiction) -> Vec<String> {
    match store.get(Jurisdiction::Federal) {
        Some(federal) => candidates(&federal, jurisdiction)
            .map(|d| d.name.clone())
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{decode, MemorySource};

    const FEDERAL: &str = r#"{
        "Alpha": {"coords": [[0, 0], [0, 1], [1, 1], [1, 0]], "jurisdiction": "QLD"},
        "Beta": {"coords": [[2, 0], [2, 1], [3, 1], [3, 0]], "jurisdiction": "NSW"},
        "Gamma": {"coords": [[4, 0], [4, 1], [5, 1], [5, 0]], "jurisdiction": "QLD"}
    }"#;

    #[test]
    fn test_candidates_filter_by_owner() {
        let federal = decode(Jurisdiction::Federal, FEDERAL.as_bytes()).unwrap();
        let names: Vec<&str> = candidates(&federal, Jurisdiction::Qld)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);

        for j in Jurisdiction::all() {
            let found: Vec<&Division> = candidates(&federal, *j).collect();
            assert!(found.len() <= federal.len());
            assert!(found.iter().all(|d| d.owner == Some(*j)));
        }
    }

    #[test]
    fn test_federal_candidates_from_store() {
        let doc = r#"{
            "Alpha": {"coords": [[0, 0], [0, 1], [1, 1]], "jurisdiction": "QLD"},
            "Beta": {"coords": [[2, 0], [2, 1], [3, 1]], "jurisdiction": "NSW"}
        }"#;
        let store = BoundaryStore::new(MemorySource::new().with(Jurisdiction::Federal, doc));

        // Nothing loaded yet
        assert!(federal_candidates(&store, Jurisdiction::Qld).is_empty());

        store.ensure_loaded(Jurisdiction::Federal).unwrap();
        assert_eq!(federal_candidates(&store, Jurisdiction::Qld), vec!["Alpha"]);
        assert!(federal_candidates(&store, Jurisdiction::Wa).is_empty());
        assert!(federal_candidates(&store, Jurisdiction::Federal).is_empty());
    }
}
