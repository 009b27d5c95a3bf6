//! Electorate resolution service.

use geo::Point;
use hashbrown::HashSet;
use serde::Serialize;
use tracing::{debug, warn};

use super::reduce::candidates;
use crate::boundary::BoundaryStore;
use crate::error::{LoadError, ResolveError};
use crate::models::Jurisdiction;

/// Outcome of resolving one point.
///
/// Absent divisions are normal outcomes, not errors: an absent federal division means the
/// point fell outside every known boundary for its jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub jurisdiction: Jurisdiction,
    pub federal_division: Option<String>,
    pub local_division: Option<String>,
    /// True only when local data exists for the jurisdiction and a local division matched
    pub supported: bool,
}

/// Resolves coordinates to federal and state/territory divisions.
///
/// Holds no per-call state; everything persistent lives in the store's cache.
pub struct ElectorateResolver {
    store: BoundaryStore,
    supported: HashSet<Jurisdiction>,
}

impl ElectorateResolver {
    /// `supported` lists the jurisdictions with local division data. FEDERAL is ignored
    /// there since it is always searched.
    pub fn new(store: BoundaryStore, supported: impl IntoIterator<Item = Jurisdiction>) -> Self {
        Self {
            store,
            supported: supported.into_iter().filter(|j| !j.is_federal()).collect(),
        }
    }

    pub fn store(&self) -> &BoundaryStore {
        &self.store
    }

    pub fn is_supported(&self, jurisdiction: Jurisdiction) -> bool {
        self.supported.contains(&jurisdiction)
    }

    /// Supported local jurisdictions, in registry order
    pub fn supported(&self) -> Vec<Jurisdiction> {
        let mut supported: Vec<Jurisdiction> = self.supported.iter().copied().collect();
        supported.sort();
        supported
    }

    /// Load FEDERAL and every supported jurisdiction up front.
    pub fn preload(&self) -> Result<(), LoadError> {
        self.store.ensure_loaded(Jurisdiction::Federal)?;
        for jurisdiction in self.supported() {
            self.store.ensure_loaded(jurisdiction)?;
        }
        Ok(())
    }

    /// Resolve a point given as longitude/latitude against a jurisdiction code.
    pub fn resolve_code(&self, point: Point<f64>, code: &str) -> Result<Resolution, ResolveError> {
        let jurisdiction: Jurisdiction = code.parse()?;
        Ok(self.resolve(point, jurisdiction)?)
    }

    /// Resolve a point (x = longitude, y = latitude) within a jurisdiction.
    ///
    /// The federal search only considers divisions owned by `jurisdiction`. The local
    /// search runs only for supported jurisdictions. In both, the first containing
    /// division in stored order wins.
    pub fn resolve(
        &self,
        point: Point<f64>,
        jurisdiction: Jurisdiction,
    ) -> Result<Resolution, LoadError> {
        let federal = self.store.ensure_loaded(Jurisdiction::Federal)?;

        let federal_division = candidates(&federal, jurisdiction)
            .find(|d| d.contains(point))
            .map(|d| d.name.clone());

        if federal_division.is_none() {
            warn!(
                "No federal division in {} contains ({}, {})",
                jurisdiction,
                point.x(),
                point.y()
            );
        }

        let local_division = if self.is_supported(jurisdiction) {
            let local = self.store.ensure_loaded(jurisdiction)?;
            local.locate(point).map(|d| d.name.clone())
        } else {
            None
        };

        let resolution = Resolution {
            jurisdiction,
            supported: local_division.is_some(),
            federal_division,
            local_division,
        };

        debug!(
            "Resolved ({}, {}) in {}: federal={:?} local={:?}",
            point.x(),
            point.y(),
            jurisdiction,
            resolution.federal_division,
            resolution.local_division
        );

        Ok(resolution)
    }
}
