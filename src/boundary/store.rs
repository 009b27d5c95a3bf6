//! Load-once boundary cache.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;

use hashbrown::HashMap;
use tracing::{debug, info};

use super::dataset::decode;
use super::source::BoundarySource;
use crate::error::LoadError;
use crate::models::{BoundarySet, Jurisdiction};

/// Loaded boundary sets keyed by jurisdiction.
///
/// Entries only ever go from absent to present. A set becomes visible once it is fully
/// decoded and validated. Share one cache between stores with `Arc` to host several
/// resolvers over the same data.
#[derive(Debug, Default)]
pub struct BoundaryCache {
    sets: RwLock<HashMap<Jurisdiction, Arc<BoundarySet>>>,
    /// One lock per jurisdiction so concurrent first requests load it once
    loading: Mutex<HashMap<Jurisdiction, Arc<Mutex<()>>>>,
}

impl BoundaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, jurisdiction: Jurisdiction) -> Option<Arc<BoundarySet>> {
        self.sets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&jurisdiction)
            .cloned()
    }

    /// Insert a set unless its jurisdiction is already present; returns the cached set.
    pub fn insert(&self, set: BoundarySet) -> Arc<BoundarySet> {
        let mut sets = self.sets.write().unwrap_or_else(PoisonError::into_inner);
        sets.entry(set.jurisdiction())
            .or_insert_with(|| Arc::new(set))
            .clone()
    }

    /// Jurisdictions currently loaded, in registry order
    pub fn loaded(&self) -> Vec<Jurisdiction> {
        let sets = self.sets.read().unwrap_or_else(PoisonError::into_inner);
        let mut loaded: Vec<Jurisdiction> = sets.keys().copied().collect();
        loaded.sort();
        loaded
    }

    fn load_slot(&self, jurisdiction: Jurisdiction) -> Arc<Mutex<()>> {
        self.loading
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(jurisdiction)
            .or_default()
            .clone()
    }
}

/// Boundary data access for the resolver: a source plus the cache it fills.
pub struct BoundaryStore {
    source: Box<dyn BoundarySource>,
    cache: Arc<BoundaryCache>,
}

impl BoundaryStore {
    /// Store with a fresh, private cache
    pub fn new(source: impl BoundarySource + 'static) -> Self {
        Self::with_cache(source, Arc::new(BoundaryCache::new()))
    }

    pub fn with_cache(source: impl BoundarySource + 'static, cache: Arc<BoundaryCache>) -> Self {
        Self {
            source: Box::new(source),
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<BoundaryCache> {
        &self.cache
    }

    /// Cached set for a jurisdiction, without loading
    pub fn get(&self, jurisdiction: Jurisdiction) -> Option<Arc<BoundarySet>> {
        self.cache.get(jurisdiction)
    }

    /// Return the jurisdiction's set, loading it from the source on first use.
    ///
    /// Concurrent callers for the same jurisdiction wait on one load. A failed load caches
    /// nothing, so the next call tries the source again.
    pub fn ensure_loaded(&self, jurisdiction: Jurisdiction) -> Result<Arc<BoundarySet>, LoadError> {
        if let Some(set) = self.cache.get(jurisdiction) {
            return Ok(set);
        }

        let slot = self.cache.load_slot(jurisdiction);
        let _guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished the load while we waited
        if let Some(set) = self.cache.get(jurisdiction) {
            debug!("{} boundaries loaded by another request", jurisdiction);
            return Ok(set);
        }

        let started = Instant::now();
        let bytes = self.source.fetch(jurisdiction)?;
        let set = decode(jurisdiction, &bytes)?;

        info!(
            "Loaded {} {} divisions in {:?}",
            set.len(),
            jurisdiction,
            started.elapsed()
        );

        Ok(self.cache.insert(set))
    }
}
