//! Where boundary datasets come from.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use crate::error::LoadError;
use crate::models::Jurisdiction;

/// Supplies the raw dataset document for a jurisdiction.
pub trait BoundarySource: Send + Sync {
    fn fetch(&self, jurisdiction: Jurisdiction) -> Result<Vec<u8>, LoadError>;
}

/// Reads `<dir>/<CODE>.json`, e.g. `data/FEDERAL.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the dataset file for a jurisdiction
    pub fn path_for(&self, jurisdiction: Jurisdiction) -> PathBuf {
        self.dir.join(format!("{}.json", jurisdiction.code()))
    }

    pub fn has_dataset(&self, jurisdiction: Jurisdiction) -> bool {
        self.path_for(jurisdiction).is_file()
    }
}

impl BoundarySource for DirectorySource {
    fn fetch(&self, jurisdiction: Jurisdiction) -> Result<Vec<u8>, LoadError> {
        let path = self.path_for(jurisdiction);
        std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound { jurisdiction, path },
            _ => LoadError::Io {
                jurisdiction,
                source,
            },
        })
    }
}

/// Datasets held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<Jurisdiction, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document for a jurisdiction, replacing any previous one
    pub fn with(mut self, jurisdiction: Jurisdiction, document: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(jurisdiction, document.into());
        self
    }
}

impl BoundarySource for MemorySource {
    fn fetch(&self, jurisdiction: Jurisdiction) -> Result<Vec<u8>, LoadError> {
        self.documents
            .get(&jurisdiction)
            .cloned()
            .ok_or(LoadError::Unregistered(jurisdiction))
    }
}
