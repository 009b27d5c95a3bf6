//! Error types for boundary loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Jurisdiction;

/// A jurisdiction's boundary dataset could not be loaded.
///
/// Fatal for any resolution that touches the jurisdiction; retrying a malformed file
/// will not help, so nothing is cached and the error goes back to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no boundary dataset for {jurisdiction} at {}", path.display())]
    NotFound {
        jurisdiction: Jurisdiction,
        path: PathBuf,
    },

    #[error("no boundary dataset registered for {0}")]
    Unregistered(Jurisdiction),

    #[error("failed to read boundary dataset for {jurisdiction}: {source}")]
    Io {
        jurisdiction: Jurisdiction,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed boundary dataset for {jurisdiction}: {source}")]
    Json {
        jurisdiction: Jurisdiction,
        #[source]
        source: serde_json::Error,
    },

    #[error("division {division:?} in {jurisdiction} is invalid: {reason}")]
    InvalidDivision {
        jurisdiction: Jurisdiction,
        division: String,
        reason: String,
    },
}

impl LoadError {
    pub fn invalid_division(
        jurisdiction: Jurisdiction,
        division: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDivision {
            jurisdiction,
            division: division.into(),
            reason: reason.into(),
        }
    }

    /// The jurisdiction whose dataset failed
    pub fn jurisdiction(&self) -> Jurisdiction {
        match self {
            LoadError::NotFound { jurisdiction, .. }
            | LoadError::Io { jurisdiction, .. }
            | LoadError::Json { jurisdiction, .. }
            | LoadError::InvalidDivision { jurisdiction, .. } => *jurisdiction,
            LoadError::Unregistered(jurisdiction) => *jurisdiction,
        }
    }
}

/// Errors surfaced by the resolver. No-Match and unsupported jurisdictions are not errors.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown jurisdiction code: {0:?}")]
    UnknownJurisdiction(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}
