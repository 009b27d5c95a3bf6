//! Boundary dataset decoding.
//!
//! A dataset is one JSON object per jurisdiction mapping division name to
//! `{"coords": [[x, y], ...], "jurisdiction": "QLD"}`. The `jurisdiction` field is read
//! only from the FEDERAL document. Key order in the document becomes the stored order.

use std::fmt;

use geo::Coord;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::LoadError;
use crate::models::{BoundarySet, Division, Jurisdiction, Polygon};

#[derive(Debug, Deserialize)]
struct RawDivision {
    coords: Vec<[f64; 2]>,
    #[serde(default)]
    jurisdiction: Option<String>,
}

/// Division entries in document order, duplicates kept for validation
struct RawDocument(Vec<(String, RawDivision)>);

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = RawDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of division name to boundary")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, RawDivision>()? {
                    entries.push(entry);
                }
                Ok(RawDocument(entries))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// Decode and validate a jurisdiction's dataset.
///
/// The whole document is checked before a set is returned, so a caller never sees a
/// partially loaded jurisdiction.
pub fn decode(jurisdiction: Jurisdiction, bytes: &[u8]) -> Result<BoundarySet, LoadError> {
    let RawDocument(entries) =
        serde_json::from_slice::<RawDocument>(bytes).map_err(|source| LoadError::Json {
            jurisdiction,
            source,
        })?;

    let mut set = BoundarySet::new(jurisdiction);

    for (name, raw) in entries {
        let vertices = raw.coords.iter().map(|&[x, y]| Coord { x, y }).collect();
        let polygon = Polygon::new(vertices)
            .map_err(|reason| LoadError::invalid_division(jurisdiction, &name, reason))?;

        let owner = if jurisdiction.is_federal() {
            let code = raw.jurisdiction.as_deref().ok_or_else(|| {
                LoadError::invalid_division(jurisdiction, &name, "missing owning jurisdiction")
            })?;
            let owner: Jurisdiction = code.parse().map_err(|_| {
                LoadError::invalid_division(
                    jurisdiction,
                    &name,
                    format!("unknown owning jurisdiction {:?}", code),
                )
            })?;
            if owner.is_federal() {
                return Err(LoadError::invalid_division(
                    jurisdiction,
                    &name,
                    "federal division cannot be owned by FEDERAL",
                ));
            }
            Some(owner)
        } else {
            None
        };

        set.insert(Division {
            name,
            jurisdiction,
            owner,
            polygon,
        })
        .map_err(|dup| LoadError::invalid_division(jurisdiction, dup.name, "duplicate division name"))?;
    }

    Ok(set)
}
