//! Electoral jurisdictions and their codes.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// An electoral authority, also used as the key that partitions boundary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Jurisdiction {
    /// Commonwealth divisions
    Federal,
    /// Australian Capital Territory
    Act,
    /// New South Wales
    Nsw,
    /// Northern Territory
    Nt,
    /// Queensland
    Qld,
    /// South Australia
    Sa,
    /// Tasmania
    Tas,
    /// Victoria
    Vic,
    /// Western Australia
    Wa,
}

impl Jurisdiction {
    /// Every known jurisdiction, FEDERAL first.
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Jurisdiction::Federal,
            Jurisdiction::Act,
            Jurisdiction::Nsw,
            Jurisdiction::Nt,
            Jurisdiction::Qld,
            Jurisdiction::Sa,
            Jurisdiction::Tas,
            Jurisdiction::Vic,
            Jurisdiction::Wa,
        ]
    }

    /// States and territories only.
    pub fn states() -> &'static [Jurisdiction] {
        &Self::all()[1..]
    }

    /// Short code, used for dataset file names and external links
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Federal => "FEDERAL",
            Jurisdiction::Act => "ACT",
            Jurisdiction::Nsw => "NSW",
            Jurisdiction::Nt => "NT",
            Jurisdiction::Qld => "QLD",
            Jurisdiction::Sa => "SA",
            Jurisdiction::Tas => "TAS",
            Jurisdiction::Vic => "VIC",
            Jurisdiction::Wa => "WA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Jurisdiction::Federal => "Commonwealth of Australia",
            Jurisdiction::Act => "Australian Capital Territory",
            Jurisdiction::Nsw => "New South Wales",
            Jurisdiction::Nt => "Northern Territory",
            Jurisdiction::Qld => "Queensland",
            Jurisdiction::Sa => "South Australia",
            Jurisdiction::Tas => "Tasmania",
            Jurisdiction::Vic => "Victoria",
            Jurisdiction::Wa => "Western Australia",
        }
    }

    pub fn is_federal(&self) -> bool {
        matches!(self, Jurisdiction::Federal)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|j| j.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ResolveError::UnknownJurisdiction(wanted.to_string()))
    }
}

/// Accepts codes in any case, like `FromStr`.
impl<'de> Deserialize<'de> for Jurisdiction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
