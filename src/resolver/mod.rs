//! Electorate resolution: federal reduction plus point-in-polygon search.

pub mod reduce;
mod service;

pub use reduce::federal_candidates;
pub use service::{ElectorateResolver, Resolution};
