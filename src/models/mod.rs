//! Core data models for electorate resolution.

pub mod division;
pub mod jurisdiction;

pub use division::{BoundarySet, Division, Polygon};
pub use jurisdiction::Jurisdiction;
