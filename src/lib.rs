//! Electorate - resolve a coordinate to the electoral divisions containing it
//!
//! This library provides the boundary store, point-in-polygon search and resolver
//! shared by the query and check binaries.

pub mod boundary;
pub mod config;
pub mod error;
pub mod models;
pub mod pip;
pub mod resolver;

pub use boundary::{BoundaryCache, BoundarySource, BoundaryStore, DirectorySource, MemorySource};
pub use error::{LoadError, ResolveError};
pub use models::{BoundarySet, Division, Jurisdiction, Polygon};
pub use resolver::{federal_candidates, ElectorateResolver, Resolution};
