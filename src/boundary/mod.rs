//! Boundary datasets: decoding, sources and the load-once store.

mod dataset;
mod source;
mod store;

pub use dataset::decode;
pub use source::{BoundarySource, DirectorySource, MemorySource};
pub use store::{BoundaryCache, BoundaryStore};
