//! Point-in-polygon testing and boundary audits.

mod geometry;
pub mod overlap;

pub use geometry::contains;
pub use overlap::{find_overlaps, Overlap};
