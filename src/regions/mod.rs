//! Region clustering: merging, growth, refinement and metadata aggregation.
//!
//! The stages run in sequence per page:
//! 1. [`grower::grow`] groups adjacent annotation boxes and over-grows the
//!    groups until the region count reaches a fixed point (the target count).
//! 2. [`refiner::refine`] restarts from the tight group boundaries and
//!    regrows in smaller steps, clamped to the page, until the target count
//!    is reproduced.
//! 3. [`aggregate::aggregate`] attaches annotation metadata to each final
//!    region.

pub mod aggregate;
pub mod grower;
pub mod merge;
pub mod refiner;

// Re-export main types
pub use aggregate::{aggregate, RegionCluster};
pub use grower::{adjacency_groups, grow, GrowthOutcome};
pub use merge::merge_overlapping;
pub use refiner::{refine, RefineOutcome};
