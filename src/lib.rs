//! # annot_summary
//!
//! Groups document annotations into printable regions and summarizes them
//! page by page.
//!
//! Given the annotations extracted from a paginated document, the crate
//! clusters spatially adjacent annotations into bounded regions sized for
//! printing and reports, per region, the contributing annotation ids, the
//! author set, the most recent modification time and the page orientation
//! to use when rendering it.
//!
//! The clustering runs in three stages per page:
//!
//! 1. **Growth** — annotation boxes whose 18-unit-expanded forms intersect
//!    are grouped transitively; the groups are over-grown in 8-unit steps
//!    and re-merged until the region count stabilizes.
//! 2. **Refinement** — regions restart from the tight group boundaries and
//!    regrow in 3-unit steps, clamped to the page, until the stabilized
//!    count is reproduced.
//! 3. **Aggregation** — each annotation is assigned to the regions its
//!    bounding box intersects and the region metadata is accumulated.
//!
//! Document opening, annotation extraction and region rasterization are the
//! caller's responsibility; see [`pipeline::DocumentAccess`].
//!
//! ## Quick start
//!
//! ```
//! use annot_summary::geometry::Rect;
//! use annot_summary::pipeline::{DocumentAccess, SummaryPipeline};
//! use annot_summary::{AnnotationRecord, Result};
//!
//! struct OnePageDoc;
//!
//! impl DocumentAccess for OnePageDoc {
//!     fn page_rect(&self, _page_index: usize) -> Result<Rect> {
//!         Ok(Rect::new(0.0, 0.0, 612.0, 792.0))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let annots = vec![AnnotationRecord {
//!     page_index: 0,
//!     page_label: "1".to_string(),
//!     id: "annot-1".to_string(),
//!     author: "Alice".to_string(),
//!     stroke_color: vec![1.0, 0.0, 0.0],
//!     last_modified: None,
//!     bbox: Rect::new(100.0, 100.0, 180.0, 140.0),
//! }];
//!
//! let results = SummaryPipeline::new().run(&OnePageDoc, &annots)?;
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].regions.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry
pub mod geometry;

// Annotation records and filtering
pub mod annotation;
pub mod filter;

// Region clustering
pub mod regions;

// Orchestration
pub mod config;
pub mod pipeline;

// Re-exports
pub use annotation::{parse_mod_date, AnnotationRecord};
pub use config::{PageLimits, SummaryConfig};
pub use error::{Error, Result};
pub use filter::AnnotationFilter;
pub use geometry::{Point, Rect};
pub use pipeline::{CancelToken, DocumentAccess, PageResult, RegionId, SummaryPipeline};
pub use regions::RegionCluster;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
