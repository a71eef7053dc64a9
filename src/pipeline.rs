//! Page-by-page orchestration of the clustering stages.
//!
//! The pipeline consumes an already-filtered annotation list, runs growth,
//! refinement and aggregation for every page that retained at least one
//! annotation, and produces one [`PageResult`] per page in ascending
//! page-index order. Rasterizing the regions and composing the output
//! document are the rendering collaborator's job.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::annotation::AnnotationRecord;
use crate::config::SummaryConfig;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::regions::{aggregate, grow, refine, RegionCluster};

/// Read-only access to the source document, provided by the caller.
pub trait DocumentAccess {
    /// Full boundary rectangle of a page, used for clamping regions.
    fn page_rect(&self, page_index: usize) -> Result<Rect>;
}

/// Stable synthetic key for a region within one [`PageResult`].
///
/// Region rectangles are recomputed during refinement, so the rectangle
/// value itself is unsuitable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct RegionId(
    /// Zero-based region ordinal within the page.
    pub u32,
);

/// Region summaries for one page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageResult {
    /// Zero-based page index in the source document.
    pub page_index: usize,
    /// The page's display label.
    pub page_label: String,
    /// Final regions keyed by synthetic id, in discovery order.
    pub regions: IndexMap<RegionId, RegionCluster>,
    /// False when refinement hit its pass cap or stalled on this page.
    pub refined: bool,
}

/// Cooperative cancellation flag checked between pages.
///
/// Clones share the flag, so one handle can be kept by the caller while
/// another travels into the pipeline.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Runs the clustering stages over a filtered annotation set.
pub struct SummaryPipeline {
    config: SummaryConfig,
}

impl Default for SummaryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Create a pipeline with the given configuration.
    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Summarize `annots` against the pages of `doc`.
    ///
    /// Pages are processed sequentially in ascending index order; pages
    /// without any retained annotation produce no result.
    pub fn run(
        &self,
        doc: &impl DocumentAccess,
        annots: &[AnnotationRecord],
    ) -> Result<Vec<PageResult>> {
        self.run_with_cancel(doc, annots, &CancelToken::new())
    }

    /// Like [`run`](Self::run), checking `cancel` between pages.
    pub fn run_with_cancel(
        &self,
        doc: &impl DocumentAccess,
        annots: &[AnnotationRecord],
        cancel: &CancelToken,
    ) -> Result<Vec<PageResult>> {
        let mut by_page: BTreeMap<usize, Vec<&AnnotationRecord>> = BTreeMap::new();
        for annot in annots {
            by_page.entry(annot.page_index).or_default().push(annot);
        }

        let mut results = Vec::with_capacity(by_page.len());
        for (page_index, page_annots) in by_page {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            results.push(self.process_page(doc, page_index, &page_annots)?);
        }
        Ok(results)
    }

    fn process_page(
        &self,
        doc: &impl DocumentAccess,
        page_index: usize,
        page_annots: &[&AnnotationRecord],
    ) -> Result<PageResult> {
        let page_rect = doc.page_rect(page_index)?;
        let boxes: Vec<Rect> = page_annots.iter().map(|a| a.bbox).collect();

        let growth = grow(&boxes, &self.config);
        let refined = refine(
            &growth.boundary_rects,
            growth.target_count,
            &page_rect,
            &self.config,
        );
        if !refined.converged {
            log::warn!(
                "page {}: using {} unrefined region(s), target was {}",
                page_index,
                refined.regions.len(),
                growth.target_count
            );
        }

        let clusters = aggregate(&refined.regions, page_annots.iter().copied());

        let regions = clusters
            .into_iter()
            .enumerate()
            .map(|(i, cluster)| (RegionId(i as u32), cluster))
            .collect();

        log::debug!(
            "page {}: {} annotation(s) summarized into {} region(s)",
            page_index,
            page_annots.len(),
            growth.target_count
        );

        Ok(PageResult {
            page_index,
            page_label: page_annots[0].page_label.clone(),
            regions,
            refined: refined.converged,
        })
    }
}
