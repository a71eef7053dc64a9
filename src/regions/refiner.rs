//! Region refinement: shrink regions back toward tight boundaries while
//! reproducing the growth stage's region count.

use crate::config::SummaryConfig;
use crate::geometry::Rect;
use crate::regions::merge::merge_overlapping;

/// Result of the refinement stage.
#[derive(Debug, Clone)]
pub struct RefineOutcome {
    /// Final region rectangles, clamped to the page.
    pub regions: Vec<Rect>,
    /// False when the pass cap or a stall was hit before reaching the
    /// target count; the regions at that point are still usable.
    pub converged: bool,
    /// Number of refinement passes run.
    pub passes: usize,
}

/// Regrow regions from the tight boundary rectangles until at most
/// `target_count` remain.
///
/// Each pass expands every region still admitted by the printable-area
/// limits by the refine step, clamps it to `page_rect`, then merges
/// overlapping regions. The step is smaller than the growth stage's, so the
/// final regions hug the annotations more tightly while the count still
/// converges to the same fixed point.
///
/// The loop is bounded: it stops after `max_refine_passes`, or as soon as a
/// pass changes nothing (every region clamped or frozen, no merges). Either
/// way the outcome is non-fatal and carries `converged: false`.
pub fn refine(
    boundary_rects: &[Rect],
    target_count: usize,
    page_rect: &Rect,
    config: &SummaryConfig,
) -> RefineOutcome {
    let mut regions: Vec<Rect> = boundary_rects
        .iter()
        .map(|r| r.intersect(page_rect))
        .collect();

    let mut passes = 0;
    let converged = loop {
        if regions.len() <= target_count {
            break true;
        }
        if passes >= config.max_refine_passes {
            log::warn!(
                "refinement pass cap ({}) hit: could not refine below {} region(s), target was {}",
                config.max_refine_passes,
                regions.len(),
                target_count
            );
            break false;
        }

        let previous = regions.clone();
        for region in regions.iter_mut() {
            if config.page_limits.admits(region) {
                *region = region.expand(config.refine_step).intersect(page_rect);
            }
        }
        regions = merge_overlapping(regions);
        passes += 1;

        if regions == previous {
            log::warn!(
                "refinement stalled after {} pass(es): {} region(s) remain, target was {}",
                passes,
                regions.len(),
                target_count
            );
            break false;
        }
    };

    RefineOutcome {
        regions,
        converged,
        passes,
    }
}
