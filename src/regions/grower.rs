//! Region growth: from tight annotation boxes to a stable region count.

use crate::config::SummaryConfig;
use crate::geometry::Rect;
use crate::regions::merge::merge_overlapping;

/// Result of the growth stage.
///
/// `boundary_rects` are the tight per-group rectangles the refinement stage
/// restarts from; `target_count` is the stabilized region count it must
/// reproduce.
#[derive(Debug, Clone)]
pub struct GrowthOutcome {
    /// Per-group boundary rectangles (union of member boxes, expanded by the
    /// adjacency margin).
    pub boundary_rects: Vec<Rect>,
    /// Region count after growth stabilized.
    pub target_count: usize,
    /// Number of growth passes actually run.
    pub passes: usize,
}

/// Group annotation boxes whose margin-expanded forms transitively intersect.
///
/// Returns groups of indices into `boxes`. Uses BFS over the intersection
/// graph, so the grouping is deterministic and independent of input order.
pub fn adjacency_groups(boxes: &[Rect], margin: f32) -> Vec<Vec<usize>> {
    let expanded: Vec<Rect> = boxes.iter().map(|b| b.expand(margin)).collect();
    let mut visited = vec![false; boxes.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for i in 0..boxes.len() {
        if visited[i] {
            continue;
        }

        let mut group = vec![i];
        visited[i] = true;

        // BFS to find all transitively adjacent boxes.
        let mut j = 0;
        while j < group.len() {
            let current = expanded[group[j]];
            for k in 0..boxes.len() {
                if !visited[k] && current.intersects(&expanded[k]) {
                    group.push(k);
                    visited[k] = true;
                }
            }
            j += 1;
        }

        group.sort_unstable();
        groups.push(group);
    }

    groups
}

/// Compute each group's boundary rectangle: the union of its member boxes,
/// expanded by the adjacency margin.
pub fn boundary_rects(boxes: &[Rect], groups: &[Vec<usize>], margin: f32) -> Vec<Rect> {
    groups
        .iter()
        .map(|group| {
            let mut bounds = boxes[group[0]];
            for &idx in &group[1..] {
                bounds = bounds.union(&boxes[idx]);
            }
            bounds.expand(margin)
        })
        .collect()
}

/// Grow regions until the count stabilizes and record it as the target.
///
/// Starting from the boundary rectangles, every region still admitted by the
/// printable-area limits is expanded by the growth step, then overlapping
/// regions are merged. Passes stop early once one merges nothing, or after
/// the configured maximum. An empty input yields an empty outcome.
pub fn grow(boxes: &[Rect], config: &SummaryConfig) -> GrowthOutcome {
    if boxes.is_empty() {
        return GrowthOutcome {
            boundary_rects: Vec::new(),
            target_count: 0,
            passes: 0,
        };
    }

    let groups = adjacency_groups(boxes, config.adjacency_margin);
    let boundaries = boundary_rects(boxes, &groups, config.adjacency_margin);

    let mut regions = boundaries.clone();
    let mut passes = 0;
    for _ in 0..config.max_growth_passes {
        for region in regions.iter_mut() {
            if config.page_limits.admits(region) {
                *region = region.expand(config.growth_step);
            }
        }

        let before = regions.len();
        regions = merge_overlapping(regions);
        passes += 1;
        if regions.len() == before {
            break;
        }
    }

    log::debug!(
        "growth stabilized at {} region(s) after {} pass(es) from {} annotation box(es)",
        regions.len(),
        passes,
        boxes.len()
    );

    GrowthOutcome {
        boundary_rects: boundaries,
        target_count: regions.len(),
        passes,
    }
}
