//! Configuration for region clustering.

use crate::geometry::Rect;

/// Printable-area limits a region must stay within to keep growing.
///
/// Defaults to a US letter page minus margins: regions whose shorter side
/// reaches 6.75in or whose longer side reaches 9.25in (in points) are frozen.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct PageLimits {
    /// Maximum length of a region's shorter side, exclusive.
    pub short_side: f32,
    /// Maximum length of a region's longer side, exclusive.
    pub long_side: f32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            short_side: 6.75 * 72.0,
            long_side: 9.25 * 72.0,
        }
    }
}

impl PageLimits {
    /// True if the rectangle still fits the printable area and may be grown.
    pub fn admits(&self, rect: &Rect) -> bool {
        rect.min_side() < self.short_side && rect.max_side() < self.long_side
    }
}

/// Region clustering configuration.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Margin used when testing whether two annotations are adjacent.
    pub adjacency_margin: f32,

    /// Per-side expansion applied to fitting regions during growth passes.
    pub growth_step: f32,

    /// Per-side expansion applied to fitting regions during refinement passes.
    pub refine_step: f32,

    /// Maximum number of growth passes before the region count is recorded.
    pub max_growth_passes: usize,

    /// Maximum number of refinement passes before giving up on convergence.
    pub max_refine_passes: usize,

    /// Printable-area limits gating region growth.
    pub page_limits: PageLimits,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            adjacency_margin: 18.0,
            growth_step: 8.0,
            refine_step: 3.0,
            max_growth_passes: 30,
            max_refine_passes: 400,
            page_limits: PageLimits::default(),
        }
    }

    /// Set the adjacency margin.
    pub fn with_adjacency_margin(mut self, margin: f32) -> Self {
        self.adjacency_margin = margin;
        self
    }

    /// Set the growth step.
    pub fn with_growth_step(mut self, step: f32) -> Self {
        self.growth_step = step;
        self
    }

    /// Set the refinement step.
    pub fn with_refine_step(mut self, step: f32) -> Self {
        self.refine_step = step;
        self
    }

    /// Set the growth pass cap.
    pub fn with_max_growth_passes(mut self, passes: usize) -> Self {
        self.max_growth_passes = passes;
        self
    }

    /// Set the refinement pass cap.
    pub fn with_max_refine_passes(mut self, passes: usize) -> Self {
        self.max_refine_passes = passes;
        self
    }

    /// Set the printable-area limits.
    pub fn with_page_limits(mut self, limits: PageLimits) -> Self {
        self.page_limits = limits;
        self
    }
}
