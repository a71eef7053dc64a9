//! Per-region metadata aggregation.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};

use crate::annotation::AnnotationRecord;
use crate::geometry::Rect;

/// A final region with its aggregated annotation metadata.
///
/// Built by [`aggregate`]; immutable once handed to rendering.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RegionCluster {
    /// Bounding rectangle of the region.
    pub rect: Rect,
    /// Ids of member annotations, deduplicated, in insertion order.
    pub annot_ids: Vec<String>,
    /// Authors of member annotations; empty author fields are not recorded.
    pub authors: BTreeSet<String>,
    /// Most recent modification time among members, `None` until one is seen.
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// False when the region is wider than it is tall.
    pub portrait: bool,
}

impl RegionCluster {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            annot_ids: Vec::new(),
            authors: BTreeSet::new(),
            last_modified: None,
            portrait: true,
        }
    }

    /// Caption label for the region's authors, `"unknown"` when none were
    /// recorded.
    pub fn author_label(&self) -> String {
        if self.authors.is_empty() {
            "unknown".to_string()
        } else {
            self.authors
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Assign each annotation to every region its bounding box intersects and
/// accumulate the region metadata.
///
/// Membership is by bounding-box intersection against the region rectangle.
/// Annotations without a parsed modification date still join spatially but
/// contribute nothing to the timestamp. Records are borrowed, never cloned.
pub fn aggregate<'a, I>(regions: &[Rect], annots: I) -> Vec<RegionCluster>
where
    I: IntoIterator<Item = &'a AnnotationRecord>,
{
    let mut clusters: Vec<RegionCluster> = regions.iter().copied().map(RegionCluster::new).collect();

    for annot in annots {
        for cluster in clusters.iter_mut() {
            if !annot.bbox.intersects(&cluster.rect) {
                continue;
            }

            if !cluster.annot_ids.iter().any(|id| id == &annot.id) {
                cluster.annot_ids.push(annot.id.clone());
            }
            if !annot.author.is_empty() {
                cluster.authors.insert(annot.author.clone());
            }
            match (cluster.last_modified, annot.last_modified) {
                (None, Some(modified)) => cluster.last_modified = Some(modified),
                (Some(current), Some(modified)) if modified > current => {
                    cluster.last_modified = Some(modified)
                },
                _ => {},
            }
            if cluster.rect.width() > cluster.rect.height() {
                cluster.portrait = false;
            }
        }
    }

    clusters
}
