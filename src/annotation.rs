//! Annotation records handed to the clustering pipeline.
//!
//! Extraction itself lives in the document-access collaborator; this module
//! defines the read-only record shape plus helpers for the PDF
//! modification-date format (`D:YYYYMMDDHHmmSS±HH'mm'`, ISO 32000-1:2008
//! Section 7.9.4) and stroke-color swatches.

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::geometry::Rect;

/// A single extracted annotation.
///
/// Created once during extraction and read-only afterwards. Identity is the
/// `id` field, which must be unique within a document.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnnotationRecord {
    /// Zero-based index of the page carrying the annotation.
    pub page_index: usize,

    /// The page's display label.
    pub page_label: String,

    /// Unique annotation id (NM entry).
    pub id: String,

    /// Author of the annotation (T entry), possibly empty.
    pub author: String,

    /// Stroke color as 0-3 channel floats in 0..=1; empty means no color.
    pub stroke_color: Vec<f32>,

    /// Parsed modification date, `None` when the raw date was missing or
    /// malformed (the annotation still participates in spatial grouping).
    pub last_modified: Option<DateTime<FixedOffset>>,

    /// Bounding box on the page.
    pub bbox: Rect,
}

impl AnnotationRecord {
    /// Render the stroke color as a `#rrggbb` hex string.
    ///
    /// Single-channel gray colors are replicated across all three channels.
    /// Returns `None` for colorless annotations or unsupported channel counts.
    pub fn stroke_rgb_hex(&self) -> Option<String> {
        let to_byte = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        match self.stroke_color.as_slice() {
            [gray] => {
                let g = to_byte(*gray);
                Some(format!("#{:02x}{:02x}{:02x}", g, g, g))
            },
            [r, g, b] => Some(format!(
                "#{:02x}{:02x}{:02x}",
                to_byte(*r),
                to_byte(*g),
                to_byte(*b)
            )),
            _ => None,
        }
    }
}

/// Parse a PDF modification date such as `D:20230115093000+01'00'`.
///
/// The apostrophes in the timezone designator are stripped before parsing.
pub fn parse_mod_date(raw: &str) -> Result<DateTime<FixedOffset>> {
    let cleaned = raw.replace('\'', "");
    DateTime::parse_from_str(&cleaned, "D:%Y%m%d%H%M%S%z").map_err(|e| Error::DateParse {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
