//! Annotation filtering by author and page selection.
//!
//! The interactive selection wizard lives outside this crate; what remains
//! here is the filter predicate itself and the parser for page selection
//! expressions like `2-6, 9, 12-16`.

use std::collections::BTreeSet;

use crate::annotation::AnnotationRecord;
use crate::error::{Error, Result};

/// Criteria for retaining annotations ahead of clustering.
///
/// A `None` field leaves that dimension unfiltered; the default filter
/// retains every annotation.
#[derive(Debug, Clone, Default)]
pub struct AnnotationFilter {
    /// Retain only annotations by this author.
    pub author: Option<String>,

    /// Retain only annotations on these page indices.
    pub pages: Option<BTreeSet<usize>>,
}

impl AnnotationFilter {
    /// Filter matching all annotations.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a single author.
    pub fn by_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Restrict to a page selection expression such as `"2-6, 9, 12-16"`.
    pub fn by_pages(mut self, selection: &str) -> Result<Self> {
        self.pages = Some(parse_page_selection(selection)?);
        Ok(self)
    }

    /// True if the record passes every configured criterion.
    pub fn matches(&self, record: &AnnotationRecord) -> bool {
        if let Some(author) = &self.author {
            if &record.author != author {
                return false;
            }
        }
        if let Some(pages) = &self.pages {
            if !pages.contains(&record.page_index) {
                return false;
            }
        }
        true
    }

    /// Retain the matching subset of `records`, preserving order.
    pub fn apply(&self, records: &[AnnotationRecord]) -> Vec<AnnotationRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Parse a comma-separated page selection with optional ranges.
///
/// # Examples
///
/// ```
/// use annot_summary::filter::parse_page_selection;
///
/// let pages = parse_page_selection("2-4, 9").unwrap();
/// assert_eq!(pages.into_iter().collect::<Vec<_>>(), vec![2, 3, 4, 9]);
/// ```
pub fn parse_page_selection(selection: &str) -> Result<BTreeSet<usize>> {
    let invalid = || Error::InvalidPageSelection(selection.to_string());

    let mut pages = BTreeSet::new();
    for part in selection.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(invalid());
        }
        match part.split_once('-') {
            Some((low, high)) => {
                let low: usize = low.trim().parse().map_err(|_| invalid())?;
                let high: usize = high.trim().parse().map_err(|_| invalid())?;
                if low > high {
                    return Err(invalid());
                }
                pages.extend(low..=high);
            },
            None => {
                pages.insert(part.parse().map_err(|_| invalid())?);
            },
        }
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn record(page_index: usize, author: &str) -> AnnotationRecord {
        AnnotationRecord {
            page_index,
            page_label: format!("{}", page_index + 1),
            id: format!("annot-{}-{}", page_index, author),
            author: author.to_string(),
            stroke_color: vec![],
            last_modified: None,
            bbox: Rect::new(0.0, 0.0, 10.0, 10.0),
        }
    }

    #[test]
    fn test_parse_page_selection_mixed() {
        let pages = parse_page_selection("2-6, 9, 12-16").unwrap();
        let expected: BTreeSet<usize> = (2..=6).chain([9]).chain(12..=16).collect();
        assert_eq!(pages, expected);
    }

    #[test]
    fn test_parse_page_selection_single() {
        let pages = parse_page_selection("7").unwrap();
        assert_eq!(pages.into_iter().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_parse_page_selection_rejects_garbage() {
        assert!(parse_page_selection("").is_err());
        assert!(parse_page_selection("2-").is_err());
        assert!(parse_page_selection("a-b").is_err());
        assert!(parse_page_selection("5-2").is_err());
        assert!(parse_page_selection("1,,3").is_err());
    }

    #[test]
    fn test_default_filter_matches_all() {
        let records = vec![record(0, "Alice"), record(3, "Bob")];
        assert_eq!(AnnotationFilter::all().apply(&records).len(), 2);
    }

    #[test]
    fn test_filter_by_author() {
        let records = vec![record(0, "Alice"), record(1, "Bob"), record(2, "Alice")];
        let filtered = AnnotationFilter::all().by_author("Alice").apply(&records);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.author == "Alice"));
    }

    #[test]
    fn test_filter_by_pages_and_author() {
        let records = vec![record(0, "Alice"), record(1, "Alice"), record(1, "Bob")];
        let filter = AnnotationFilter::all()
            .by_author("Alice")
            .by_pages("1-2")
            .unwrap();
        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].page_index, 1);
    }
}
