//! Transitive merging of overlapping rectangles.

use crate::geometry::Rect;

/// Collapse a set of rectangles into non-overlapping bounding rectangles.
///
/// Any two rectangles that overlap are replaced by their union, transitively:
/// chains of overlaps collapse into a single rectangle. Passes repeat until a
/// full pass merges nothing, so the output is guaranteed pairwise disjoint
/// and the function is idempotent.
///
/// # Examples
///
/// ```
/// use annot_summary::geometry::Rect;
/// use annot_summary::regions::merge_overlapping;
///
/// let rects = vec![
///     Rect::new(0.0, 0.0, 10.0, 10.0),
///     Rect::new(5.0, 5.0, 15.0, 15.0),
///     Rect::new(100.0, 100.0, 110.0, 110.0),
/// ];
/// let merged = merge_overlapping(rects);
/// assert_eq!(merged.len(), 2);
/// assert!(merged.contains(&Rect::new(0.0, 0.0, 15.0, 15.0)));
/// ```
pub fn merge_overlapping(mut rects: Vec<Rect>) -> Vec<Rect> {
    loop {
        let before = rects.len();
        rects = merge_pass(rects);
        if rects.len() == before {
            return rects;
        }
    }
}

/// One accumulate pass: each rectangle is folded into the first already
/// accumulated rectangle it overlaps, or kept as a new one. A merge can
/// leave the enlarged rectangle overlapping a later accumulated one; the
/// outer loop re-runs until that no longer happens.
fn merge_pass(input: Vec<Rect>) -> Vec<Rect> {
    let mut merged: Vec<Rect> = Vec::with_capacity(input.len());
    for rect in input {
        match merged.iter_mut().find(|m| m.intersects(&rect)) {
            Some(m) => *m = m.union(&rect),
            None => merged.push(rect),
        }
    }
    merged
}
