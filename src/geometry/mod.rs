//! Geometric primitives for region clustering.
//!
//! This module provides the rectangle type and operations used throughout
//! the grouping, growth and refinement algorithms. Rectangles are immutable
//! value types: every operation returns a new rectangle.

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page space, stored as corner coordinates.
///
/// The constructor normalizes the corners so that `x0 <= x1` and `y0 <= y1`
/// always hold.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge
    pub x0: f32,
    /// Y coordinate of the top edge
    pub y0: f32,
    /// X coordinate of the right edge
    pub x1: f32,
    /// Y coordinate of the bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a new rectangle from two corner points, normalizing the order.
    ///
    /// # Examples
    ///
    /// ```
    /// use annot_summary::geometry::Rect;
    ///
    /// let rect = Rect::new(110.0, 70.0, 10.0, 20.0);
    /// assert_eq!(rect.x0, 10.0);
    /// assert_eq!(rect.y0, 20.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Get the rectangle's width.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Get the rectangle's height.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Get the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point {
            x: (self.x0 + self.x1) / 2.0,
            y: (self.y0 + self.y1) / 2.0,
        }
    }

    /// Compute the area of the rectangle.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// True if the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Return a new rectangle enlarged by `margin` on all four sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use annot_summary::geometry::Rect;
    ///
    /// let rect = Rect::new(100.0, 100.0, 200.0, 150.0);
    /// let grown = rect.expand(18.0);
    /// assert_eq!(grown, Rect::new(82.0, 82.0, 218.0, 168.0));
    /// ```
    pub fn expand(&self, margin: f32) -> Rect {
        Rect::new(
            self.x0 - margin,
            self.y0 - margin,
            self.x1 + margin,
            self.y1 + margin,
        )
    }

    /// Check if this rectangle overlaps another on a nonzero area.
    ///
    /// Rectangles that merely touch along an edge or corner do not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use annot_summary::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let b = Rect::new(50.0, 50.0, 150.0, 150.0);
    /// let c = Rect::new(100.0, 0.0, 200.0, 100.0); // shares an edge with `a`
    ///
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c));
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && self.x1 > other.x0 && self.y0 < other.y1 && self.y1 > other.y0
    }

    /// Check if this rectangle fully contains another.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && self.x1 >= other.x1 && self.y1 >= other.y1
    }

    /// Compute the smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Clamp this rectangle to another, returning their intersection.
    ///
    /// When the rectangles are disjoint the result is an empty rectangle
    /// collapsed onto the clamping boundary.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1).max(x0);
        let y1 = self.y1.min(other.y1).max(y0);
        Rect { x0, y0, x1, y1 }
    }

    /// Length of the rectangle's shorter side.
    pub fn min_side(&self) -> f32 {
        self.width().min(self.height())
    }

    /// Length of the rectangle's longer side.
    pub fn max_side(&self) -> f32 {
        self.width().max(self.height())
    }
}
