//! Geometric primitives for legend layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! Cartouche for placing legend blocks, table cells, and text lines.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in legend space
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - A rectangle defined by an origin (top-left) and a size
//! - [`Insets`] - Padding/margin values for four sides
//!
//! # Coordinate System
//!
//! Cartouche uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward (positive to the right)
//! - **Y-axis**: Increases downward (positive downward)
//!
//! Back-ends with a different native convention (PDF) convert at the edge.

/// A 2D point representing a position in legend coordinate space.
///
/// Points use `f32` coordinates and provide operations for basic vector math.
/// The coordinate system has origin at top-left with Y increasing downward
/// (see [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use cartouche_core::geometry::Point;
/// let origin = Point::new(10.0, 20.0);
/// let offset = Point::new(5.0, -5.0);
///
/// let moved = origin.add_point(offset);
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// A rectangle defined by a top-left origin and a size.
///
/// All legend geometry (item frames, block rectangles, table cells) is
/// expressed as `Rect`s in the Y-down coordinate space described in the
/// [module documentation](self).
///
/// # Examples
///
/// ```
/// # use cartouche_core::geometry::{Point, Rect, Size};
/// let body = Rect::new(Point::new(10.0, 10.0), Size::new(100.0, 50.0));
///
/// assert_eq!(body.max_x(), 110.0);
/// assert_eq!(body.center(), Point::new(60.0, 35.0));
///
/// let padded = body.inset(5.0);
/// assert_eq!(padded.width(), 90.0);
/// assert_eq!(padded.origin(), Point::new(15.0, 15.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new rectangle from a top-left origin and a size
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a new rectangle from raw origin coordinates and dimensions
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Returns the top-left origin of the rectangle
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the size of the rectangle
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the x-coordinate of the left edge
    pub fn x(self) -> f32 {
        self.origin.x
    }

    /// Returns the y-coordinate of the top edge
    pub fn y(self) -> f32 {
        self.origin.y
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> f32 {
        self.size.width
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> f32 {
        self.size.height
    }

    /// Returns the x-coordinate of the right edge
    pub fn max_x(self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn max_y(self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the center point of the rectangle
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns a new rectangle with the same size and the given origin
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Returns a new rectangle with the same origin and the given size
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    /// Moves the rectangle by the specified offset, keeping its size
    pub fn translate(self, offset: Point) -> Self {
        Self {
            origin: self.origin.add_point(offset),
            size: self.size,
        }
    }

    /// Shrinks the rectangle uniformly by the given amount on every side.
    ///
    /// A negative amount grows the rectangle instead; see [`Rect::outset`].
    pub fn inset(self, amount: f32) -> Self {
        self.inset_by(Insets::uniform(amount))
    }

    /// Grows the rectangle uniformly by the given amount on every side
    pub fn outset(self, amount: f32) -> Self {
        self.inset(-amount)
    }

    /// Shrinks the rectangle by the given insets, side by side
    pub fn inset_by(self, insets: Insets) -> Self {
        Self {
            origin: Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            size: Size::new(
                self.size.width - insets.horizontal_sum(),
                self.size.height - insets.vertical_sum(),
            ),
        }
    }

    /// Checks whether the given point lies inside the rectangle.
    ///
    /// Points on the left/top edges are inside; points on the right/bottom
    /// edges are outside, so adjacent rectangles never both claim a point.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x() && point.x < self.max_x() && point.y >= self.y() && point.y < self.max_y()
    }

    /// Checks whether this rectangle overlaps another by a non-empty area
    pub fn intersects(self, other: Rect) -> bool {
        self.x() < other.max_x()
            && other.x() < self.max_x()
            && self.y() < other.max_y()
            && other.y() < self.max_y()
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default_is_zero() {
        let point = Point::default();
        assert!(point.is_zero());
        assert!(!Point::new(1.0, 0.0).is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);

        let sum = p1.add_point(p2);
        assert_eq!(sum.x(), 7.0);
        assert_eq!(sum.y(), 11.0);

        let diff = p1.sub_point(p2);
        assert_eq!(diff.x(), 3.0);
        assert_eq!(diff.y(), 5.0);
    }

    #[test]
    fn test_point_scale() {
        let point = Point::new(2.0, 3.0);
        let scaled = point.scale(2.5);
        assert_eq!(scaled.x(), 5.0);
        assert_eq!(scaled.y(), 7.5);
    }

    #[test]
    fn test_size_max() {
        let size1 = Size::new(10.0, 20.0);
        let size2 = Size::new(15.0, 18.0);
        let max_size = size1.max(size2);

        assert_eq!(max_size.width(), 15.0);
        assert_eq!(max_size.height(), 20.0);
    }

    #[test]
    fn test_size_is_zero() {
        assert!(Size::default().is_zero());
        assert!(!Size::new(1.0, 0.0).is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_rect_accessors() {
        let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);

        assert_eq!(rect.x(), 10.0);
        assert_eq!(rect.y(), 20.0);
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.origin(), Point::new(10.0, 20.0));
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_rect_translate() {
        let rect = Rect::from_xywh(1.0, 2.0, 4.0, 4.0);
        let moved = rect.translate(Point::new(3.0, -1.0));

        assert_eq!(moved.x(), 4.0);
        assert_eq!(moved.y(), 1.0);
        assert_eq!(moved.width(), 4.0); // size unchanged
        assert_eq!(moved.height(), 4.0);
    }

    #[test]
    fn test_rect_inset_outset() {
        let rect = Rect::from_xywh(10.0, 10.0, 100.0, 50.0);

        let shrunk = rect.inset(5.0);
        assert_eq!(shrunk, Rect::from_xywh(15.0, 15.0, 90.0, 40.0));

        let grown = rect.outset(5.0);
        assert_eq!(grown, Rect::from_xywh(5.0, 5.0, 110.0, 60.0));

        assert_eq!(shrunk.outset(5.0), rect);
    }

    #[test]
    fn test_rect_inset_by_sides() {
        let rect = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        let shrunk = rect.inset_by(insets);

        assert_eq!(shrunk.x(), 4.0); // left
        assert_eq!(shrunk.y(), 1.0); // top
        assert_eq!(shrunk.width(), 94.0); // 100 - (4 + 2)
        assert_eq!(shrunk.height(), 96.0); // 100 - (1 + 3)
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);

        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(5.0, 5.0)));
        // right/bottom edges are exclusive
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 10.0)));
        assert!(!rect.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
        let c = Rect::from_xywh(20.0, 20.0, 5.0, 5.0);
        // shares only the edge with `a`
        let d = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
        assert!(!a.intersects(d));
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal_sum(), 6.0); // 2.0 + 4.0
        assert_eq!(insets.vertical_sum(), 4.0); // 1.0 + 3.0
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(5.0);
        assert_eq!(insets.top(), 5.0);
        assert_eq!(insets.right(), 5.0);
        assert_eq!(insets.bottom(), 5.0);
        assert_eq!(insets.left(), 5.0);
    }
}
