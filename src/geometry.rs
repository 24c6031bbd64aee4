//! Geometric primitives shared by layers, operations, and renderers.
//!
//! All coordinates are in a y-up world space (the SVG canvas flips to y-down
//! at export time). A layer's anchor is the bottom-left corner of its base
//! shape; see [`Corners`] for the attachment-point convention.

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

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
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

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit minimum and maximum coordinates
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    ///
    /// The resulting bounds will have the minimum values of both bounds for min_x and min_y,
    /// and the maximum values of both bounds for max_x and max_y.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds by a fraction of its own width and height on each side
    ///
    /// Used for diagram margins: `expand_fractional(0.05, 0.3)` adds 5% of the
    /// width to the left and right and 30% of the height above and below.
    pub fn expand_fractional(&self, x_fraction: f32, y_fraction: f32) -> Self {
        let x_offset = self.width() * x_fraction;
        let y_offset = self.height() * y_fraction;

        Self {
            min_x: self.min_x - x_offset,
            min_y: self.min_y - y_offset,
            max_x: self.max_x + x_offset,
            max_y: self.max_y + y_offset,
        }
    }
}

/// The four attachment corners of a layer's full graphic extent.
///
/// Operations anchor their connecting geometry to these points. For
/// diagonally stacked layers the corners follow the stacking offset, so they
/// are attachment points rather than an axis-aligned box; the axis-aligned
/// extent is recovered with [`Corners::bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    top_left: Point,
    top_right: Point,
    bottom_left: Point,
    bottom_right: Point,
}

impl Corners {
    pub fn new(top_left: Point, top_right: Point, bottom_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Returns the top-left attachment corner
    pub fn top_left(self) -> Point {
        self.top_left
    }

    /// Returns the top-right attachment corner
    pub fn top_right(self) -> Point {
        self.top_right
    }

    /// Returns the bottom-left attachment corner
    pub fn bottom_left(self) -> Point {
        self.bottom_left
    }

    /// Returns the bottom-right attachment corner
    pub fn bottom_right(self) -> Point {
        self.bottom_right
    }

    /// Derives the axis-aligned extent spanned by the corners
    ///
    /// The top-left corner carries the minimum x and maximum y, the
    /// bottom-right corner the maximum x and minimum y; the stacking offset
    /// of slanted layers keeps this exact.
    pub fn bounds(self) -> Bounds {
        Bounds {
            min_x: self.top_left.x,
            min_y: self.bottom_right.y,
            max_x: self.bottom_right.x,
            max_y: self.top_left.y,
        }
    }

    /// Returns the midpoint of the right edge (between top-right and bottom-right)
    pub fn right_middle(self) -> Point {
        self.top_right.midpoint(self.bottom_right)
    }

    /// Returns the midpoint of the left edge (between top-left and bottom-left)
    pub fn left_middle(self) -> Point {
        self.top_left.midpoint(self.bottom_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        let sum = p1.add_point(p2);
        assert_eq!(sum.x(), 4.0);
        assert_eq!(sum.y(), 6.0);

        let diff = sum.sub_point(p2);
        assert_eq!(diff.x(), p1.x());
        assert_eq!(diff.y(), p1.y());
    }

    #[test]
    fn test_point_midpoint() {
        let midpoint = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(midpoint.x(), 2.0);
        assert_eq!(midpoint.y(), 3.0);
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(2.0, 3.0).scale(2.5);
        assert_eq!(scaled.x(), 5.0);
        assert_eq!(scaled.y(), 7.5);
    }

    #[test]
    fn test_size_max() {
        let max_size = Size::new(10.0, 20.0).max(Size::new(15.0, 18.0));
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
    fn test_bounds_dimensions() {
        let bounds = Bounds::new(2.0, 3.0, 7.0, 11.0);
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 8.0);
        assert_eq!(bounds.to_size(), Size::new(5.0, 8.0));
    }

    #[test]
    fn test_bounds_merge() {
        let merged = Bounds::new(1.0, 2.0, 5.0, 6.0).merge(&Bounds::new(3.0, 0.0, 8.0, 4.0));
        assert_eq!(merged.min_x(), 1.0);
        assert_eq!(merged.min_y(), 0.0);
        assert_eq!(merged.max_x(), 8.0);
        assert_eq!(merged.max_y(), 6.0);
    }

    #[test]
    fn test_bounds_expand_fractional() {
        let expanded = Bounds::new(0.0, 0.0, 100.0, 10.0).expand_fractional(0.05, 0.3);
        assert_eq!(expanded.min_x(), -5.0);
        assert_eq!(expanded.max_x(), 105.0);
        assert_eq!(expanded.min_y(), -3.0);
        assert_eq!(expanded.max_y(), 13.0);
    }

    #[test]
    fn test_corners_bounds() {
        // Slanted extent: corners shifted the way a diagonal stack shifts them
        let corners = Corners::new(
            Point::new(0.0, 100.0),
            Point::new(80.0, 100.0),
            Point::new(40.0, -20.0),
            Point::new(120.0, -20.0),
        );
        let bounds = corners.bounds();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_x(), 120.0);
        assert_eq!(bounds.min_y(), -20.0);
        assert_eq!(bounds.max_y(), 100.0);
    }

    #[test]
    fn test_corners_edge_middles() {
        let corners = Corners::new(
            Point::new(0.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
        );
        assert_eq!(corners.right_middle(), Point::new(20.0, 5.0));
        assert_eq!(corners.left_middle(), Point::new(0.0, 5.0));
    }
}
