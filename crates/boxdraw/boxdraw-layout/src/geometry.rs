//! Geometry primitives.
//!
//! Positions, offsets and directions are plain embedded-graphics [`Point`]s
//! (integer x/y with component-wise `+`, `-` and scalar `*`, `/`). This module
//! adds the few helpers the layout tree needs on top of them.
//!
//! ```
//! use boxdraw_layout::geometry::{Point, PointExt};
//!
//! let p = Point::new(3, 4) + Point::splat(2);
//! assert_eq!(p, Point::new(5, 6));
//! assert_eq!(Point::new(3, 4).length(), 5.0);
//! assert_eq!(Point::new(7, -3).floor_half(), Point::new(3, -2));
//! ```

pub use embedded_graphics::prelude::{Point, Size};

/// Helpers on [`Point`] used by the layout and shape code.
pub trait PointExt {
    /// A point with both coordinates set to `value`.
    fn splat(value: i32) -> Self;

    /// Euclidean length of the vector from the origin.
    fn length(self) -> f32;

    /// Component-wise floor division by two.
    fn floor_half(self) -> Self;
}

impl PointExt for Point {
    fn splat(value: i32) -> Self {
        Point::new(value, value)
    }

    // SAFETY: squares of display coordinates stay far below f32 precision limits.
    #[allow(clippy::arithmetic_side_effects)]
    fn length(self) -> f32 {
        let x = self.x as f32;
        let y = self.y as f32;
        (x * x + y * y).sqrt()
    }

    fn floor_half(self) -> Self {
        Point::new(floor_half(self.x), floor_half(self.y))
    }
}

/// Floor division by two (`-3 / 2 == -2`).
pub fn floor_half(value: i32) -> i32 {
    value.div_euclid(2)
}

/// A unit direction vector with fractional components.
///
/// Integer points cannot represent diagonal unit vectors, so dashed lines
/// step along a `Direction` and round each produced point back to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    /// Horizontal component.
    pub dx: f32,
    /// Vertical component.
    pub dy: f32,
}

impl Direction {
    /// Straight down, `(0, 1)`.
    pub const DOWN: Self = Self { dx: 0.0, dy: 1.0 };

    /// Unit vector pointing from `start` to `end`.
    ///
    /// When both points share the same x coordinate this returns
    /// [`Direction::DOWN`], whatever the sign of the y delta.
    // SAFETY: delta of two display coordinates; length is non-zero whenever x differs.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn between(start: Point, end: Point) -> Self {
        if start.x == end.x {
            return Self::DOWN;
        }
        let delta = end - start;
        let length = delta.length();
        Self {
            dx: delta.x as f32 / length,
            dy: delta.y as f32 / length,
        }
    }

    /// `origin + self * distance`, rounded to the nearest grid point.
    // SAFETY: distance and coordinates are display sized; the rounded result fits in i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub fn advance(self, origin: Point, distance: f32) -> Point {
        Point::new(
            origin.x + (self.dx * distance).round() as i32,
            origin.y + (self.dy * distance).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(13, 24));
        assert_eq!(a - b, Point::new(7, 16));
        assert_eq!(b * 3, Point::new(9, 12));
        assert_eq!(a / 2, Point::new(5, 10));
    }

    #[test]
    fn test_splat() {
        assert_eq!(Point::splat(10), Point::new(10, 10));
    }

    #[test]
    fn test_floor_half_negative() {
        assert_eq!(floor_half(5), 2);
        assert_eq!(floor_half(-5), -3);
        assert_eq!(floor_half(0), 0);
    }

    #[test]
    fn test_direction_horizontal() {
        let d = Direction::between(Point::zero(), Point::new(100, 0));
        assert_eq!(d, Direction { dx: 1.0, dy: 0.0 });
        assert_eq!(d.advance(Point::new(5, 5), 10.0), Point::new(15, 5));
    }

    #[test]
    fn test_direction_vertical_fallback() {
        // Upward vertical lines still step downwards.
        let d = Direction::between(Point::new(4, 50), Point::new(4, 0));
        assert_eq!(d, Direction::DOWN);
    }

    #[test]
    fn test_direction_diagonal() {
        let d = Direction::between(Point::zero(), Point::new(30, 40));
        assert!((d.dx - 0.6).abs() < 1e-6);
        assert!((d.dy - 0.8).abs() < 1e-6);
        assert_eq!(d.advance(Point::zero(), 10.0), Point::new(6, 8));
    }
}
