// MIT/Apache2 License

mod angle;
mod curve;

pub use angle::*;
pub use curve::*;

use std::ops;

/// A point in two-dimensional space, in device pixels. The X axis runs from left to right, and the Y axis runs
/// from top to bottom.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Rotate this point about the origin by `rotation`, then move it by `offset`.
    ///
    /// Uses the fixed-point sine and cosine tables. Each coordinate is rounded to the nearest pixel, and clamped
    /// to the range of `i32`.
    #[inline]
    #[must_use]
    pub fn rotate_offset(self, rotation: Angle, offset: Point) -> Point {
        let cosine = i64::from(cos_lookup(rotation));
        let sine = i64::from(sin_lookup(rotation));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        let ratio = i64::from(TRIG_MAX_RATIO);

        let rx = crate::util::div_round_closest(x * cosine - y * sine, ratio);
        let ry = crate::util::div_round_closest(y * cosine + x * sine, ratio);

        Point {
            x: crate::util::clamp_to_i32(rx).saturating_add(offset.x),
            y: crate::util::clamp_to_i32(ry).saturating_add(offset.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Point {
        Point { x, y }
    }
}

impl ops::Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl ops::Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl ops::Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}
