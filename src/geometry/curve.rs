// MIT/Apache2 License

use super::{atan2_lookup, Angle, Point, TRIG_MAX_ANGLE};
use tinyvec::TinyVec;

/// Control points are scaled up by `1 << SUBPIXEL_SHIFT` while subdividing, so repeated midpoint averaging
/// doesn't lose precision.
pub const SUBPIXEL_SHIFT: u32 = 4;
const SUBPIXEL_SCALE: i64 = 1 << SUBPIXEL_SHIFT;

/// Curves whose chords deviate by less than this are drawn as a single line. Roughly ten degrees.
pub const DEFAULT_ANGLE_TOLERANCE: Angle = Angle(TRIG_MAX_ANGLE / 360 * 10);
/// Subdivision never goes deeper than this by default.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Parameters for turning curves into lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FlattenConfig {
    angle_tolerance: Angle,
    max_depth: u32,
}

impl Default for FlattenConfig {
    #[inline]
    fn default() -> Self {
        Self {
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FlattenConfig {
    /// Set the summed chord deviation below which a curve counts as flat.
    #[inline]
    #[must_use]
    pub fn with_angle_tolerance(self, angle_tolerance: Angle) -> Self {
        Self {
            angle_tolerance,
            ..self
        }
    }

    /// Set the subdivision depth at which the current approximation is accepted no matter how it looks.
    #[inline]
    #[must_use]
    pub fn with_max_depth(self, max_depth: u32) -> Self {
        Self { max_depth, ..self }
    }

    #[inline]
    #[must_use]
    pub fn angle_tolerance(&self) -> Angle {
        self.angle_tolerance
    }

    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

/// A bezier curve, with four control points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BezierCurve {
    /// The starting point.
    pub start: Point,
    /// The first control point.
    pub control1: Point,
    /// The second control point.
    pub control2: Point,
    /// The ending point.
    pub end: Point,
}

impl BezierCurve {
    /// Approximate this curve with straight lines, handing each new vertex to `emit`.
    ///
    /// The start point is not emitted, since it is expected to already be the last vertex of whatever is being
    /// built. The end point is always emitted last and exactly once. If `emit` fails, flattening stops and the
    /// error is returned; vertices emitted up to that point stay emitted.
    pub fn flatten_into<F>(self, config: &FlattenConfig, mut emit: F) -> crate::Result
    where
        F: FnMut(Point) -> crate::Result,
    {
        let mut stack: TinyVec<[Pending; 32]> = TinyVec::new();
        let mut hit_depth_cap = false;

        stack.push(Pending {
            segment: BezierSegment::from_curve(self),
            depth: 0,
        });

        // the right half is pushed first so the whole left half is emitted before it
        while let Some(Pending { segment, depth }) = stack.pop() {
            let (left, middle, right) = segment.subdivide();

            let flat = segment.is_flat(config.angle_tolerance);
            if flat || depth >= config.max_depth {
                hit_depth_cap |= !flat;
                emit(middle.to_pixels())?;
                continue;
            }

            stack.push(Pending {
                segment: right,
                depth: depth + 1,
            });
            stack.push(Pending {
                segment: left,
                depth: depth + 1,
            });
        }

        if hit_depth_cap {
            log::debug!(
                "Curve {:?} hit the subdivision depth cap of {}",
                self,
                config.max_depth
            );
        }

        emit(self.end)
    }

    /// Collect the vertices approximating this curve, excluding the start point.
    #[must_use]
    pub fn into_points(self, config: &FlattenConfig) -> Vec<Point> {
        let mut points = Vec::new();
        let result = self.flatten_into(config, |pt| {
            points.push(pt);
            Ok(())
        });
        debug_assert!(result.is_ok());
        points
    }
}

/// A point in subpixel space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct Fixed {
    x: i64,
    y: i64,
}

impl Fixed {
    #[inline]
    fn from_pixels(pt: Point) -> Fixed {
        Fixed {
            x: i64::from(pt.x) * SUBPIXEL_SCALE,
            y: i64::from(pt.y) * SUBPIXEL_SCALE,
        }
    }

    #[inline]
    fn to_pixels(self) -> Point {
        Point {
            x: (self.x >> SUBPIXEL_SHIFT) as i32,
            y: (self.y >> SUBPIXEL_SHIFT) as i32,
        }
    }

    #[inline]
    fn midpoint(self, other: Fixed) -> Fixed {
        Fixed {
            x: (self.x + other.x) >> 1,
            y: (self.y + other.y) >> 1,
        }
    }

    /// Direction of the chord from `self` to `other`. Anything shorter than a pixel reads as direction zero.
    #[inline]
    fn direction_to(self, other: Fixed) -> Angle {
        let dx = (other.x - self.x) / SUBPIXEL_SCALE;
        let dy = (other.y - self.y) / SUBPIXEL_SCALE;
        atan2_lookup(clamp_i32(dy), clamp_i32(dx))
    }
}

#[inline]
fn clamp_i32(v: i64) -> i32 {
    v.max(i64::from(i32::MIN)).min(i64::from(i32::MAX)) as i32
}

/// One piece of a curve being subdivided, in subpixel space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct BezierSegment {
    p1: Fixed,
    p2: Fixed,
    p3: Fixed,
    p4: Fixed,
}

#[derive(Debug, Copy, Clone, Default)]
struct Pending {
    segment: BezierSegment,
    depth: u32,
}

impl BezierSegment {
    #[inline]
    fn from_curve(curve: BezierCurve) -> BezierSegment {
        BezierSegment {
            p1: Fixed::from_pixels(curve.start),
            p2: Fixed::from_pixels(curve.control1),
            p3: Fixed::from_pixels(curve.control2),
            p4: Fixed::from_pixels(curve.end),
        }
    }

    /// Split the segment at t = 0.5. Returns the left half, the on-curve point where they meet, and the right
    /// half.
    #[inline]
    fn subdivide(&self) -> (BezierSegment, Fixed, BezierSegment) {
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p34 = self.p3.midpoint(self.p4);
        let p123 = p12.midpoint(p23);
        let p234 = p23.midpoint(p34);
        let p1234 = p123.midpoint(p234);

        (
            BezierSegment {
                p1: self.p1,
                p2: p12,
                p3: p123,
                p4: p1234,
            },
            p1234,
            BezierSegment {
                p1: p1234,
                p2: p234,
                p3: p34,
                p4: self.p4,
            },
        )
    }

    /// Tell if the three chords of the control polygon turn by less than `tolerance` in total.
    #[inline]
    fn is_flat(&self, tolerance: Angle) -> bool {
        let a12 = self.p1.direction_to(self.p2);
        let a23 = self.p2.direction_to(self.p3);
        let a34 = self.p3.direction_to(self.p4);

        let total = a23.deviation(a12).units() + a34.deviation(a23).units();
        total < tolerance.units()
    }
}
