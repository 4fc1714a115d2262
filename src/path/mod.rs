// MIT/Apache2 License

mod builder;

pub use builder::PathBuilder;

use crate::geometry::{Angle, Point};
use std::slice::Iter as SliceIter;

/// A closed polygon, along with the rotation and offset it is drawn with.
///
/// The last point is implicitly connected to the first; no closing vertex is stored. The vertices can't be
/// changed once the path is built, but the transform can be changed freely between draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    points: Box<[Point]>,
    rotation: Angle,
    offset: Point,
}

impl Path {
    /// Create a path from a set of vertices. Returns `None` if there are fewer than two.
    #[inline]
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Path> {
        if points.len() < 2 {
            None
        } else {
            Some(Path {
                points: points.into(),
                rotation: Angle::ZERO,
                offset: Point::ZERO,
            })
        }
    }

    /// The untransformed vertices of this path.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of vertices in this path. This is always at least two.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a path has at least two vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The rotation about the origin applied before drawing, in `[0, TRIG_MAX_ANGLE)`.
    #[inline]
    #[must_use]
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// Set the rotation. It is wrapped into a single turn.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation.normalized();
    }

    /// Turn the path further by `delta`, wrapping at a full turn.
    #[inline]
    pub fn rotate_by(&mut self, delta: Angle) {
        self.set_rotation(self.rotation + delta);
    }

    /// The translation applied after rotating.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Set the translation applied after rotating.
    #[inline]
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Iterate over the vertices with the path's rotation and offset applied.
    #[inline]
    pub fn transformed_points(&self) -> impl Iterator<Item = Point> + '_ {
        let (rotation, offset) = (self.rotation, self.offset);
        self.points
            .iter()
            .map(move |pt| pt.rotate_offset(rotation, offset))
    }

    /// Iterate over the edges of the closed polygon, including the one from the last vertex back to the first.
    #[inline]
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.points)
    }
}

/// Iterator over the edges of a [`Path`].
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    first: Option<Point>,
    prev: Option<Point>,
    iter: SliceIter<'a, Point>,
}

impl<'a> Edges<'a> {
    /// Edges of the closed polygon made by `points`. A single point yields one edge back onto itself.
    #[inline]
    pub(crate) fn new(points: &'a [Point]) -> Edges<'a> {
        Edges {
            first: points.first().copied(),
            prev: None,
            iter: points.iter(),
        }
    }
}

impl<'a> Iterator for Edges<'a> {
    type Item = (Point, Point);

    #[inline]
    fn next(&mut self) -> Option<(Point, Point)> {
        loop {
            match (self.prev, self.iter.next()) {
                (None, Some(&pt)) => self.prev = Some(pt),
                (Some(prev), Some(&pt)) => {
                    self.prev = Some(pt);
                    return Some((prev, pt));
                }
                // wrap around to the first point, once
                (Some(prev), None) => {
                    self.prev = None;
                    return self.first.map(|first| (prev, first));
                }
                (None, None) => return None,
            }
        }
    }
}
