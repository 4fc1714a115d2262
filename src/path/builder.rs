// MIT/Apache2 License

use super::Path;
use crate::{
    geometry::{BezierCurve, FlattenConfig, Point},
    Error,
};

/// Accumulates the vertices of a closed path.
///
/// A builder holds a bounded number of vertices. A builder created with a capacity of `N` stores at most `N - 1`
/// vertices; the last slot is kept in reserve, matching the room a closing vertex would take. Curves are
/// flattened into straight lines as they are added, so they count against the capacity too.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    points: Vec<Point>,
    capacity: usize,
    config: FlattenConfig,
}

impl PathBuilder {
    /// Create a new builder that can hold `capacity - 1` vertices.
    #[inline]
    pub fn new(capacity: usize) -> crate::Result<PathBuilder> {
        Self::with_config(capacity, FlattenConfig::default())
    }

    /// Create a new builder that flattens curves according to `config`.
    pub fn with_config(capacity: usize, config: FlattenConfig) -> crate::Result<PathBuilder> {
        let mut points = Vec::new();
        points
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory)?;

        Ok(PathBuilder {
            points,
            capacity,
            config,
        })
    }

    /// The capacity this builder was created with.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of vertices that can still be added.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(1).saturating_sub(self.points.len())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The vertices accumulated so far.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The most recently added vertex.
    #[inline]
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The configuration used to flatten curves.
    #[inline]
    #[must_use]
    pub fn flatten_config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Set the starting point of the path. Fails if the path already has one.
    #[inline]
    pub fn move_to(&mut self, point: Point) -> crate::Result {
        if !self.points.is_empty() {
            return Err(Error::AlreadyStarted);
        }

        self.line_to(point)
    }

    /// Add a straight line from the last vertex to `point`.
    #[inline]
    pub fn line_to(&mut self, point: Point) -> crate::Result {
        if self.remaining() == 0 {
            return Err(Error::Capacity);
        }

        self.points.push(point);
        Ok(())
    }

    /// Add a cubic bezier curve from the last vertex to `point`, flattened into lines.
    ///
    /// If the builder runs out of room partway through, the vertices that did fit are kept and `Capacity` is
    /// returned.
    pub fn curve_to(&mut self, point: Point, control1: Point, control2: Point) -> crate::Result {
        let start = self.last_point().ok_or(Error::NoStartPoint)?;
        let curve = BezierCurve {
            start,
            control1,
            control2,
            end: point,
        };

        let config = self.config;
        let result = curve.flatten_into(&config, |pt| self.line_to(pt));
        if let Err(ref err) = result {
            log::debug!("Stopped flattening {:?} early: {}", curve, err);
        }
        result
    }

    /// Build the path. Trailing vertices equal to the first one are dropped, since the path is closed anyway.
    ///
    /// Fails if fewer than two vertices are left. The builder is left untouched and may be dropped or reused.
    pub fn finalize(&self) -> crate::Result<Path> {
        let mut len = self.points.len();
        if len < 2 {
            return Err(Error::TooFewPoints(len));
        }

        let first = self.points[0];
        while len > 1 && self.points[len - 1] == first {
            len -= 1;
        }

        let dropped = self.points.len() - len;
        log::debug!(
            "Finalizing path with {} points ({} closing points dropped)",
            len,
            dropped
        );

        Path::from_points(&self.points[..len]).ok_or(Error::TooFewPoints(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn closed_quadrilateral_drops_closing_point() {
        init();
        let mut builder = PathBuilder::new(16).unwrap();
        builder.move_to(Point::new(0, 0)).unwrap();
        builder.line_to(Point::new(10, 0)).unwrap();
        builder.line_to(Point::new(10, 10)).unwrap();
        builder.line_to(Point::new(0, 10)).unwrap();
        builder.line_to(Point::new(0, 0)).unwrap();
        assert_eq!(builder.len(), 5);

        let square = builder.finalize().unwrap();
        assert_eq!(
            square.points(),
            &[
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10)
            ]
        );
    }

    #[test]
    fn open_quadrilateral_is_kept_whole() {
        let mut builder = PathBuilder::new(16).unwrap();
        builder.move_to(Point::new(0, 0)).unwrap();
        builder.line_to(Point::new(10, 0)).unwrap();
        builder.line_to(Point::new(10, 10)).unwrap();
        builder.line_to(Point::new(0, 10)).unwrap();
        assert_eq!(builder.finalize().map(|path| path.len()), Ok(4));
    }

    #[test]
    fn capacity_reserves_one_slot() {
        const CAPACITY: usize = 8;
        let mut builder = PathBuilder::new(CAPACITY).unwrap();
        for i in 0..CAPACITY - 1 {
            builder.line_to(Point::new(i as i32, 0)).unwrap();
        }
        assert_eq!(builder.remaining(), 0);
        assert_eq!(builder.line_to(Point::new(99, 99)), Err(Error::Capacity));
        assert_eq!(builder.len(), CAPACITY - 1);
    }

    #[test]
    fn tiny_capacities_hold_nothing() {
        for &capacity in &[0, 1] {
            let mut builder = PathBuilder::new(capacity).unwrap();
            assert_eq!(builder.move_to(Point::ZERO), Err(Error::Capacity));
        }
    }

    #[test]
    fn only_one_start_point() {
        let mut builder = PathBuilder::new(8).unwrap();
        builder.move_to(Point::new(1, 2)).unwrap();
        assert_eq!(builder.move_to(Point::new(3, 4)), Err(Error::AlreadyStarted));
        assert_eq!(builder.points(), &[Point::new(1, 2)]);
    }

    #[test]
    fn curve_needs_start_point() {
        let mut builder = PathBuilder::new(8).unwrap();
        assert_eq!(
            builder.curve_to(Point::new(10, 10), Point::new(0, 10), Point::new(10, 0)),
            Err(Error::NoStartPoint)
        );
        assert!(builder.is_empty());
    }

    #[test]
    fn curve_appends_flattened_vertices() {
        init();
        let mut builder = PathBuilder::new(256).unwrap();
        builder.move_to(Point::new(-15, -15)).unwrap();
        builder
            .curve_to(Point::new(15, -15), Point::new(-15, -60), Point::new(15, -60))
            .unwrap();

        let expected = BezierCurve {
            start: Point::new(-15, -15),
            control1: Point::new(-15, -60),
            control2: Point::new(15, -60),
            end: Point::new(15, -15),
        }
        .into_points(builder.flatten_config());

        assert_eq!(builder.points()[0], Point::new(-15, -15));
        assert_eq!(&builder.points()[1..], &expected[..]);
        assert_eq!(builder.last_point(), Some(Point::new(15, -15)));
    }

    #[test]
    fn curve_keeps_partial_output_when_full() {
        init();
        let mut builder = PathBuilder::new(5).unwrap();
        builder.move_to(Point::new(0, 0)).unwrap();
        assert_eq!(
            builder.curve_to(Point::new(0, 100), Point::new(100, 0), Point::new(100, 100)),
            Err(Error::Capacity)
        );
        assert_eq!(builder.len(), 4);
        assert_eq!(builder.remaining(), 0);
    }

    #[test]
    fn finalize_needs_two_points() {
        let mut builder = PathBuilder::new(8).unwrap();
        assert_eq!(builder.finalize(), Err(Error::TooFewPoints(0)));
        builder.move_to(Point::new(3, 3)).unwrap();
        assert_eq!(builder.finalize(), Err(Error::TooFewPoints(1)));

        // a line back onto the start point collapses to a single vertex
        builder.line_to(Point::new(3, 3)).unwrap();
        assert_eq!(builder.finalize(), Err(Error::TooFewPoints(1)));

        builder.line_to(Point::new(5, 3)).unwrap();
        assert_eq!(builder.finalize().map(|path| path.len()), Ok(3));
    }

    #[test]
    fn path_outlives_builder() {
        let mut builder = PathBuilder::new(8).unwrap();
        builder.move_to(Point::new(0, 0)).unwrap();
        builder.line_to(Point::new(4, 0)).unwrap();
        builder.line_to(Point::new(4, 4)).unwrap();
        let path = builder.finalize().unwrap();
        drop(builder);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn huge_capacity_is_out_of_memory() {
        assert_eq!(
            PathBuilder::new(usize::MAX).map(|_| ()),
            Err(Error::OutOfMemory)
        );
    }
}
