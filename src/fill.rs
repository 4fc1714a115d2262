// MIT/Apache2 License

//! Scanline filling of closed polygons.
//!
//! Every row the polygon touches is intersected with every edge. Crossings are sorted into two lists, one for
//! edges heading down the surface and one for edges heading up, and the n-th upward crossing is paired with the
//! n-th downward crossing to form a span. Pairing by direction instead of counting crossings means that the
//! overlapping lobes of a self-intersecting contour are filled rather than cut out.

use crate::{
    geometry::{Angle, Point},
    path::{Edges, Path},
    surface::Surface,
    util::{clamp_to_i32, div_round_closest},
};
use std::cmp::{self, Ordering};
use tinyvec::TinyVec;

/// X coordinates where edges cross a single row.
type Crossings = TinyVec<[i32; 16]>;

/// The way an edge heads along the Y axis, following the order of the contour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards lower row indices.
    Up,
    /// Towards higher row indices.
    Down,
}

impl Direction {
    /// The direction of the edge from `from` to `to`, or `None` if it is horizontal.
    #[inline]
    #[must_use]
    pub fn of_edge(from: Point, to: Point) -> Option<Direction> {
        match to.y.cmp(&from.y) {
            Ordering::Greater => Some(Direction::Down),
            Ordering::Less => Some(Direction::Up),
            Ordering::Equal => None,
        }
    }
}

/// Fill a path into a surface, using the path's own rotation and offset.
#[inline]
pub fn fill_path<S: Surface + ?Sized>(surface: &mut S, path: &Path) {
    let points: Vec<Point> = path.transformed_points().collect();
    fill_polygon(surface, &points);
}

/// Fill the closed polygon made by `points` into a surface, after rotating it about the origin by `rotation`
/// and moving it by `offset`.
///
/// Fewer than two points is a no-op, and only rows inside `surface.rows()` are painted.
pub fn fill<S: Surface + ?Sized>(surface: &mut S, points: &[Point], rotation: Angle, offset: Point) {
    let points: Vec<Point> = points
        .iter()
        .map(|pt| pt.rotate_offset(rotation, offset))
        .collect();
    fill_polygon(surface, &points);
}

/// Fill an already transformed polygon.
fn fill_polygon<S: Surface + ?Sized>(surface: &mut S, points: &[Point]) {
    if points.len() < 2 {
        return;
    }

    let (min_y, max_y) = points.iter().fold((i32::MAX, i32::MIN), |(min_y, max_y), pt| {
        (cmp::min(min_y, pt.y), cmp::max(max_y, pt.y))
    });
    let rows = surface.rows();
    let top = cmp::max(min_y, rows.start);
    let bottom = cmp::min(max_y, rows.end.saturating_sub(1));

    if top > bottom {
        log::trace!(
            "Polygon rows {}..={} are outside of {:?}, skipping",
            min_y,
            max_y,
            rows
        );
        return;
    }

    let edges: Vec<(Point, Point)> = Edges::new(points).collect();
    let start_direction = starting_direction(&edges);
    log::trace!(
        "Filling {} vertices over rows {}..={}, starting {:?}",
        points.len(),
        top,
        bottom,
        start_direction
    );

    let mut up = Crossings::with_capacity(points.len());
    let mut down = Crossings::with_capacity(points.len());

    for y in top..=bottom {
        up.clear();
        down.clear();
        row_crossings(&edges, y, start_direction, &mut up, &mut down);

        up.sort_unstable();
        down.sort_unstable();

        for (&a, &b) in up.iter().zip(down.iter()) {
            let (x0, x1) = if a <= b { (a, b) } else { (b, a) };
            surface.fill_span(x0, x1, y);
        }
    }
}

/// The direction of the last edge that isn't horizontal, looking backwards from the edge that closes the
/// polygon. Horizontal edges at the start of the contour take on this direction.
///
/// If every edge is horizontal, this is `Up`.
fn starting_direction(edges: &[(Point, Point)]) -> Direction {
    edges
        .iter()
        .rev()
        .find_map(|&(from, to)| Direction::of_edge(from, to))
        .unwrap_or(Direction::Up)
}

/// Collect the crossings of every edge with row `y`.
fn row_crossings(
    edges: &[(Point, Point)],
    y: i32,
    start_direction: Direction,
    up: &mut Crossings,
    down: &mut Crossings,
) {
    let mut last_direction = start_direction;

    for &(from, to) in edges {
        // the edge has to touch or cross this row
        if (i64::from(from.y) - i64::from(y)) * (i64::from(to.y) - i64::from(y)) > 0 {
            continue;
        }

        let direction = Direction::of_edge(from, to).unwrap_or(last_direction);

        // an edge starting on this row continues the previous one if they go the same way; the previous edge
        // already counted the shared vertex
        if !(from.y == y && direction == last_direction) {
            let x = crossing_x(from, to, y);
            match direction {
                Direction::Up => up.push(x),
                Direction::Down => down.push(x),
            }
        }

        last_direction = direction;
    }
}

/// Where the edge from `from` to `to` crosses row `y`, rounded to the nearest pixel.
#[inline]
fn crossing_x(from: Point, to: Point, y: i32) -> i32 {
    if from.y == to.y {
        return from.x;
    }

    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    let x = i64::from(from.x) + div_round_closest(dx * (i64::from(y) - i64::from(from.y)), dy);
    clamp_to_i32(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{path::PathBuilder, surface::Bitmap};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| c.into()).collect()
    }

    fn edges(coords: &[(i32, i32)]) -> Vec<(Point, Point)> {
        Edges::new(&pts(coords)).collect()
    }

    #[test]
    fn axis_aligned_square_is_pixel_exact() {
        init();
        let square = pts(&[(10, 10), (20, 10), (20, 20), (10, 20)]);
        let mut bitmap = Bitmap::new(32, 32);
        fill(&mut bitmap, &square, Angle::ZERO, Point::ZERO);

        assert_eq!(bitmap.filled_rows(), (10..=20).collect::<Vec<_>>());
        for y in 10..=20 {
            assert_eq!(bitmap.row_spans(y), vec![(10, 20)], "row {}", y);
        }
        assert_eq!(bitmap.data().iter().filter(|&&px| px != 0).count(), 11 * 11);
    }

    #[test]
    fn starting_direction_looks_backwards() {
        let square = edges(&[(10, 10), (20, 10), (20, 20), (10, 20)]);
        assert_eq!(starting_direction(&square), Direction::Up);

        // the closing edge is horizontal, so the one before it decides
        let shifted = edges(&[(10, 20), (10, 10), (20, 10), (20, 20)]);
        assert_eq!(starting_direction(&shifted), Direction::Down);

        let flat = edges(&[(0, 5), (10, 5), (20, 5)]);
        assert_eq!(starting_direction(&flat), Direction::Up);
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let mut forward = Bitmap::new(32, 32);
        fill(
            &mut forward,
            &pts(&[(10, 10), (20, 10), (20, 20), (10, 20)]),
            Angle::ZERO,
            Point::ZERO,
        );

        let mut backward = Bitmap::new(32, 32);
        fill(
            &mut backward,
            &pts(&[(20, 20), (20, 10), (10, 10), (10, 20)]),
            Angle::ZERO,
            Point::ZERO,
        );

        assert_eq!(forward, backward);
    }

    #[test]
    fn star_has_no_gaps() {
        init();
        // a pentagram, drawn by joining every other point of a pentagon
        let star = pts(&[(50, 10), (74, 82), (12, 38), (88, 38), (26, 82)]);
        let mut bitmap = Bitmap::new(100, 100);
        fill(&mut bitmap, &star, Angle::ZERO, Point::ZERO);

        assert_eq!(bitmap.filled_rows(), (10..=82).collect::<Vec<_>>());

        // the tip, and the row where the two arms meet the shared horizontal edge
        assert_eq!(bitmap.row_spans(10), vec![(50, 50)]);
        assert_eq!(bitmap.row_spans(38), vec![(12, 88)]);

        // the pentagon in the middle is covered twice, and still filled
        assert_eq!(bitmap.pixel(50, 50), Some(1));
        for y in 10..=65 {
            assert_eq!(bitmap.row_spans(y).len(), 1, "gap in row {}", y);
        }

        // the legs really are separate
        assert_eq!(bitmap.row_spans(82), vec![(26, 26), (74, 74)]);
    }

    fn curved_cross() -> Path {
        let outline = pts(&[
            (-15, -15),
            (-15, -60),
            (15, -60),
            (15, -15),
            (60, -15),
            (60, 15),
            (15, 15),
            (15, 60),
            (-15, 60),
            (-15, 15),
            (-60, 15),
            (-60, -15),
        ]);

        let mut builder = PathBuilder::new(256).unwrap();
        builder.move_to(outline[0]).unwrap();
        for i in (0..outline.len()).step_by(3) {
            let end = outline[(i + 3) % outline.len()];
            builder
                .curve_to(end, outline[i + 1], outline[i + 2])
                .unwrap();
        }
        builder.finalize().unwrap()
    }

    /// Check that `b` looks like `a` turned upside down around `(cx, cy)`, give or take a pixel.
    fn assert_point_reflection(a: &Bitmap, b: &Bitmap, cx: i32, cy: i32) {
        for y in 0..a.height() as i32 {
            let expected = a.row_spans(y);
            let reflected: Vec<_> = b
                .row_spans(2 * cy - y)
                .into_iter()
                .rev()
                .map(|(x0, x1)| (2 * cx - x1, 2 * cx - x0))
                .collect();

            assert_eq!(expected.len(), reflected.len(), "row {}", y);
            for (&(a0, a1), &(b0, b1)) in expected.iter().zip(reflected.iter()) {
                assert!(
                    (a0 - b0).abs() <= 1 && (a1 - b1).abs() <= 1,
                    "row {}: {:?} vs {:?}",
                    y,
                    expected,
                    reflected
                );
            }
        }
    }

    #[test]
    fn half_turn_is_point_reflection() {
        init();
        let zigzag = pts(&[
            (-30, -20),
            (10, -40),
            (30, -40),
            (5, 0),
            (30, 20),
            (-10, 40),
            (-30, 40),
            (-5, 0),
        ]);

        let mut upright = Bitmap::new(161, 161);
        fill(&mut upright, &zigzag, Angle::ZERO, Point::new(80, 80));
        let mut flipped = Bitmap::new(161, 161);
        fill(&mut flipped, &zigzag, Angle::HALF_TURN, Point::new(80, 80));
        assert_point_reflection(&upright, &flipped, 80, 80);

        let mut cross = curved_cross();
        cross.set_offset(Point::new(80, 80));
        let mut upright = Bitmap::new(161, 161);
        fill_path(&mut upright, &cross);
        cross.set_rotation(Angle::HALF_TURN);
        let mut flipped = Bitmap::new(161, 161);
        fill_path(&mut flipped, &cross);
        assert_point_reflection(&upright, &flipped, 80, 80);
    }

    #[test]
    fn quarter_turn_moves_rectangle() {
        let rect = pts(&[(0, 0), (6, 0), (6, 4), (0, 4)]);
        let mut bitmap = Bitmap::new(40, 40);
        fill(&mut bitmap, &rect, Angle::QUARTER_TURN, Point::new(20, 20));

        assert_eq!(bitmap.filled_rows(), (20..=26).collect::<Vec<_>>());
        for y in 20..=26 {
            assert_eq!(bitmap.row_spans(y), vec![(16, 20)]);
        }
    }

    #[test]
    fn path_is_drawn_with_its_transform() {
        let rect = pts(&[(0, 0), (6, 0), (6, 4), (0, 4)]);
        let mut path = Path::from_points(&rect).unwrap();
        path.set_rotation(Angle::QUARTER_TURN);
        path.set_offset(Point::new(20, 20));

        let mut from_path = Bitmap::new(40, 40);
        fill_path(&mut from_path, &path);
        let mut from_points = Bitmap::new(40, 40);
        fill(&mut from_points, &rect, Angle::QUARTER_TURN, Point::new(20, 20));

        assert_eq!(from_path.data(), from_points.data());
        assert_eq!(from_path.row_spans(23), vec![(16, 20)]);
    }

    #[test]
    fn rows_are_clipped_to_surface() {
        let square = pts(&[(-5, -5), (5, -5), (5, 5), (-5, 5)]);
        let mut bitmap = Bitmap::new(10, 10);
        fill(&mut bitmap, &square, Angle::ZERO, Point::ZERO);

        assert_eq!(bitmap.filled_rows(), (0..=5).collect::<Vec<_>>());
        assert_eq!(bitmap.row_spans(0), vec![(0, 5)]);

        bitmap.clear();
        fill(&mut bitmap, &square, Angle::ZERO, Point::new(0, 100));
        assert!(bitmap.filled_rows().is_empty());
    }

    #[test]
    fn degenerate_polygons() {
        let mut bitmap = Bitmap::new(16, 16);

        fill(&mut bitmap, &[], Angle::ZERO, Point::ZERO);
        fill(&mut bitmap, &pts(&[(3, 3)]), Angle::ZERO, Point::ZERO);
        fill(&mut bitmap, &pts(&[(0, 0), (10, 0), (10, 0), (0, 0)]), Angle::ZERO, Point::ZERO);
        assert!(bitmap.filled_rows().is_empty());

        // a polygon with no area still covers the pixels its edges run through
        fill(&mut bitmap, &pts(&[(0, 0), (10, 10)]), Angle::ZERO, Point::new(2, 2));
        assert_eq!(bitmap.filled_rows(), (2..=12).collect::<Vec<_>>());
        for y in 2..=12 {
            assert_eq!(bitmap.row_spans(y), vec![(y, y)]);
        }
    }

    #[test]
    fn borrowed_surfaces_work_too() {
        let mut bitmap = Bitmap::new(8, 8);
        {
            let mut borrowed = &mut bitmap;
            fill(
                &mut borrowed,
                &pts(&[(1, 1), (3, 1), (3, 3), (1, 3)]),
                Angle::ZERO,
                Point::ZERO,
            );
        }
        assert_eq!(bitmap.row_spans(2), vec![(1, 3)]);
    }
}
