// MIT/Apache2 License

//! Conversions between our integer paths and `lyon_path`'s floating point event streams.

use crate::{
    path::{Path, PathBuilder},
    Error, Point,
};
use lyon_geom::{point, QuadraticBezierSegment};
use lyon_path::PathEvent;
use ordered_float::NotNan;

type LyonPoint = lyon_geom::Point<f32>;

/// Round a coordinate to the nearest device pixel.
#[inline]
fn to_pixel(v: f32) -> crate::Result<i32> {
    let v = NotNan::new(v).map_err(|_| Error::InvalidCoordinate)?;
    num_traits::cast::<f32, i32>(v.into_inner().round()).ok_or(Error::InvalidCoordinate)
}

#[inline]
fn to_device(pt: LyonPoint) -> crate::Result<Point> {
    Ok(Point::new(to_pixel(pt.x)?, to_pixel(pt.y)?))
}

#[inline]
fn to_lyon(pt: Point) -> LyonPoint {
    point(pt.x as f32, pt.y as f32)
}

impl PathBuilder {
    /// Add the contents of a `lyon_path` event stream to this builder.
    ///
    /// Coordinates are rounded to whole pixels. Quadratic curves are raised to cubics before they are flattened.
    /// `End` events are ignored, since our paths are always closed. Only one contour is allowed; a second `Begin`
    /// fails with `AlreadyStarted`.
    pub fn extend_from_events<I: IntoIterator<Item = PathEvent>>(&mut self, events: I) -> crate::Result {
        events.into_iter().try_for_each(|event| match event {
            PathEvent::Begin { at } => self.move_to(to_device(at)?),
            PathEvent::Line { to, .. } => self.line_to(to_device(to)?),
            PathEvent::Quadratic { from, ctrl, to } => {
                let cubic = QuadraticBezierSegment { from, ctrl, to }.to_cubic();
                self.curve_to(
                    to_device(cubic.to)?,
                    to_device(cubic.ctrl1)?,
                    to_device(cubic.ctrl2)?,
                )
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => self.curve_to(to_device(to)?, to_device(ctrl1)?, to_device(ctrl2)?),
            PathEvent::End { .. } => Ok(()),
        })
    }
}

impl Path {
    /// Describe the untransformed polygon as a closed `lyon_path` event stream.
    pub fn events(&self) -> impl Iterator<Item = PathEvent> + '_ {
        let points = self.points();
        let first = to_lyon(points[0]);
        let last = to_lyon(points[points.len() - 1]);

        std::iter::once(PathEvent::Begin { at: first })
            .chain(points.windows(2).map(|pair| PathEvent::Line {
                from: to_lyon(pair[0]),
                to: to_lyon(pair[1]),
            }))
            .chain(std::iter::once(PathEvent::End {
                last,
                first,
                close: true,
            }))
    }
}
