// MIT/Apache2 License

use std::ops::Range;

/// Provides the in-memory `Bitmap` surface.
mod bitmap;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;

pub use bitmap::Bitmap;

/// Something that can be filled; otherwise known as the other half of what this crate is about.
///
/// `Surface`s are usually windows, images, or other buffers containing pixels. The rasterizer only needs two
/// things from them:
///
/// * The range of rows that are visible, through `rows()`. Nothing outside of this range is ever painted, so
///   shapes hanging off the top or bottom of a surface cost nothing for the rows that are cut off.
/// * A way to paint a horizontal run of pixels, through `fill_span()`. Spans are not clipped horizontally before
///   being handed over; the surface is expected to ignore any pixels outside of its bounds.
pub trait Surface {
    /// The half-open range of rows that can be painted.
    fn rows(&self) -> Range<i32>;

    /// Paint the pixels from `x0` to `x1` inclusive on row `y`. `x0` is never greater than `x1`, and `y` is
    /// always inside of `rows()`.
    fn fill_span(&mut self, x0: i32, x1: i32, y: i32);
}
