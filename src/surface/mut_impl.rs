// MIT/Apache2 License

use super::Surface;
use std::ops::Range;

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn rows(&self) -> Range<i32> {
        (**self).rows()
    }
    #[inline]
    fn fill_span(&mut self, x0: i32, x1: i32, y: i32) {
        (**self).fill_span(x0, x1, y)
    }
}
