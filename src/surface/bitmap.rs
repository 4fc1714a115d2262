// MIT/Apache2 License

use super::Surface;
use std::{cmp, fmt, ops::Range};

/// A simple surface that keeps one byte per pixel in memory.
///
/// Filled pixels take on the current ink value. Anything that isn't zero counts as filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    ink: u8,
    data: Vec<u8>,
}

impl Bitmap {
    /// Create a new, empty bitmap.
    #[inline]
    #[must_use]
    pub fn new(width: u32, height: u32) -> Bitmap {
        Bitmap {
            width,
            height,
            ink: 1,
            data: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the value that future fills write.
    #[inline]
    pub fn set_ink(&mut self, ink: u8) {
        self.ink = ink;
    }

    /// Set every pixel back to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|px| *px = 0);
    }

    /// Get the value of a pixel, or `None` if it is out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// The raw pixel data, row by row.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The runs of filled pixels on a row, as inclusive `(start, end)` pairs.
    #[must_use]
    pub fn row_spans(&self, y: i32) -> Vec<(i32, i32)> {
        let row = match self.row(y) {
            Some(row) => row,
            None => return Vec::new(),
        };

        let mut spans = Vec::new();
        let mut start = None;
        for (x, &px) in row.iter().enumerate() {
            match (start, px != 0) {
                (None, true) => start = Some(x as i32),
                (Some(s), false) => {
                    spans.push((s, x as i32 - 1));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            spans.push((s, row.len() as i32 - 1));
        }
        spans
    }

    /// The number of filled pixels on a row.
    #[inline]
    #[must_use]
    pub fn row_count(&self, y: i32) -> usize {
        self.row(y)
            .map_or(0, |row| row.iter().filter(|&&px| px != 0).count())
    }

    /// The rows that contain at least one filled pixel.
    #[must_use]
    pub fn filled_rows(&self) -> Vec<i32> {
        (0..self.height as i32)
            .filter(|&y| self.row_count(y) > 0)
            .collect()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    #[inline]
    fn row(&self, y: i32) -> Option<&[u8]> {
        if y < 0 || y as u32 >= self.height {
            None
        } else {
            let start = y as usize * self.width as usize;
            Some(&self.data[start..start + self.width as usize])
        }
    }
}

impl Surface for Bitmap {
    #[inline]
    fn rows(&self) -> Range<i32> {
        0..cmp::min(self.height, i32::MAX as u32) as i32
    }

    fn fill_span(&mut self, x0: i32, x1: i32, y: i32) {
        if y < 0 || y as u32 >= self.height || self.width == 0 {
            return;
        }

        // clip to our columns
        let last = self.width as i64 - 1;
        let x0 = cmp::max(i64::from(x0), 0);
        let x1 = cmp::min(i64::from(x1), last);
        if x0 > x1 {
            return;
        }

        let row = y as usize * self.width as usize;
        let (first, last) = (row + x0 as usize, row + x1 as usize);
        let ink = self.ink;
        self.data[first..=last].iter_mut().for_each(|px| *px = ink);
    }
}

/// Renders filled pixels as `#` and empty ones as `.`, one line per row.
impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(cmp::max(self.width as usize, 1)) {
            for &px in row {
                f.write_str(if px == 0 { "." } else { "#" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
