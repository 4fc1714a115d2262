// MIT/Apache2 License

//! Builds closed paths out of lines and cubic curves, and fills them into pixel surfaces.
//!
//! Everything here works on integers. Curves are flattened by recursive subdivision until the control polygon
//! stops turning by more than a small angle, and polygons are filled one row at a time by pairing up the places
//! where upward and downward edges cross each row.
//!
//! ```
//! use gpath::{fill_path, Angle, Bitmap, PathBuilder, Point};
//!
//! let mut builder = PathBuilder::new(64)?;
//! builder.move_to(Point::new(-10, -10))?;
//! builder.line_to(Point::new(10, -10))?;
//! builder.curve_to(Point::new(-10, 10), Point::new(20, 0), Point::new(0, 20))?;
//! let mut path = builder.finalize()?;
//!
//! path.set_offset(Point::new(16, 16));
//! path.rotate_by(Angle::from_degrees(5));
//!
//! let mut bitmap = Bitmap::new(32, 32);
//! fill_path(&mut bitmap, &path);
//! assert!(!bitmap.filled_rows().is_empty());
//! # Ok::<(), gpath::Error>(())
//! ```

#![forbid(unsafe_code)]

mod error;

pub mod fill;
pub mod geometry;
pub mod path;
pub mod surface;

mod path_utils;

pub(crate) mod util;

pub use error::*;
pub use fill::{fill, fill_path};
pub use geometry::*;
pub use path::*;
pub use surface::*;
