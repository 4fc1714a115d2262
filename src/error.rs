// MIT/Apache2 License

use std::fmt;

/// Sum error type for path construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// The vertex buffer for a builder could not be allocated.
    OutOfMemory,
    /// The builder has no room left for another vertex.
    Capacity,
    /// A curve was requested before the path had a starting point.
    NoStartPoint,
    /// The path already has a starting point.
    AlreadyStarted,
    /// Too few vertices were accumulated to form a closed path.
    TooFewPoints(usize),
    /// A coordinate could not be represented in device pixels.
    InvalidCoordinate,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => f.write_str("Could not allocate storage for path vertices"),
            Self::Capacity => f.write_str("Path builder is out of capacity"),
            Self::NoStartPoint => f.write_str("Cannot add a curve to a path without a start point"),
            Self::AlreadyStarted => f.write_str("Path already has a start point"),
            Self::TooFewPoints(n) => {
                write!(f, "A closed path needs at least 2 points, but only {} were given", n)
            }
            Self::InvalidCoordinate => {
                f.write_str("Coordinate is NaN or does not fit into device pixels")
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
