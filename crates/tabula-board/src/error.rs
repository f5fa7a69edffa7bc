//! Error types for grid construction and registration.

use std::error::Error;
use std::fmt;

use crate::coord::Coord;

/// Errors arising from grid configuration or position registration.
///
/// A rejected registration never modifies the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The coordinate already has a position registered.
    CoordOccupied {
        /// The coordinate that was already taken.
        coord: Coord,
    },
    /// The position is already registered at another coordinate.
    PositionRegistered {
        /// Where the position currently lives.
        existing: Coord,
    },
    /// The coordinate lies outside the grid extent
    /// (only under [`BoundsPolicy::Enforce`](crate::BoundsPolicy::Enforce)).
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Number of rows (valid `y` is `0..rows`).
        rows: u32,
        /// Number of columns (valid `x` is `0..columns`).
        columns: u32,
    },
    /// A bounds-enforcing grid was configured with zero rows or columns.
    EmptyGrid,
    /// A dimension does not fit in an `i32` coordinate.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"columns"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOccupied { coord } => {
                write!(f, "coordinate {coord} already has a position")
            }
            Self::PositionRegistered { existing } => {
                write!(f, "position already registered at {existing}")
            }
            Self::OutOfBounds {
                coord,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: x in [0, {columns}), y in [0, {rows})"
                )
            }
            Self::EmptyGrid => write!(f, "bounded grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for BoardError {}
