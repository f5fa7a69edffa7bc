//! The [`Coord`] type.

use std::fmt;

/// An integer grid coordinate.
///
/// `x` indexes columns and `y` indexes rows. Coordinates are signed so
/// that callers can probe outside the board (e.g. a neighbour of an edge
/// tile) without wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_conversion_preserves_axes() {
        let c: Coord = (3, -1).into();
        assert_eq!(c, Coord::new(3, -1));
        let t: (i32, i32) = c.into();
        assert_eq!(t, (3, -1));
    }

    #[test]
    fn display_matches_tuple_notation() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
    }

    #[test]
    fn ordering_is_x_major() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
    }
}
