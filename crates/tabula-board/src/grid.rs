//! The coordinate grid.

use std::hash::Hash;

use log::{debug, warn};

use crate::bimap::{BiMap, BiMapError};
use crate::config::{BoundsPolicy, GridConfig};
use crate::coord::Coord;
use crate::error::BoardError;

/// A `rows` × `columns` board mapping coordinates to positions and back.
///
/// Positions are opaque to the grid: anything hashable works, typically a
/// tile handle or entity id owned by the caller. Each coordinate holds at
/// most one position and each position sits at most at one coordinate.
/// Registration is append-only.
///
/// The extent is fixed at construction. Whether registration checks it is
/// controlled by [`BoundsPolicy`]; [`Grid::new`] leaves it unchecked.
///
/// # Examples
///
/// ```
/// use tabula_board::{BoardError, Coord, Grid};
///
/// let mut grid: Grid<&str> = Grid::new(3, 3);
/// grid.register(0, 0, "a1").unwrap();
/// grid.register(1, 0, "b1").unwrap();
///
/// assert_eq!(grid.position_at(1, 0), Some(&"b1"));
/// assert_eq!(grid.coordinate_of(&"a1"), Some(Coord::new(0, 0)));
/// assert_eq!(grid.position_at(2, 2), None);
///
/// // Both sides are unique.
/// assert_eq!(
///     grid.register(1, 0, "c1"),
///     Err(BoardError::CoordOccupied { coord: Coord::new(1, 0) })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Grid<P> {
    config: GridConfig,
    positions: BiMap<Coord, P>,
}

impl<P> Grid<P>
where
    P: Eq + Hash + Clone,
{
    /// Create a grid with the given extent and no bounds checking.
    ///
    /// Dimensions above [`GridConfig::MAX_DIMENSION`] are clamped to it, so
    /// the resulting [`config`](Self::config) always validates.
    pub fn new(rows: u32, columns: u32) -> Self {
        let config = GridConfig::new(
            rows.min(GridConfig::MAX_DIMENSION),
            columns.min(GridConfig::MAX_DIMENSION),
        );
        Self {
            config,
            positions: BiMap::new(),
        }
    }

    /// Create a grid from a validated configuration.
    ///
    /// Returns the first error reported by [`GridConfig::validate`].
    pub fn from_config(config: GridConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self {
            config,
            positions: BiMap::new(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.config.columns
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Whether `(x, y)` lies inside the extent.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.config.contains(Coord::new(x, y))
    }

    /// Associate `position` with `(x, y)`.
    ///
    /// Fails if the coordinate already holds a position, if the position is
    /// already registered elsewhere, or (under [`BoundsPolicy::Enforce`]) if
    /// the coordinate is outside the extent. The grid is unchanged on
    /// failure.
    pub fn register(&mut self, x: i32, y: i32, position: P) -> Result<(), BoardError> {
        let coord = Coord::new(x, y);
        if self.config.bounds == BoundsPolicy::Enforce && !self.config.contains(coord) {
            let err = BoardError::OutOfBounds {
                coord,
                rows: self.config.rows,
                columns: self.config.columns,
            };
            warn!("grid registration rejected: {err}");
            return Err(err);
        }

        let existing = self.positions.get_by_right(&position).copied();
        match self.positions.insert(coord, position) {
            Ok(()) => {
                debug!("registered position at {coord}");
                Ok(())
            }
            Err(side) => {
                let err = match (side, existing) {
                    (BiMapError::RightOccupied, Some(existing)) => {
                        BoardError::PositionRegistered { existing }
                    }
                    _ => BoardError::CoordOccupied { coord },
                };
                warn!("grid registration rejected: {err}");
                Err(err)
            }
        }
    }

    /// The position registered at `(x, y)`, if any.
    pub fn position_at(&self, x: i32, y: i32) -> Option<&P> {
        self.positions.get_by_left(&Coord::new(x, y))
    }

    /// The coordinate `position` is registered at, if any.
    pub fn coordinate_of(&self, position: &P) -> Option<Coord> {
        self.positions.get_by_right(position).copied()
    }

    /// Whether `(x, y)` holds a position.
    pub fn contains_coord(&self, x: i32, y: i32) -> bool {
        self.positions.contains_left(&Coord::new(x, y))
    }

    /// Whether `position` is registered.
    pub fn contains_position(&self, position: &P) -> bool {
        self.positions.contains_right(position)
    }

    /// Number of registered positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over registered `(coordinate, position)` pairs in
    /// registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &P)> + '_ {
        self.positions.iter().map(|(c, p)| (*c, p))
    }
}
