//! Grid configuration parameters.

use crate::coord::Coord;
use crate::error::BoardError;

/// Whether registration is checked against the grid extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Any coordinate may be registered; the extent is informational.
    #[default]
    Unchecked,
    /// Only `0 <= x < columns` and `0 <= y < rows` may be registered.
    Enforce,
}

/// Configuration for a [`Grid`](crate::Grid).
///
/// Validated by [`Grid::from_config`](crate::Grid::from_config); all values
/// are immutable once the grid exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of rows (extent along `y`).
    pub rows: u32,
    /// Number of columns (extent along `x`).
    pub columns: u32,
    /// Registration bounds checking.
    pub bounds: BoundsPolicy,
}

impl GridConfig {
    /// Largest accepted extent: coordinates use `i32`.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    /// Create an unchecked configuration with the given extent.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            bounds: BoundsPolicy::Unchecked,
        }
    }

    /// Replace the bounds policy.
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Check the configuration for consistency.
    pub fn validate(&self) -> Result<(), BoardError> {
        for (name, value) in [("rows", self.rows), ("columns", self.columns)] {
            if value > Self::MAX_DIMENSION {
                return Err(BoardError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIMENSION,
                });
            }
        }
        if self.bounds == BoundsPolicy::Enforce && (self.rows == 0 || self.columns == 0) {
            return Err(BoardError::EmptyGrid);
        }
        Ok(())
    }

    /// Number of cells inside the extent.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    /// Whether `coord` lies inside the extent, regardless of policy.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.columns
            && (coord.y as u32) < self.rows
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
