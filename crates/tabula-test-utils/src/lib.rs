//! Test utilities for Tabula development.
//!
//! - [`EventRecorder`]: captures selection events into a shared log.
//! - [`BoardBuilder`]: fills a grid with sequential [`TileId`]s.
//! - [`init_logging`]: installs `env_logger` once per test binary.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use tabula_board::{BoardError, BoundsPolicy, Grid, GridConfig};
use tabula_selection::{ListenerId, SelectionEvent, SelectionEventKind, SelectionManager};

/// Install `env_logger` for the current test binary.
///
/// Safe to call from every test; only the first call installs the logger.
/// Honors `RUST_LOG` as usual.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Opaque position type used by board fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// Builder for grids pre-populated with one [`TileId`] per cell.
///
/// Tiles are numbered row-major: the tile at `(x, y)` is
/// `TileId(y * columns + x)`.
pub struct BoardBuilder {
    rows: u32,
    columns: u32,
    bounds: BoundsPolicy,
}

impl BoardBuilder {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            bounds: BoundsPolicy::Unchecked,
        }
    }

    pub fn bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// The id the builder assigns to `(x, y)`.
    pub fn tile_at(&self, x: i32, y: i32) -> TileId {
        TileId(y as u32 * self.columns + x as u32)
    }

    /// Build the grid and register every cell of the extent.
    pub fn build(self) -> Result<Grid<TileId>, BoardError> {
        let config = GridConfig::new(self.rows, self.columns).with_bounds(self.bounds);
        let mut grid = Grid::from_config(config)?;
        for y in 0..self.rows as i32 {
            for x in 0..self.columns as i32 {
                grid.register(x, y, self.tile_at(x, y))?;
            }
        }
        Ok(grid)
    }
}

/// Shared log of selection events.
///
/// Clone the recorder freely; every clone appends to the same log.
pub struct EventRecorder<T> {
    events: Rc<RefCell<Vec<SelectionEvent<T>>>>,
}

impl<T> Clone for EventRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<T: Clone + 'static> EventRecorder<T> {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Subscribe this recorder to `manager`.
    pub fn attach(&self, manager: &mut SelectionManager<T>) -> ListenerId
    where
        T: Eq + Hash,
    {
        let sink = self.clone();
        manager.subscribe(move |_, e| sink.events.borrow_mut().push(e.clone()))
    }

    /// Every event recorded so far, oldest first.
    pub fn events(&self) -> Vec<SelectionEvent<T>> {
        self.events.borrow().clone()
    }

    /// Items of recorded events of one kind, oldest first.
    pub fn items(&self, kind: SelectionEventKind) -> Vec<T> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.kind() == kind)
            .map(|e| e.item().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl<T: Clone + 'static> Default for EventRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
