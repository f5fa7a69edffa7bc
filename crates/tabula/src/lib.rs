//! Tabula: board grids and selection tracking for turn-based games.
//!
//! This is the facade crate re-exporting the public API of the Tabula
//! sub-crates. A typical flow resolves a clicked cell to a position through
//! the [`board::Grid`], then hands that position to a
//! [`selection::SelectionManager`].
//!
//! # Quick start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tabula::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! struct Tile(u32);
//!
//! let mut grid = Grid::new(8, 8);
//! for y in 0..8 {
//!     for x in 0..8 {
//!         grid.register(x, y, Tile((y * 8 + x) as u32)).unwrap();
//!     }
//! }
//!
//! let highlighted = Rc::new(RefCell::new(Vec::new()));
//! let mut selection: SelectionManager<Tile> = SelectionManager::new();
//! let sink = Rc::clone(&highlighted);
//! selection.on_selected(move |_, tile| sink.borrow_mut().push(*tile));
//!
//! // Player clicks (3, 4).
//! let tile = *grid.position_at(3, 4).unwrap();
//! assert!(selection.toggle(tile));
//! assert_eq!(grid.coordinate_of(&tile), Some(Coord::new(3, 4)));
//! assert_eq!(*highlighted.borrow(), vec![Tile(35)]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`board`] | `tabula-board` | `Coord`, `BiMap`, `Grid`, configuration and errors |
//! | [`selection`] | `tabula-selection` | `SelectionManager`, events, listeners |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate grids and the bidirectional map behind them (`tabula-board`).
pub use tabula_board as board;

/// Selection tracking and change notifications (`tabula-selection`).
pub use tabula_selection as selection;

/// Common imports for Tabula users.
///
/// ```rust
/// use tabula::prelude::*;
/// ```
pub mod prelude {
    pub use tabula_board::{BoardError, BoundsPolicy, Coord, Grid, GridConfig};
    pub use tabula_selection::{
        ListenerId, SelectionEvent, SelectionEventKind, SelectionManager,
    };
}
