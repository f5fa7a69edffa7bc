//! Bidirectional coordinate grids for Tabula boards.
//!
//! A [`Grid`] associates integer `(x, y)` coordinates with opaque,
//! application-defined position values (tile handles, entity ids, ...)
//! and answers lookups in both directions. The association is one-to-one
//! and append-only: once a pair is registered it stays for the lifetime
//! of the grid.
//!
//! # Building blocks
//!
//! - [`Coord`]: an integer `(x, y)` pair.
//! - [`BiMap`]: the two-way unique map backing the grid.
//! - [`GridConfig`] / [`BoundsPolicy`]: grid extent and whether registration
//!   is checked against it.
//! - [`BoardError`]: why a registration or configuration was rejected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bimap;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;

pub use bimap::{BiMap, BiMapError};
pub use config::{BoundsPolicy, GridConfig};
pub use coord::Coord;
pub use error::BoardError;
pub use grid::Grid;
