//! **huepath-core**: coloured tile grids.
//!
//! This crate provides the foundational types used by the huepath search:
//! positions and bounds, the closed set of cell symbols, their semantic
//! colours, and the read-only [`TileGrid`] that answers cell and neighbour
//! queries.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use error::{GridError, ParseError};
pub use geom::{Bounds, Pos};
pub use grid::TileGrid;
pub use tile::{Color, ColorAssignment, Tile};
