//! Error types for grid construction and queries.

use std::fmt;

use crate::geom::{Bounds, Pos};

/// Errors raised by [`TileGrid`](crate::TileGrid) construction and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A query or search start outside the grid. Caller contract violation.
    InvalidPosition { pos: Pos, bounds: Bounds },
    /// The grid holds no goal marker.
    NoGoal,
    /// A second goal marker was found while building a grid.
    MultipleGoals { first: Pos, second: Pos },
    /// A row's width differs from the first row's.
    RaggedRows { row: usize, expected: usize, found: usize },
    /// A character that is not a tile symbol.
    UnknownSymbol { ch: char, pos: Pos },
    /// No rows, or rows with no cells.
    Empty,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition { pos, bounds } => {
                write!(f, "position {pos} is outside the {bounds} grid")
            }
            Self::NoGoal => write!(f, "grid has no goal marker ('H')"),
            Self::MultipleGoals { first, second } => {
                write!(f, "grid has more than one goal marker: {first} and {second}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} like the first row"
            ),
            Self::UnknownSymbol { ch, pos } => {
                write!(f, "unknown tile symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Empty => write!(f, "grid is empty"),
        }
    }
}

impl std::error::Error for GridError {}

/// Failure to parse a named value such as a colour or agent profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    input: String,
}

impl ParseError {
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }

    /// What was being parsed, e.g. `"colour"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseError {}
