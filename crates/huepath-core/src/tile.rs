//! Cell symbols and their semantic colours.
//!
//! A grid is made of three kinds of [`Tile`]: the two plain colours and the
//! goal marker. The goal marker has no colour of its own; a
//! [`ColorAssignment`] gives it the goal colour chosen for a search.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A grid cell symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Plain green cell, written `G`.
    Green,
    /// Plain red cell, written `R`.
    Red,
    /// The goal marker, written `H`.
    Goal,
}

impl Tile {
    /// Every tile, in symbol-table order.
    pub const ALL: [Tile; 3] = [Tile::Green, Tile::Red, Tile::Goal];

    /// Parse a symbol character.
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            'G' => Some(Tile::Green),
            'R' => Some(Tile::Red),
            'H' => Some(Tile::Goal),
            _ => None,
        }
    }

    /// The symbol character used in text grids.
    pub const fn symbol(self) -> char {
        match self {
            Tile::Green => 'G',
            Tile::Red => 'R',
            Tile::Goal => 'H',
        }
    }

    /// Whether this is the goal marker.
    #[inline]
    pub const fn is_goal(self) -> bool {
        matches!(self, Tile::Goal)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Semantic colour of a cell.
///
/// Only [`Color::Red`] and [`Color::Green`] carry a move cost; the other
/// variants exist so that a goal colour outside the plain palette can be
/// expressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Gray,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Gray,
    ];

    /// Lower-case colour name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Gray => "gray",
        }
    }

    /// Display RGB triple, for renderers.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (200, 60, 60),
            Color::Green => (60, 160, 60),
            Color::Blue => (70, 110, 210),
            Color::Yellow => (210, 190, 60),
            Color::Purple => (150, 80, 180),
            Color::Gray => (120, 120, 120),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .or_else(|| (lower == "grey").then_some(Color::Gray))
            .ok_or_else(|| ParseError::new("colour", s))
    }
}

// ---------------------------------------------------------------------------
// ColorAssignment
// ---------------------------------------------------------------------------

/// Total mapping from [`Tile`] to [`Color`].
///
/// Plain tiles have fixed colours; the goal marker maps to `goal`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorAssignment {
    pub goal: Color,
}

impl ColorAssignment {
    /// Create an assignment with the given goal colour.
    #[inline]
    pub const fn new(goal: Color) -> Self {
        Self { goal }
    }

    /// Colour of `tile`.
    #[inline]
    pub const fn color_of(self, tile: Tile) -> Color {
        match tile {
            Tile::Green => Color::Green,
            Tile::Red => Color::Red,
            Tile::Goal => self.goal,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn colour_uses_lowercase_names() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Yellow);
    }
}
