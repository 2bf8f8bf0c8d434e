//! The [`TileGrid`] type, a read-only rectangular grid of [`Tile`]s.
//!
//! Grids are built once, from typed rows or from text, and never mutated
//! afterwards, so a single grid can back any number of searches, including
//! searches on other threads.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Bounds, Pos};
use crate::tile::{Color, ColorAssignment, Tile};

/// A rectangular grid of tiles with at most one goal marker.
///
/// With the `serde` feature a grid (de)serializes as its list of rows, and
/// deserializing goes through [`TileGrid::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")
)]
pub struct TileGrid {
    cells: Vec<Tile>,
    bounds: Bounds,
    goal: Option<Pos>,
}

impl TileGrid {
    /// Build a grid from typed rows.
    ///
    /// All rows must have the width of the first one and at most one cell
    /// may be [`Tile::Goal`].
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &tile) in row.iter().enumerate() {
                if tile.is_goal() {
                    let here = Pos::new(y as i32, x as i32);
                    if let Some(first) = goal {
                        return Err(GridError::MultipleGoals {
                            first,
                            second: here,
                        });
                    }
                    goal = Some(here);
                }
                cells.push(tile);
            }
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, width as i32),
            goal,
        })
    }

    /// Parse a grid from text: one row per line, one symbol per character
    /// (`G` green, `R` red, `H` goal).
    ///
    /// Leading and trailing whitespace of the whole text is ignored, as is
    /// whitespace at the ends of each line. Whitespace inside a row is an
    /// unknown symbol.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (y, line) in text.trim().lines().enumerate() {
            let row = line
                .trim()
                .chars()
                .enumerate()
                .map(|(x, ch)| {
                    Tile::from_char(ch).ok_or(GridError::UnknownSymbol {
                        ch,
                        pos: Pos::new(y as i32, x as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// The grid extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    fn check(&self, p: Pos) -> Result<usize, GridError> {
        self.bounds.index(p).ok_or(GridError::InvalidPosition {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// The tile at `p`.
    pub fn tile(&self, p: Pos) -> Result<Tile, GridError> {
        self.check(p).map(|i| self.cells[i])
    }

    /// Semantic colour of the cell at `p`; the goal marker takes the goal
    /// colour of `colors`.
    pub fn color_of(&self, p: Pos, colors: ColorAssignment) -> Result<Color, GridError> {
        self.tile(p).map(|t| colors.color_of(t))
    }

    /// Position of the goal marker.
    pub fn goal(&self) -> Result<Pos, GridError> {
        self.goal.ok_or(GridError::NoGoal)
    }

    /// In-bounds orthogonal neighbours of `p` in north, south, west, east
    /// order.
    pub fn neighbors_of(&self, p: Pos) -> Result<Vec<Pos>, GridError> {
        self.check(p)?;
        Ok(p
            .neighbors_4()
            .into_iter()
            .filter(|&n| self.contains(n))
            .collect())
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.bounds.cols.max(1) as usize)
    }
}

impl TryFrom<Vec<Vec<Tile>>> for TileGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<TileGrid> for Vec<Vec<Tile>> {
    fn from(grid: TileGrid) -> Self {
        grid.row_slices().map(<[Tile]>::to_vec).collect()
    }
}

impl fmt::Display for TileGrid {
    /// Writes the grid back in the text form accepted by [`TileGrid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{t}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
GGR
RHG
GGG";

    #[test]
    fn parse_and_size() {
        let g = TileGrid::parse(ROOM).unwrap();
        assert_eq!(g.bounds(), Bounds::new(3, 3));
        assert_eq!(g.tile(Pos::new(0, 2)), Ok(Tile::Red));
        assert_eq!(g.goal(), Ok(Pos::new(1, 1)));
    }

    #[test]
    fn display_matches_input() {
        let g = TileGrid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let g = TileGrid::parse("\n  GH  \n  RG\n\n").unwrap();
        assert_eq!(g.bounds(), Bounds::new(2, 2));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = TileGrid::parse("GG\nGGG").unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn unknown_symbol_rejected() {
        let err = TileGrid::parse("GG\nGX").unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownSymbol {
                ch: 'X',
                pos: Pos::new(1, 1)
            }
        );
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(TileGrid::parse("   "), Err(GridError::Empty));
        let rows: [[Tile; 0]; 1] = [[]];
        assert_eq!(TileGrid::from_rows(&rows), Err(GridError::Empty));
    }

    #[test]
    fn second_goal_rejected() {
        let err = TileGrid::parse("HG\nGH").unwrap_err();
        assert_eq!(
            err,
            GridError::MultipleGoals {
                first: Pos::new(0, 0),
                second: Pos::new(1, 1)
            }
        );
    }

    #[test]
    fn missing_goal_is_a_query_error() {
        let g = TileGrid::parse("GR\nRG").unwrap();
        assert_eq!(g.goal(), Err(GridError::NoGoal));
    }

    #[test]
    fn color_of_uses_goal_colour() {
        let g = TileGrid::parse(ROOM).unwrap();
        let colors = ColorAssignment::new(Color::Purple);
        assert_eq!(g.color_of(Pos::new(1, 1), colors), Ok(Color::Purple));
        assert_eq!(g.color_of(Pos::new(1, 0), colors), Ok(Color::Red));
        assert_eq!(g.color_of(Pos::new(0, 0), colors), Ok(Color::Green));
    }

    #[test]
    fn out_of_bounds_queries_fail() {
        let g = TileGrid::parse(ROOM).unwrap();
        let bad = Pos::new(3, 0);
        let expected = Err(GridError::InvalidPosition {
            pos: bad,
            bounds: g.bounds(),
        });
        assert_eq!(g.tile(bad), expected);
        assert_eq!(
            g.color_of(Pos::new(0, -1), ColorAssignment::new(Color::Red)),
            Err(GridError::InvalidPosition {
                pos: Pos::new(0, -1),
                bounds: g.bounds()
            })
        );
        assert!(g.neighbors_of(bad).is_err());
    }

    #[test]
    fn neighbors_clip_to_bounds_in_fixed_order() {
        let g = TileGrid::parse(ROOM).unwrap();
        assert_eq!(
            g.neighbors_of(Pos::new(0, 0)).unwrap(),
            vec![Pos::new(1, 0), Pos::new(0, 1)]
        );
        assert_eq!(
            g.neighbors_of(Pos::new(1, 1)).unwrap(),
            vec![Pos::new(0, 1), Pos::new(2, 1), Pos::new(1, 0), Pos::new(1, 2)]
        );
        assert_eq!(
            g.neighbors_of(Pos::new(2, 2)).unwrap(),
            vec![Pos::new(1, 2), Pos::new(2, 1)]
        );
    }

    #[test]
    fn iter_is_row_major() {
        let g = TileGrid::parse("GR\nHG").unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1], (Pos::new(0, 1), Tile::Red));
        assert_eq!(cells[2], (Pos::new(1, 0), Tile::Goal));
    }
}
