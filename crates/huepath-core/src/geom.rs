//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Positions are `(row, col)` pairs with rows growing downwards. Coordinates
//! are signed so that neighbour arithmetic can step off the grid and be
//! rejected by a bounds check instead of wrapping.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid position, 0-indexed as `(row, col)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// One row up.
    pub const NORTH: Self = Self { row: -1, col: 0 };
    /// One row down.
    pub const SOUTH: Self = Self { row: 1, col: 0 };
    /// One column left.
    pub const WEST: Self = Self { row: 0, col: -1 };
    /// One column right.
    pub const EAST: Self = Self { row: 0, col: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in north, south, west, east order.
    ///
    /// No bounds check is applied.
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        [
            self + Self::NORTH,
            self + Self::SOUTH,
            self + Self::WEST,
            self + Self::EAST,
        ]
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl FromStr for Pos {
    type Err = ParseError;

    /// Parses `row,col`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::new("position", s);
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid anchored at the origin: rows `[0, rows)` and
/// columns `[0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative extents are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Whether the bounds contain no cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.rows as usize * self.cols as usize
        }
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Iterate over every position in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Pos> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::new(row, col)))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn neighbors_order_is_north_south_west_east() {
        let n = Pos::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [Pos::new(1, 2), Pos::new(3, 2), Pos::new(2, 1), Pos::new(2, 3)]
        );
    }

    #[test]
    fn adjacency() {
        let p = Pos::new(1, 1);
        assert!(p.is_adjacent(Pos::new(0, 1)));
        assert!(p.is_adjacent(Pos::new(1, 2)));
        assert!(!p.is_adjacent(Pos::new(2, 2)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn pos_ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 5), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 5), Pos::new(1, 0)]);
    }

    #[test]
    fn parse_pos() {
        assert_eq!("5,5".parse::<Pos>(), Ok(Pos::new(5, 5)));
        assert_eq!(" (1, 2) ".parse::<Pos>(), Ok(Pos::new(1, 2)));
        assert_eq!(Pos::new(3, 4).to_string().parse::<Pos>(), Ok(Pos::new(3, 4)));
        assert!("1;2".parse::<Pos>().is_err());
        assert!("a,2".parse::<Pos>().is_err());
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(2, 3);
        assert!(b.contains(Pos::new(0, 0)));
        assert!(b.contains(Pos::new(1, 2)));
        assert!(!b.contains(Pos::new(2, 0)));
        assert!(!b.contains(Pos::new(0, 3)));
        assert!(!b.contains(Pos::new(-1, 0)));
    }

    #[test]
    fn bounds_index_and_iter() {
        let b = Bounds::new(2, 3);
        assert_eq!(b.len(), 6);
        assert_eq!(b.index(Pos::new(1, 1)), Some(4));
        assert_eq!(b.index(Pos::new(5, 5)), None);
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[5], Pos::new(1, 2));
    }

    #[test]
    fn empty_bounds() {
        let b = Bounds::new(0, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
        assert_eq!(Bounds::new(-3, 2), Bounds::new(0, 2));
    }
}
