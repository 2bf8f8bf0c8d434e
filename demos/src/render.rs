//! Text rendering of a grid with a path drawn over it.
//!
//! [`mark`] lays the path over the grid; [`write_plain`] and
//! [`write_styled`] print the marked grid, the latter with each cell's
//! colour as a terminal background via crossterm.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor,
};
use huepath_core::{Color, ColorAssignment, Pos, Tile, TileGrid};

/// Glyph for the goal cell.
pub const GOAL_GLYPH: char = 'H';
/// Glyph for cells on the path.
pub const PATH_GLYPH: char = '*';

/// One rendered cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Marked {
    pub tile: Tile,
    pub color: Color,
    /// `H`, `*` or `None` for an unmarked cell.
    pub glyph: Option<char>,
}

/// Lay `path` and `goal` over `grid`.
pub fn mark(
    grid: &TileGrid,
    path: &[Pos],
    goal: Option<Pos>,
    colors: ColorAssignment,
) -> Vec<Vec<Marked>> {
    let on_path: HashSet<Pos> = path.iter().copied().collect();
    let mut rows = Vec::with_capacity(grid.rows() as usize);
    for (y, row) in grid.row_slices().enumerate() {
        let cells = row
            .iter()
            .enumerate()
            .map(|(x, &tile)| {
                let p = Pos::new(y as i32, x as i32);
                let glyph = if Some(p) == goal {
                    Some(GOAL_GLYPH)
                } else if on_path.contains(&p) {
                    Some(PATH_GLYPH)
                } else {
                    None
                };
                Marked {
                    tile,
                    color: colors.color_of(tile),
                    glyph,
                }
            })
            .collect();
        rows.push(cells);
    }
    rows
}

/// Write the marked grid using tile symbols for unmarked cells.
pub fn write_plain<W: Write>(w: &mut W, marked: &[Vec<Marked>]) -> io::Result<()> {
    for row in marked {
        let line: String = row
            .iter()
            .map(|m| m.glyph.unwrap_or(m.tile.symbol().to_ascii_lowercase()))
            .collect();
        writeln!(w, "{line}")?;
    }
    Ok(())
}

fn to_ct_color(c: Color) -> CtColor {
    let (r, g, b) = c.rgb();
    CtColor::Rgb { r, g, b }
}

/// Write the marked grid as coloured blocks, two columns per cell.
pub fn write_styled<W: Write>(w: &mut W, marked: &[Vec<Marked>]) -> io::Result<()> {
    for row in marked {
        for m in row {
            let glyph = m.glyph.unwrap_or(' ');
            queue!(
                w,
                SetBackgroundColor(to_ct_color(m.color)),
                SetForegroundColor(CtColor::Black),
                Print(format!("{glyph} "))
            )?;
        }
        queue!(w, ResetColor, Print("\n"))?;
    }
    w.flush()
}
