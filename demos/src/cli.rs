//! Command-line front end: load a grid, search it, print the outcome.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use huepath_core::{Color, ColorAssignment, Pos, TileGrid};
use huepath_paths::{AgentProfile, SearchConfig, search_with};

use crate::render::{mark, write_plain, write_styled};
use crate::report::write_report;
use crate::scenarios::Scenario;

/// Walk a coloured grid from a start cell to its goal marker.
#[derive(Parser, Debug)]
#[command(name = "huepath", author, version, about, long_about = None)]
pub struct Args {
    /// Built-in grid to search
    #[arg(short, long, value_enum, default_value_t = Scenario::Two)]
    pub scenario: Scenario,

    /// Read the grid from a text file instead (`G`, `R`, `H` per cell)
    #[arg(short, long)]
    pub grid: Option<PathBuf>,

    /// Start cell as `row,col` [default: bottom-right corner]
    #[arg(long)]
    pub start: Option<Pos>,

    /// Agent profile: `red`/`R1` or `green`/`G1`
    #[arg(short, long, default_value = "red")]
    pub agent: AgentProfile,

    /// Colour of the goal cell
    #[arg(short = 'c', long, default_value = "red")]
    pub goal_color: Color,

    /// Stop after this many expansions
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the grid without terminal colours
    #[arg(long)]
    pub plain: bool,

    /// Log search progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The grid named by `--grid`, or the built-in scenario.
    pub fn load_grid(&self) -> Result<TileGrid, Box<dyn Error>> {
        match &self.grid {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
                Ok(TileGrid::parse(&text)?)
            }
            None => Ok(self.scenario.grid()?),
        }
    }

    /// `--start`, or the bottom-right corner of `grid`.
    pub fn start_for(&self, grid: &TileGrid) -> Pos {
        self.start
            .unwrap_or_else(|| Pos::new(grid.rows() - 1, grid.cols() - 1))
    }
}

/// Run one search as described by `args`, writing everything to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Box<dyn Error>> {
    let grid = args.load_grid()?;
    let start = args.start_for(&grid);
    let config = SearchConfig {
        max_iterations: args.max_iterations,
    };
    let result = search_with(&grid, args.agent, args.goal_color, start, &config)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
        return Ok(());
    }

    let marked = mark(
        &grid,
        &result.path,
        grid.goal().ok(),
        ColorAssignment::new(args.goal_color),
    );
    if args.plain {
        write_plain(out, &marked)?;
    } else {
        write_styled(out, &marked)?;
    }
    writeln!(out)?;
    write_report(out, &result)?;
    Ok(())
}
