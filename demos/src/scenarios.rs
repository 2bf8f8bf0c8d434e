//! Built-in grids.

use huepath_core::{GridError, Pos, TileGrid};

/// Scattered red cells around a goal near the centre.
pub const SCENARIO_ONE: &str = "\
RGGGRG
GGGRGG
GGRHGG
GRGGGR
RGGGRG
GGGRGG";

/// A red/green checkerboard with the goal on a red square.
pub const SCENARIO_TWO: &str = "\
RGRGRG
GRGRGR
RGHGRG
GRGRGR
RGRGRG
GRGRGR";

/// Selects one of the built-in grids.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Scenario {
    One,
    #[default]
    Two,
}

impl Scenario {
    pub fn text(self) -> &'static str {
        match self {
            Scenario::One => SCENARIO_ONE,
            Scenario::Two => SCENARIO_TWO,
        }
    }

    pub fn grid(self) -> Result<TileGrid, GridError> {
        TileGrid::parse(self.text())
    }

    /// Bottom-right corner, where the stock runs start.
    pub fn default_start(self) -> Pos {
        Pos::new(5, 5)
    }
}
