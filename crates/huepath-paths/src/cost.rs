//! Move costs and the search heuristic.
//!
//! An [`AgentProfile`] decides which plain colour is a reward and which a
//! penalty. [`CostModel`] binds a profile, a goal colour and a grid, and is
//! the [`GuidedPather`] the search engine runs against.

use std::fmt;
use std::str::FromStr;

use huepath_core::{Color, ColorAssignment, GridError, ParseError, Pos, TileGrid};

use crate::distance::manhattan;
use crate::engine::SearchEngine;
use crate::traits::{GuidedPather, Pather, WeightedPather};

/// Cost of entering a cell whose colour the agent dislikes.
pub const PENALTY: i32 = 10;
/// Cost of entering a cell whose colour the agent likes (a reward).
pub const REWARD: i32 = -10;
/// Heuristic adjustment when a cell shares the goal's colour.
pub const COLOR_MATCH: i32 = -5;
/// Heuristic adjustment when a cell's colour differs from the goal's.
pub const COLOR_MISMATCH: i32 = 5;

// ---------------------------------------------------------------------------
// AgentProfile
// ---------------------------------------------------------------------------

/// Which plain colour an agent is drawn to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentProfile {
    /// Rewarded on red cells, penalised on green ones. Legacy tag `R1`.
    #[default]
    Red,
    /// Rewarded on green cells, penalised on red ones. Legacy tag `G1`.
    Green,
}

/// Per-colour move cost table of a profile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorCosts {
    pub red: i32,
    pub green: i32,
}

impl AgentProfile {
    /// The explicit cost table for this profile.
    pub const fn costs(self) -> ColorCosts {
        match self {
            AgentProfile::Red => ColorCosts {
                red: REWARD,
                green: PENALTY,
            },
            AgentProfile::Green => ColorCosts {
                red: PENALTY,
                green: REWARD,
            },
        }
    }

    /// Cost contribution of entering a cell of colour `color`.
    pub const fn move_cost(self, color: Color) -> i32 {
        let table = self.costs();
        match color {
            Color::Red => table.red,
            Color::Green => table.green,
            _ => 0,
        }
    }

    /// The short tag used by older scenario files.
    pub const fn tag(self) -> &'static str {
        match self {
            AgentProfile::Red => "R1",
            AgentProfile::Green => "G1",
        }
    }
}

impl fmt::Display for AgentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentProfile::Red => f.write_str("red"),
            AgentProfile::Green => f.write_str("green"),
        }
    }
}

impl FromStr for AgentProfile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r1" => Ok(AgentProfile::Red),
            "green" | "g1" => Ok(AgentProfile::Green),
            _ => Err(ParseError::new("agent profile", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// CostModel
// ---------------------------------------------------------------------------

/// Costs and heuristic of one agent heading for one grid's goal.
pub struct CostModel<'g> {
    grid: &'g TileGrid,
    profile: AgentProfile,
    colors: ColorAssignment,
    goal: Pos,
}

impl<'g> CostModel<'g> {
    /// Bind `profile` and `goal_color` to `grid`.
    ///
    /// Fails with [`GridError::NoGoal`] if the grid has no goal marker.
    pub fn new(
        grid: &'g TileGrid,
        profile: AgentProfile,
        goal_color: Color,
    ) -> Result<Self, GridError> {
        Ok(Self {
            grid,
            profile,
            colors: ColorAssignment::new(goal_color),
            goal: grid.goal()?,
        })
    }

    #[inline]
    pub fn grid(&self) -> &'g TileGrid {
        self.grid
    }

    #[inline]
    pub fn profile(&self) -> AgentProfile {
        self.profile
    }

    #[inline]
    pub fn colors(&self) -> ColorAssignment {
        self.colors
    }

    /// Position of the grid's goal marker.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Colour of the cell at `p`.
    pub fn color_of(&self, p: Pos) -> Result<Color, GridError> {
        self.grid.color_of(p, self.colors)
    }

    /// Profile-dependent cost of entering `target`, based only on its colour.
    pub fn move_cost(&self, target: Pos) -> Result<i32, GridError> {
        Ok(self.profile.move_cost(self.color_of(target)?))
    }

    /// Topological cost of any orthogonal move.
    #[inline]
    pub const fn transition_cost(&self) -> i32 {
        1
    }

    /// Geometric lower bound from `p` to `goal`, ignoring colours.
    #[inline]
    pub fn manhattan_distance(&self, p: Pos, goal: Pos) -> i32 {
        manhattan(p, goal)
    }

    /// [`COLOR_MATCH`] if `p` has the colour of `goal`, else
    /// [`COLOR_MISMATCH`]. Makes the heuristic inadmissible.
    pub fn color_penalty(&self, p: Pos, goal: Pos) -> Result<i32, GridError> {
        if self.color_of(p)? == self.color_of(goal)? {
            Ok(COLOR_MATCH)
        } else {
            Ok(COLOR_MISMATCH)
        }
    }

    /// Manhattan distance plus colour penalty.
    pub fn heuristic(&self, p: Pos, goal: Pos) -> Result<i32, GridError> {
        Ok(self.manhattan_distance(p, goal) + self.color_penalty(p, goal)?)
    }

    /// A fresh walk from `start` to the goal marker.
    ///
    /// Fails with [`GridError::InvalidPosition`] if `start` is outside the
    /// grid.
    pub fn walk_from(&self, start: Pos) -> Result<SearchEngine<'_, Self>, GridError> {
        if !self.grid.contains(start) {
            return Err(GridError::InvalidPosition {
                pos: start,
                bounds: self.grid.bounds(),
            });
        }
        Ok(SearchEngine::new(self, start, self.goal))
    }
}

// The pather impls expect in-bounds positions: `walk_from` checks the start
// and `neighbors` only yields cells inside the grid.

impl Pather for CostModel<'_> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        debug_assert!(self.grid.contains(p), "expanding {p} outside the grid");
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.grid.contains(n)),
        );
    }
}

impl WeightedPather for CostModel<'_> {
    fn cost(&self, _from: Pos, to: Pos) -> i32 {
        debug_assert!(self.grid.contains(to), "moving to {to} outside the grid");
        self.transition_cost() + self.move_cost(to).unwrap_or(0)
    }
}

impl GuidedPather for CostModel<'_> {
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        debug_assert!(
            self.grid.contains(from) && self.grid.contains(to),
            "estimating {from} -> {to} outside the grid"
        );
        let penalty = self.color_penalty(from, to).unwrap_or(COLOR_MISMATCH);
        self.manhattan_distance(from, to) + penalty
    }
}
