//! Colour-weighted pathing over huepath grids.
//!
//! The search is a heuristic-guided greedy walk from a start cell to the
//! grid's single goal marker:
//!
//! - moving costs 1 plus a profile-dependent reward or penalty for the
//!   colour of the entered cell ([`AgentProfile`], [`CostModel`]);
//! - the heuristic is Manhattan distance plus a bonus for cells sharing the
//!   goal's colour, and is not admissible;
//! - each step ranks only the neighbours of the current cell, so the walk
//!   is not A\* and may return a suboptimal path or none at all.
//!
//! [`search`] runs a whole walk; [`SearchEngine`] exposes it one step at a
//! time.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | move costs |
//! | [`GuidedPather`] : [`WeightedPather`] | the heuristic |

mod config;
mod cost;
mod distance;
mod engine;
mod path;
mod result;
mod search;
mod traits;

pub use config::SearchConfig;
pub use cost::{AgentProfile, COLOR_MATCH, COLOR_MISMATCH, ColorCosts, CostModel, PENALTY, REWARD};
pub use distance::manhattan;
pub use engine::{SearchEngine, Step};
pub use path::reconstruct;
pub use result::{Outcome, SearchResult, UNREACHABLE};
pub use search::{search, search_with};
pub use traits::{GuidedPather, Pather, WeightedPather};
