//! The seams between the search engine and the world it walks.
//!
//! Costs are signed: a cell an agent likes is a reward and shows up as a
//! negative step cost. Nothing here assumes the estimate is admissible.

use huepath_core::Pos;

/// Neighbour enumeration.
pub trait Pather {
    /// Push the positions reachable in one move from `p` onto `buf`, in
    /// the order ties between them should be broken. `buf` arrives empty.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// A [`Pather`] whose moves carry a signed cost.
pub trait WeightedPather: Pather {
    /// Cost of the single move `from` -> `to`.
    fn cost(&self, from: Pos, to: Pos) -> i32;

    /// Sum of the move costs along `path`. The first position is free.
    fn path_cost(&self, path: &[Pos]) -> i32 {
        path.windows(2).map(|w| self.cost(w[0], w[1])).sum()
    }
}

/// A [`WeightedPather`] that can guess how far a position is from a target.
pub trait GuidedPather: WeightedPather {
    /// Guess of the remaining cost from `from` to `to`.
    fn estimate(&self, from: Pos, to: Pos) -> i32;

    /// Ranking score of a candidate reached at cost `g`: lower is better.
    fn rank(&self, g: i32, p: Pos, goal: Pos) -> i32 {
        g + self.estimate(p, goal)
    }
}
