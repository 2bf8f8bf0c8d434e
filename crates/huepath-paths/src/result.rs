use std::collections::BTreeSet;
use std::fmt;

use huepath_core::Pos;

/// Sentinel cost of a search that did not reach the goal.
pub const UNREACHABLE: i32 = i32::MAX;

/// How a search terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The walk stepped onto the goal.
    Reached,
    /// An expansion produced no improved neighbour.
    NoPath,
    /// The grid has no goal marker; nothing was searched.
    NoGoal,
    /// The configured expansion bound was hit first.
    IterationLimit,
}

impl Outcome {
    #[inline]
    pub fn is_success(self) -> bool {
        self == Outcome::Reached
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Reached => "goal reached",
            Outcome::NoPath => "no path found",
            Outcome::NoGoal => "no goal in grid",
            Outcome::IterationLimit => "iteration limit reached",
        })
    }
}

/// Everything a search reports back.
///
/// Every outcome other than [`Outcome::Reached`] has an empty `path` and a
/// `cost` of [`UNREACHABLE`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub outcome: Outcome,
    /// Start to goal, both included.
    pub path: Vec<Pos>,
    /// Sum of transition and move costs along `path`.
    pub cost: i32,
    /// Expanded positions. Never contains the goal.
    pub visited: BTreeSet<Pos>,
    /// The last expansion's candidate table, `(position, f)` in neighbour
    /// order.
    pub candidates: Vec<(Pos, i32)>,
    /// Number of expansions performed.
    pub iterations: usize,
}

impl SearchResult {
    /// The result of a search on a grid without a goal.
    pub fn no_goal() -> Self {
        Self {
            outcome: Outcome::NoGoal,
            path: Vec::new(),
            cost: UNREACHABLE,
            visited: BTreeSet::new(),
            candidates: Vec::new(),
            iterations: 0,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.outcome.is_success()
    }

    /// Number of positions on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Last position of the path, when found.
    pub fn goal(&self) -> Option<Pos> {
        self.path.last().copied()
    }

    /// Cost, or `None` for the unreachable sentinel.
    pub fn total_cost(&self) -> Option<i32> {
        (self.cost != UNREACHABLE).then_some(self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_goal_shape() {
        let r = SearchResult::no_goal();
        assert!(!r.is_found());
        assert!(r.is_empty());
        assert_eq!(r.cost, UNREACHABLE);
        assert_eq!(r.total_cost(), None);
        assert!(r.visited.is_empty());
        assert_eq!(r.goal(), None);
    }
}
