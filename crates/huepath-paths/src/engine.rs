//! The stepwise greedy best-first walk.
//!
//! Each expansion only ranks the neighbours of the current position. There
//! is no global frontier: neighbours that lose a ranking are dropped and
//! expanded positions are never reopened. The walk can therefore miss
//! cheaper paths, or stall in a pocket of expanded cells, even when the goal
//! is reachable.

use std::collections::{BTreeSet, HashMap};

use huepath_core::Pos;

use crate::config::SearchConfig;
use crate::path::reconstruct;
use crate::result::{Outcome, SearchResult, UNREACHABLE};
use crate::traits::GuidedPather;

/// Result of a single [`SearchEngine::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The walk moved on to a new current position.
    Running,
    /// The walk has terminated.
    Done(Outcome),
}

/// Search state for one walk from `start` to `goal`.
///
/// All tables live here and die with the engine, so independent searches
/// over the same grid never share mutable state.
pub struct SearchEngine<'p, P> {
    pather: &'p P,
    start: Pos,
    goal: Pos,
    current: Pos,
    g_score: HashMap<Pos, i32>,
    came_from: HashMap<Pos, Pos>,
    visited: BTreeSet<Pos>,
    candidates: Vec<(Pos, i32)>,
    iterations: usize,
    done: Option<Outcome>,
    // scratch buffer for neighbor queries
    nbuf: Vec<Pos>,
}

impl<'p, P: GuidedPather> SearchEngine<'p, P> {
    /// Start a walk at `start`. The caller is responsible for `start` being
    /// a valid position for `pather`.
    pub fn new(pather: &'p P, start: Pos, goal: Pos) -> Self {
        Self {
            pather,
            start,
            goal,
            current: start,
            g_score: HashMap::from([(start, 0)]),
            came_from: HashMap::new(),
            visited: BTreeSet::new(),
            candidates: Vec::new(),
            iterations: 0,
            done: None,
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// The position the next step will expand.
    #[inline]
    pub fn current(&self) -> Pos {
        self.current
    }

    /// Positions expanded so far.
    #[inline]
    pub fn visited(&self) -> &BTreeSet<Pos> {
        &self.visited
    }

    /// Best known cost from the start to `p`, if `p` has been reached.
    #[inline]
    pub fn g_score(&self, p: Pos) -> Option<i32> {
        self.g_score.get(&p).copied()
    }

    /// Candidate table of the most recent expansion.
    #[inline]
    pub fn candidates(&self) -> &[(Pos, i32)] {
        &self.candidates
    }

    /// Number of expansions so far.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The terminal outcome, once reached.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.done
    }

    /// Perform one transition of the walk.
    ///
    /// Once terminated, further calls keep returning the same
    /// [`Step::Done`].
    pub fn step(&mut self) -> Step {
        if let Some(outcome) = self.done {
            return Step::Done(outcome);
        }
        if self.current == self.goal {
            return self.terminate(Outcome::Reached);
        }

        let current = self.current;
        self.visited.insert(current);
        self.iterations += 1;
        self.candidates.clear();

        let current_g = self.g_score.get(&current).copied().unwrap_or(0);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            if self.visited.contains(&np) {
                continue;
            }
            let tentative_g = current_g + self.pather.cost(current, np);
            if self
                .g_score
                .get(&np)
                .is_some_and(|&known| tentative_g >= known)
            {
                continue;
            }
            self.g_score.insert(np, tentative_g);
            self.came_from.insert(np, current);
            let f = self.pather.rank(tentative_g, np, self.goal);
            self.candidates.push((np, f));
        }
        self.nbuf = nbuf;

        log::trace!(
            "expanded {current} (g = {current_g}): candidates {:?}",
            self.candidates
        );

        // First minimum wins, so ties go to the earliest neighbour.
        let Some(&(next, _)) = self.candidates.iter().min_by_key(|&&(_, f)| f) else {
            return self.terminate(Outcome::NoPath);
        };
        self.current = next;
        Step::Running
    }

    fn terminate(&mut self, outcome: Outcome) -> Step {
        self.done = Some(outcome);
        Step::Done(outcome)
    }

    /// Step until the walk terminates or `config`'s expansion bound is hit.
    pub fn run(&mut self, config: &SearchConfig) -> Outcome {
        loop {
            if let Some(outcome) = self.done {
                return outcome;
            }
            if config
                .max_iterations
                .is_some_and(|max| self.iterations >= max)
                && self.current != self.goal
            {
                log::info!(
                    "search stopped after {} expansions without reaching {}",
                    self.iterations,
                    self.goal
                );
                self.done = Some(Outcome::IterationLimit);
                continue;
            }
            self.step();
        }
    }

    /// Run to termination with no bound and build the result.
    pub fn finish(mut self) -> SearchResult {
        self.run(&SearchConfig::default());
        self.into_result()
    }

    /// Build the result from the current state.
    ///
    /// An engine that has not terminated yet reports
    /// [`Outcome::IterationLimit`].
    pub fn into_result(self) -> SearchResult {
        let outcome = self.done.unwrap_or(Outcome::IterationLimit);
        let (path, cost) = match outcome {
            Outcome::Reached => (
                reconstruct(&self.came_from, self.start, self.goal),
                self.g_score.get(&self.goal).copied().unwrap_or(0),
            ),
            _ => (Vec::new(), UNREACHABLE),
        };
        SearchResult {
            outcome,
            path,
            cost,
            visited: self.visited,
            candidates: self.candidates,
            iterations: self.iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};

    /// A 1-D corridor of `len` cells where every move costs 1 and the
    /// estimate is plain distance.
    struct Corridor {
        len: i32,
    }

    impl Pather for Corridor {
        fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
            for n in [p.shift(0, -1), p.shift(0, 1)] {
                if n.col >= 0 && n.col < self.len {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for Corridor {
        fn cost(&self, _from: Pos, _to: Pos) -> i32 {
            1
        }
    }

    impl GuidedPather for Corridor {
        fn estimate(&self, from: Pos, to: Pos) -> i32 {
            (from.col - to.col).abs()
        }
    }

    /// Every position is isolated.
    struct Islands;

    impl Pather for Islands {
        fn neighbors(&self, _p: Pos, _buf: &mut Vec<Pos>) {}
    }

    impl WeightedPather for Islands {
        fn cost(&self, _from: Pos, _to: Pos) -> i32 {
            1
        }
    }

    impl GuidedPather for Islands {
        fn estimate(&self, _from: Pos, _to: Pos) -> i32 {
            0
        }
    }

    #[test]
    fn initial_state() {
        let c = Corridor { len: 5 };
        let e = SearchEngine::new(&c, Pos::new(0, 0), Pos::new(0, 4));
        assert_eq!(e.current(), Pos::new(0, 0));
        assert_eq!(e.g_score(Pos::new(0, 0)), Some(0));
        assert!(e.visited().is_empty());
        assert!(e.candidates().is_empty());
        assert_eq!(e.outcome(), None);
    }

    #[test]
    fn corridor_walk() {
        let c = Corridor { len: 5 };
        let mut e = SearchEngine::new(&c, Pos::new(0, 0), Pos::new(0, 4));
        for i in 1..=4 {
            assert_eq!(e.step(), Step::Running);
            assert_eq!(e.visited().len(), i);
            assert_eq!(e.current(), Pos::new(0, i as i32));
        }
        assert_eq!(e.step(), Step::Done(Outcome::Reached));
        assert_eq!(e.step(), Step::Done(Outcome::Reached));
        assert!(!e.visited().contains(&Pos::new(0, 4)));

        let r = e.into_result();
        assert_eq!(r.cost, 4);
        assert_eq!(r.path.len(), 5);
        assert_eq!(r.iterations, 4);
    }

    #[test]
    fn start_on_goal() {
        let c = Corridor { len: 3 };
        let r = SearchEngine::new(&c, Pos::new(0, 1), Pos::new(0, 1)).finish();
        assert_eq!(r.outcome, Outcome::Reached);
        assert_eq!(r.path, vec![Pos::new(0, 1)]);
        assert_eq!(r.cost, 0);
        assert!(r.visited.is_empty());
        assert_eq!(r.iterations, 0);
    }

    #[test]
    fn isolated_start_has_no_path() {
        let r = SearchEngine::new(&Islands, Pos::new(0, 0), Pos::new(3, 3)).finish();
        assert_eq!(r.outcome, Outcome::NoPath);
        assert!(r.path.is_empty());
        assert_eq!(r.cost, UNREACHABLE);
        assert_eq!(r.visited, BTreeSet::from([Pos::new(0, 0)]));
        assert!(r.candidates.is_empty());
    }

    #[test]
    fn dead_end_has_no_path() {
        // The goal lies beyond the corridor's east end; once the walk is
        // there every neighbour has been expanded.
        let c = Corridor { len: 3 };
        let mut e = SearchEngine::new(&c, Pos::new(0, 1), Pos::new(0, 7));
        assert_eq!(e.step(), Step::Running);
        // east (f = 1 + 5) beats west (f = 1 + 7)
        assert_eq!(e.current(), Pos::new(0, 2));
        assert_eq!(e.step(), Step::Done(Outcome::NoPath));
        assert_eq!(e.visited().len(), 2);
    }

    #[test]
    fn ties_go_to_first_neighbor() {
        struct Flat;
        impl Pather for Flat {
            fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
                buf.extend(p.neighbors_4());
            }
        }
        impl WeightedPather for Flat {
            fn cost(&self, _from: Pos, _to: Pos) -> i32 {
                1
            }
        }
        impl GuidedPather for Flat {
            fn estimate(&self, _from: Pos, _to: Pos) -> i32 {
                0
            }
        }

        let mut e = SearchEngine::new(&Flat, Pos::new(5, 5), Pos::new(9, 9));
        e.step();
        assert_eq!(e.candidates().len(), 4);
        // north comes first in the neighbour order
        assert_eq!(e.current(), Pos::new(4, 5));
    }

    #[test]
    fn iteration_bound() {
        let c = Corridor { len: 10 };
        let mut e = SearchEngine::new(&c, Pos::new(0, 0), Pos::new(0, 9));
        assert_eq!(e.run(&SearchConfig::bounded(3)), Outcome::IterationLimit);
        let r = e.into_result();
        assert_eq!(r.iterations, 3);
        assert_eq!(r.visited.len(), 3);
        assert!(r.path.is_empty());
        assert_eq!(r.cost, UNREACHABLE);
    }

    #[test]
    fn bound_not_hit_when_goal_is_current() {
        let c = Corridor { len: 3 };
        let mut e = SearchEngine::new(&c, Pos::new(0, 0), Pos::new(0, 2));
        assert_eq!(e.run(&SearchConfig::bounded(2)), Outcome::Reached);
    }
}
