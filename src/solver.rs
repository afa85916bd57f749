use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::color::Color;
use crate::graph::Graph;
use crate::puzzle::ORIGIN;
use crate::traverse::{survey, taint};

/// Search depth used when none is configured.
pub const DEFAULT_MAX_STEPS: usize = 6;
/// Largest accepted `max_steps`; the search recurses once per step.
pub const MAX_STEPS_LIMIT: usize = 64;

/// Reasons a [`SolverConfig`] may be rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SolverConfigError {
    #[error("max steps {requested} exceeds the limit of {limit}")]
    MaxStepsTooLarge { requested: usize, limit: usize },
}

/// Tunables for [`FloodSolver`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    max_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_steps: DEFAULT_MAX_STEPS }
    }
}

impl SolverConfig {
    /// Search steps `0..=max_steps`, i.e. sequences of up to `max_steps + 1` moves.
    pub fn with_max_steps(max_steps: usize) -> Result<Self, SolverConfigError> {
        if max_steps > MAX_STEPS_LIMIT {
            return Err(SolverConfigError::MaxStepsTooLarge { requested: max_steps, limit: MAX_STEPS_LIMIT });
        }

        Ok(Self { max_steps })
    }

    #[inline]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

/// The result of a search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome<C: Color> {
    /// A winning sequence, one color per move.
    Found(Vec<C>),
    /// Every sequence within the bound was tried.
    /// `last_explored` is the final branch tried, kept for diagnostics only; it does not win.
    NotFound { last_explored: Vec<C> },
}

impl<C: Color> Outcome<C> {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The recorded moves. Only a winning sequence if [`passed`](Self::passed).
    pub fn steps(&self) -> &[C] {
        match self {
            Self::Found(steps) => steps,
            Self::NotFound { last_explored } => last_explored,
        }
    }

    /// The winning sequence, if any.
    pub fn into_solution(self) -> Option<Vec<C>> {
        match self {
            Self::Found(steps) => Some(steps),
            Self::NotFound { .. } => None,
        }
    }
}

/// Counters gathered over one search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Candidate branches flooded and checked.
    pub branches: usize,
    /// Deepest step reached, counting from 0.
    pub deepest_step: usize,
}

/// The colors on the board, in order of first appearance by vertex id. These are the legal moves.
pub fn candidates<C: Color>(colors: &[C]) -> Vec<C> {
    colors.iter().unique().cloned().collect_vec()
}

/// Depth-first, first-success search for a move sequence that unifies the board.
///
/// At every step each color on the board is tried in [`candidates`] order against its own copy of the colors.
/// The first winning branch found ends the search; it is not necessarily the shortest.
pub struct FloodSolver<'a> {
    graph: &'a Graph,
    max_steps: usize,
}

impl<'a> FloodSolver<'a> {
    pub fn new(graph: &'a Graph, config: &SolverConfig) -> Self {
        Self {
            graph,
            max_steps: config.max_steps(),
        }
    }

    /// Search from the coloring `colors`, indexed by vertex id.
    pub fn solve<C: Color>(&self, colors: &[C]) -> Outcome<C> {
        self.solve_with_stats(colors).0
    }

    pub fn solve_with_stats<C: Color>(&self, colors: &[C]) -> (Outcome<C>, SearchStats) {
        debug!(
            "searching {} vertices with {} colors, up to {} moves",
            self.graph.vertex_count(),
            candidates(colors).len(),
            self.max_steps + 1,
        );

        let mut trail = Vec::with_capacity(self.max_steps + 1);
        let mut stats = SearchStats::default();

        let outcome = match self.run_step(0, colors, &mut trail, &mut stats) {
            Some(steps) => Outcome::Found(steps),
            None => Outcome::NotFound { last_explored: trail },
        };

        match &outcome {
            Outcome::Found(steps) => debug!("solved in {} moves after {} branches", steps.len(), stats.branches),
            Outcome::NotFound { .. } => debug!("no solution after {} branches", stats.branches),
        }

        (outcome, stats)
    }

    // trail[..step] holds the moves leading to `colors`
    fn run_step<C: Color>(&self, step: usize, colors: &[C], trail: &mut Vec<C>, stats: &mut SearchStats) -> Option<Vec<C>> {
        let head = colors.get(ORIGIN)?;
        stats.deepest_step = stats.deepest_step.max(step);

        for candidate in candidates(colors) {
            let mut branch = colors.to_vec();
            trail.truncate(step);
            trail.push(candidate.clone());
            stats.branches += 1;

            taint(self.graph, &mut branch, ORIGIN, head, &candidate);
            let verdict = survey(self.graph, &branch, ORIGIN, &candidate);
            trace!("step {}: {:?} -> {:?}", step, candidate, verdict);

            if verdict.passed() {
                return Some(trail.clone());
            }

            if step < self.max_steps {
                if let Some(found) = self.run_step(step + 1, &branch, trail, stats) {
                    return Some(found);
                }
            }
        }

        None
    }
}
