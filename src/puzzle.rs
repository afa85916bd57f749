use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::cell::Dot;
use crate::color::Color;
use crate::graph::{Graph, VertexId};
use crate::location::Coord;
use crate::solver::{FloodSolver, Outcome, SolverConfig};
use crate::traverse;

/// The vertex every move floods from and every win check measures against.
pub const ORIGIN: VertexId = 0;

/// A flood-fill puzzle: the present cells of a grid and the adjacency between them.
///
/// [`Puzzle`]s should be built using a [`GridBuilder`](crate::builder::GridBuilder) or [`parse_puzzle`](crate::parse::parse_puzzle).
/// The topology never changes once built; moves only change cell colors.
#[derive(Clone, Debug)]
pub struct Puzzle<C: Color> {
    pub(crate) dots: Vec<Dot<C>>,
    pub(crate) graph: Graph,
    // width, height
    pub(crate) dims: (Coord, Coord),
}

impl<C: Color> Puzzle<C> {
    pub fn dots(&self) -> &[Dot<C>] {
        &self.dots
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// `(width, height)` of the grid the puzzle was built from.
    pub fn dims(&self) -> (Coord, Coord) {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// The current color of every vertex, indexed by vertex id.
    pub fn colors(&self) -> Vec<C> {
        self.dots.iter().map(|dot| dot.color.clone()).collect_vec()
    }

    pub fn origin_color(&self) -> Option<&C> {
        self.dots.get(ORIGIN).map(|dot| &dot.color)
    }

    /// The colors currently on the board, in order of first appearance by vertex id.
    pub fn distinct_colors(&self) -> Vec<C> {
        self.dots.iter().map(|dot| &dot.color).unique().cloned().collect_vec()
    }

    /// Whether the whole board is one color.
    pub fn is_solved(&self) -> bool {
        match self.origin_color() {
            None => true,
            Some(target) => traverse::is_unified(&self.graph, &self.colors(), ORIGIN, target),
        }
    }

    /// Play `moves` in order, each flooding the origin's region with the chosen color.
    pub fn play(mut self, moves: &[C]) -> Self {
        let mut colors = self.colors();
        for chosen in moves {
            let Some(head) = colors.get(ORIGIN).cloned() else { break };
            traverse::taint(&self.graph, &mut colors, ORIGIN, &head, chosen);
        }

        for (dot, color) in self.dots.iter_mut().zip(colors) {
            dot.color = color;
        }
        self
    }

    /// Search for a winning move sequence of at most `config.max_steps() + 1` moves.
    ///
    /// See [`FloodSolver`] for the search order.
    pub fn solve(&self, config: &SolverConfig) -> Outcome<C> {
        FloodSolver::new(&self.graph, config).solve(&self.colors())
    }
}

/// Rows are printed from the highest row index down, so a puzzle read by [`parse_puzzle`](crate::parse::parse_puzzle) prints in its input layout.
/// Absent cells print as `.` and every column is padded to the widest color.
impl<C: Color + Display> Display for Puzzle<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.dims;
        let labels = self.dots.iter().map(|dot| dot.color.to_string()).collect_vec();
        let pad = labels.iter().map(String::len).max().unwrap_or(1);

        let mut grid: Array2<Option<&str>> = Array2::from_elem((height, width), None);
        for (dot, label) in self.dots.iter().zip(labels.iter()) {
            grid.index_mut(dot.location.as_index()).assign_elem(Some(label.as_str()));
        }

        for y in (0..height).rev() {
            let line = grid.row(y).iter()
                .map(|cell| format!("{:<pad$}", cell.unwrap_or(".")))
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
