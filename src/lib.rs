#![warn(missing_docs)]

//! # `inundate`
//!
//! A solver for flood-fill puzzles in the style of [Flood-It](https://en.wikipedia.org/wiki/Flood-It).
//! A board is a grid of colored cells, possibly with holes. One cell is the origin; a move picks a color and repaints the origin's
//! same-colored region with it, absorbing whatever neighbours already had that color. The board is won once it is a single color.
//!
//! Begin by building a puzzle with a [`GridBuilder`](builder::GridBuilder), or read one from text with [`parse_puzzle`](parse::parse_puzzle).
//! Then call [`solve()`](crate::Puzzle::solve) with a [`SolverConfig`] to search for a winning sequence of moves.
//!
//! # Internals
//! The grid is turned into an undirected graph G with one vertex per present cell, numbered in row-major order, and an edge between
//! every pair of horizontally or vertically adjacent cells. Vertex 0 is the origin.
//!
//! Colors are kept apart from G as a plain array indexed by vertex id. A move is a breadth-first walk from the origin which recolors
//! every vertex of the origin's old color it can reach without crossing another color ([`taint`](traverse::taint)).
//! The win check is the same walk without recoloring, which fails on any crossing it refuses, followed by a scan for
//! a uniform color ([`survey`](traverse::survey)).
//!
//! The search tries every color on the board at every step, depth first, each branch on its own copy of the color array,
//! and returns the first sequence that wins within the configured number of steps.

pub use builder::GridBuilder;
pub use cell::Dot;
pub use color::{Color, ColorCode};
pub use graph::{Graph, VertexId};
pub use location::{Coord, Dimension, Location};
pub use puzzle::{Puzzle, ORIGIN};
pub use solver::{FloodSolver, Outcome, SolverConfig};

pub mod builder;
pub(crate) mod cell;
pub mod color;
pub mod graph;
pub(crate) mod location;
pub mod parse;
pub(crate) mod puzzle;
pub mod shape;
pub mod solver;
mod tests;
pub mod traverse;
#[cfg(feature = "wasm")]
pub mod wasm;
