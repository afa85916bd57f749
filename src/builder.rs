use std::ops::IndexMut;

use log::debug;
use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::cell::Dot;
use crate::color::Color;
use crate::graph::{Graph, GraphError, VertexId};
use crate::location::{Dimension, Location};
use crate::puzzle::Puzzle;
use crate::shape::{SquareStep, Step};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// An edit referred to a location outside the grid.
    FeatureOutOfBounds,
}

/// Reasons [`GridBuilder::build`] may fail.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BuildError {
    #[error("builder is invalid: {0:?}")]
    Invalid(Vec<BuilderInvalidReason>),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A builder for puzzles on a rectangular grid of optional colored cells.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct GridBuilder<C: Color> {
    // [y][x]; None is a hole
    cells: Array2<Option<C>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl<C: Color> GridBuilder<C> {
    /// Construct a new builder with every location absent, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), None),
            invalid_reasons: Default::default(),
        }
    }

    /// Construct a builder from rows of cells, `rows[y][x]`.
    ///
    /// Rows may differ in length; the grid is as wide as the longest row and shorter rows are absent past their end.
    pub fn from_rows(rows: Vec<Vec<Option<C>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        Self {
            cells: Array2::from_shape_fn((rows.len(), width), |(y, x)| rows[y].get(x).cloned().flatten()),
            invalid_reasons: Default::default(),
        }
    }

    #[inline]
    fn in_bounds(&self, location: Location) -> bool {
        self.cells.get(location.as_index()).is_some()
    }

    /// `(width, height)` of the grid.
    pub fn dims(&self) -> (usize, usize) {
        let (height, width) = self.cells.dim();
        (width, height)
    }

    /// Place a cell of `color` at `location`, replacing whatever is there.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set_color(&mut self, location: Location, color: C) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Some(color));
        self
    }

    /// Drop a location from the board, leaving a hole.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn drop_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(None);
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Puzzle`].
    ///
    /// Present cells are numbered in row-major order, so the first present cell of row 0 becomes the [origin](crate::puzzle::ORIGIN).
    /// Each cell is joined to its right and lower neighbours when those are present.
    pub fn build(&self) -> Result<Puzzle<C>, BuildError> {
        if !self.invalid_reasons.is_empty() {
            return Err(BuildError::Invalid(self.invalid_reasons.clone()));
        }

        let mut ids: Array2<Option<VertexId>> = Array2::from_elem(self.cells.raw_dim(), None);
        let mut dots = Vec::with_capacity(self.cells.len());

        // indexed_iter walks in logical (row-major) order
        for (index, cell) in self.cells.indexed_iter() {
            if let Some(color) = cell {
                let id = dots.len();
                ids.index_mut(index).assign_elem(Some(id));
                dots.push(Dot { index: id, color: color.clone(), location: Location::from(index) });
            }
        }

        let mut graph = Graph::new(dots.len());
        for dot in dots.iter() {
            // add edges to the right and down, if possible
            for step in SquareStep::FORWARD_VARIANTS {
                if let Some(Some(other)) = ids.get(step.attempt_from(dot.location).as_index()) {
                    graph.add_edge(dot.index, *other)?;
                }
            }
        }

        debug!("built puzzle with {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        Ok(Puzzle {
            dots,
            graph,
            dims: self.dims(),
        })
    }
}
