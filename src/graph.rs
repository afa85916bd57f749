use std::collections::HashSet;
use std::iter::Copied;
use std::slice::Iter;

use itertools::Itertools;
use petgraph::visit::{GraphBase, IntoNeighbors, NodeCount, NodeIndexable, Visitable};
use thiserror::Error;
use unordered_pair::UnorderedPair;

/// Dense vertex identity, in `0..vertex_count`.
pub type VertexId = usize;

/// Reasons a [`Graph`] may refuse an edit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum GraphError {
    /// An endpoint of an edge is not a vertex of this graph.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },
}

/// An undirected, append-only adjacency-list graph over a fixed number of vertices.
///
/// Neighbour lists keep insertion order, which is the order traversals visit them in.
/// The graph also implements the [`petgraph::visit`] traits, so petgraph's walkers such as [`Bfs`](petgraph::visit::Bfs) accept `&Graph`.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: Vec<Vec<VertexId>>,
    edges: Vec<UnorderedPair<VertexId>>,
}

impl Graph {
    /// A graph of `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of [`add_edge`](Self::add_edge) calls that succeeded.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn check(&self, vertex: VertexId) -> Result<(), GraphError> {
        match vertex < self.vertex_count() {
            true => Ok(()),
            false => Err(GraphError::VertexOutOfRange { vertex, vertex_count: self.vertex_count() }),
        }
    }

    /// Connect `v` and `w`, appending each to the other's neighbour list.
    ///
    /// Both endpoints are checked before anything is inserted, so a failed call leaves the graph untouched.
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> Result<(), GraphError> {
        self.check(v)?;
        self.check(w)?;

        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
        self.edges.push(UnorderedPair(v, w));
        Ok(())
    }

    /// The neighbours of `v` in insertion order. Empty if `v` is not a vertex.
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every edge once, in insertion order.
    pub fn edges(&self) -> &[UnorderedPair<VertexId>] {
        &self.edges
    }

    /// Vertex degrees, indexed by vertex id.
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect_vec()
    }
}

impl GraphBase for Graph {
    // position in `edges`
    type EdgeId = usize;
    type NodeId = VertexId;
}

impl NodeCount for Graph {
    fn node_count(&self) -> usize {
        self.vertex_count()
    }
}

impl NodeIndexable for Graph {
    fn node_bound(&self) -> usize {
        self.vertex_count()
    }

    fn to_index(&self, a: VertexId) -> usize {
        a
    }

    fn from_index(&self, i: usize) -> VertexId {
        i
    }
}

impl Visitable for Graph {
    type Map = HashSet<VertexId>;

    fn visit_map(&self) -> Self::Map {
        HashSet::with_capacity(self.vertex_count())
    }

    fn reset_map(&self, map: &mut Self::Map) {
        map.clear();
    }
}

impl<'a> IntoNeighbors for &'a Graph {
    type Neighbors = Copied<Iter<'a, VertexId>>;

    fn neighbors(self, a: VertexId) -> Self::Neighbors {
        Graph::neighbors(self, a).iter().copied()
    }
}
