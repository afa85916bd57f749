//! Breadth-first walks outward from a single vertex, stopping at vertices a [`Traversal`] does not admit.
//!
//! [`taint`] (the flood move) and [`survey`] (the win check) are the two walks built on this.

use std::collections::VecDeque;

use petgraph::visit::{VisitMap, Visitable};

use crate::color::Color;
use crate::graph::{Graph, VertexId};

/// What happens while walking: which vertices may be entered, and what to do on entering or being refused.
trait Traversal {
    fn admits(&self, vertex: VertexId) -> bool;
    fn on_visit(&mut self, vertex: VertexId);
    fn on_rejected_crossing(&mut self, _from: VertexId, _to: VertexId) {}
}

/// Visit `origin` unconditionally, then every vertex reachable through admitted vertices, each at most once.
///
/// A refused neighbour is not marked, so it is reported again from every visited vertex adjacent to it.
fn walk<T: Traversal>(graph: &Graph, origin: VertexId, traversal: &mut T) {
    if origin >= graph.vertex_count() {
        return;
    }

    let mut visited = graph.visit_map();
    let mut queue = VecDeque::with_capacity(graph.vertex_count());

    visited.visit(origin);
    traversal.on_visit(origin);
    queue.push_back(origin);

    while let Some(v) = queue.pop_front() {
        for &w in graph.neighbors(v) {
            if visited.is_visited(&w) {
                continue;
            }

            if traversal.admits(w) {
                visited.visit(w);
                traversal.on_visit(w);
                queue.push_back(w);
            } else {
                traversal.on_rejected_crossing(v, w);
            }
        }
    }
}

struct Taint<'a, C: Color> {
    colors: &'a mut [C],
    source: &'a C,
    destination: &'a C,
}

impl<C: Color> Traversal for Taint<'_, C> {
    fn admits(&self, vertex: VertexId) -> bool {
        self.colors.get(vertex) == Some(self.source)
    }

    fn on_visit(&mut self, vertex: VertexId) {
        if let Some(color) = self.colors.get_mut(vertex) {
            *color = self.destination.clone();
        }
    }
}

/// Flood from `origin`: recolor it to `destination`, then recolor every vertex joined to it by an unbroken chain of `source`-colored vertices.
///
/// `source` is fixed for the whole call, so exactly one previously contiguous blob is painted.
/// All other vertices are left as they were. `colors` is indexed by vertex id.
pub fn taint<C: Color>(graph: &Graph, colors: &mut [C], origin: VertexId, source: &C, destination: &C) {
    walk(graph, origin, &mut Taint { colors, source, destination });
}

/// The findings of a [`survey`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Survey {
    /// Vertices reached from the origin, the origin included.
    pub reached: usize,
    /// Some reached vertex borders a vertex of another color.
    pub mismatched: bool,
    /// Every vertex of the graph has the target color.
    pub uniform: bool,
}

impl Survey {
    /// The board counts as won only with no mismatch and a uniform color.
    pub fn passed(&self) -> bool {
        !self.mismatched && self.uniform
    }
}

struct Scan<'a, C: Color> {
    colors: &'a [C],
    target: &'a C,
    reached: usize,
    mismatched: bool,
}

impl<C: Color> Traversal for Scan<'_, C> {
    fn admits(&self, vertex: VertexId) -> bool {
        self.colors.get(vertex) == Some(self.target)
    }

    fn on_visit(&mut self, _vertex: VertexId) {
        self.reached += 1;
    }

    fn on_rejected_crossing(&mut self, _from: VertexId, _to: VertexId) {
        self.mismatched = true;
    }
}

/// Walk the `target`-colored region around `origin` without recoloring anything.
pub fn survey<C: Color>(graph: &Graph, colors: &[C], origin: VertexId, target: &C) -> Survey {
    let mut scan = Scan { colors, target, reached: 0, mismatched: false };
    walk(graph, origin, &mut scan);

    let uniform = colors.len() >= graph.vertex_count()
        && colors[..graph.vertex_count()].iter().all(|color| color == target);

    Survey {
        reached: scan.reached,
        mismatched: scan.mismatched,
        uniform,
    }
}

/// Whether the board is entirely `target`; see [`Survey::passed`].
pub fn is_unified<C: Color>(graph: &Graph, colors: &[C], origin: VertexId, target: &C) -> bool {
    survey(graph, colors, origin, target).passed()
}
