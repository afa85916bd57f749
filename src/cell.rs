use crate::color::Color;
use crate::graph::VertexId;
use crate::location::Location;

/// A present cell of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dot<C: Color> {
    /// Dense vertex id, assigned in row-major order while building.
    pub index: VertexId,
    pub color: C,
    pub location: Location,
}
