use std::num::NonZero;

use ndarray::Ix;

pub type Coord = usize;
/// A nonzero board extent along one axis.
pub type Dimension = NonZero<Coord>;

/// A position on the source grid, in `(x, y)` order: `x` is the column and `y` the row.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The `(row, column)` index of this location in an [`ndarray::Array2`].
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.1, self.0)
    }

    /// Offset this location, wrapping on underflow so that stepping off the top or left edge lands far out of bounds.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
