use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::str::FromStr;

use thiserror::Error;

/// Anything usable as a cell color.
///
/// Colors carry no meaning beyond equality; the solver only ever compares and clones them.
pub trait Color: Clone + Eq + Hash + Debug {}

impl<T> Color for T where T: Clone + Eq + Hash + Debug {}

/// Reasons a token cannot be read as a [`ColorCode`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ColorCodeError {
    #[error("color code is empty")]
    Empty,
    #[error("color code contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A short textual color label such as `gr` or `pu`, as written in puzzle files.
///
/// Codes consist of ASCII alphanumerics, `_` and `-`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ColorCode(String);

impl ColorCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColorCode {
    type Err = ColorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ColorCodeError::Empty);
        }

        match s.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')) {
            Some(bad) => Err(ColorCodeError::InvalidCharacter(bad)),
            None => Ok(Self(s.to_owned())),
        }
    }
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}
