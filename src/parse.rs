//! Reading puzzles from text.
//!
//! One line per grid row, cells separated by [`DELIMITER`], each cell an optional color token.
//! Blank lines are skipped and the last line read becomes row 0, so the origin is the first cell of the bottom line.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::builder::{BuildError, GridBuilder};
use crate::color::Color;
use crate::puzzle::Puzzle;

pub const DELIMITER: char = ',';

/// The five-row board from the original puzzle, with its hole in the bottom-left.
pub const SAMPLE_PUZZLE: &str = "
gr, pu, gr
tu, bk, tu
bk, pi, bk
pu, bk, pu
  , pu
";

/// Reasons text could not be read as a puzzle.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// Line and column are 1-based and count from the top-left of the input.
    #[error("line {line}, column {column}: cannot read {token:?} as a color: {reason}")]
    MalformedToken { line: usize, column: usize, token: String, reason: String },
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Split `input` into rows of optional colors, `rows[y][x]`, with the last non-blank line as `y = 0`.
pub fn parse_rows<C>(input: &str) -> Result<Vec<Vec<Option<C>>>, ParseError>
where
    C: FromStr,
    C::Err: Display,
{
    let mut rows = Vec::new();

    for (line_index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (column_index, segment) in line.split(DELIMITER).enumerate() {
            let token = segment.trim();
            if token.is_empty() {
                row.push(None);
                continue;
            }

            let color = token.parse::<C>().map_err(|err| ParseError::MalformedToken {
                line: line_index + 1,
                column: column_index + 1,
                token: token.to_owned(),
                reason: err.to_string(),
            })?;
            row.push(Some(color));
        }

        rows.push(row);
    }

    rows.reverse();
    Ok(rows)
}

/// [`parse_rows`] followed by [`GridBuilder::build`].
pub fn parse_puzzle<C>(input: &str) -> Result<Puzzle<C>, ParseError>
where
    C: Color + FromStr,
    C::Err: Display,
{
    Ok(GridBuilder::from_rows(parse_rows(input)?).build()?)
}
