use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::color::ColorCode;
use crate::parse::parse_puzzle;
use crate::puzzle::Puzzle;
use crate::solver::SolverConfig;

/// Solve a puzzle written in the [`parse`](crate::parse) text format.
///
/// Resolves to the winning moves as an array of color codes, or `null` if there is none within `max_steps + 1` moves.
#[wasm_bindgen]
pub fn solve(input: &str, max_steps: usize) -> Result<Option<Array>, JsValue> {
    let config = SolverConfig::with_max_steps(max_steps)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let puzzle: Puzzle<ColorCode> = parse_puzzle(input)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    Ok(puzzle.solve(&config).into_solution().map(|steps| {
        steps.iter()
            .map(|color| JsValue::from_str(color.as_str()))
            .collect::<Array>()
    }))
}
