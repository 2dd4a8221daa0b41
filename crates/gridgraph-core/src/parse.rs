//! Text to grid parsing.
//!
//! Each line is a row and each character a cell, passed through a caller
//! supplied transform. Blank lines separate grids, so a single grid may not
//! contain one. `\r\n` line endings are accepted and a trailing newline does
//! not add a row.

use std::mem;

use crate::error::BuildError;
use crate::grid::{Grid, GridBuilder};
use crate::lattice::SquareLatticeGraph;

/// Parse a single grid.
///
/// Leading and trailing blank lines are ignored. A blank line between rows
/// is rejected with [`BuildError::BlankLine`]; use [`parse_grids`] for text
/// holding several grids.
pub fn parse_grid<T, F>(text: &str, mut transform: F) -> Result<Grid<T>, BuildError>
where
    F: FnMut(char) -> T,
{
    let mut builder = GridBuilder::new();
    let mut gap = None;
    for (n, line) in text.lines().enumerate() {
        if line.is_empty() {
            if builder.height() > 0 && gap.is_none() {
                gap = Some(n);
            }
            continue;
        }
        if let Some(line) = gap {
            return Err(BuildError::BlankLine { line });
        }
        builder.row(line.chars().map(&mut transform))?;
    }
    Ok(builder.build())
}

/// Parse several grids separated by blank lines.
pub fn parse_grids<T, F>(text: &str, mut transform: F) -> Result<Vec<Grid<T>>, BuildError>
where
    F: FnMut(char) -> T,
{
    let mut grids = Vec::new();
    let mut builder = GridBuilder::new();
    for line in text.lines() {
        if line.is_empty() {
            if builder.height() > 0 {
                grids.push(mem::take(&mut builder).build());
            }
            continue;
        }
        builder.row(line.chars().map(&mut transform))?;
    }
    if builder.height() > 0 {
        grids.push(builder.build());
    }
    Ok(grids)
}

/// Parse a single grid and join grid neighbors with weight-1 edges.
pub fn parse_lattice<T, F>(
    text: &str,
    diagonals: bool,
    transform: F,
) -> Result<SquareLatticeGraph<T>, BuildError>
where
    F: FnMut(char) -> T,
{
    Ok(SquareLatticeGraph::from_grid(
        parse_grid(text, transform)?,
        diagonals,
    ))
}
