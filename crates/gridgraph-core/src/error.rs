//! Construction-time errors.
//!
//! Queries on built containers never fail; they report absence through
//! `Option` or empty collections. Only builders return [`BuildError`].

use std::fmt;

use crate::vertex::VertexId;

/// Errors that can occur while building a grid or graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A grid row does not match the width set by the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An edge endpoint was not created by this builder.
    UnknownVertex { id: VertexId },
    /// Edge weights must be non-negative.
    NegativeWeight { weight: i32 },
    /// An index passed to a builder is outside the current bounds.
    IndexOutOfBounds { index: usize, len: usize },
    /// Text for a single grid has a blank line between rows.
    BlankLine { line: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} (set by the first row)"
            ),
            Self::UnknownVertex { id } => {
                write!(f, "vertex {id} (owner {}) is not part of this builder", id.owner())
            }
            Self::NegativeWeight { weight } => write!(f, "negative edge weight {weight}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::BlankLine { line } => write!(
                f,
                "blank line {line} splits the grid (use parse_grids for stacked grids)"
            ),
        }
    }
}

impl std::error::Error for BuildError {}
