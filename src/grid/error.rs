use thiserror::Error;

use crate::graph::GraphError;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for grid loading operations.
/// Every variant is fatal for the application: no partially loaded graph is
/// kept around.
#[derive(Error, Debug)]
pub enum GridError {
    /// Error when reading the grid file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the input holds no rows at all.
    #[error("The grid contains no rows")]
    Empty,

    /// Error when a cell is not an integer.
    #[error("Invalid cell '{cell}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, cell: String },

    /// Error when a row does not have as many cells as the first one.
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Error when the graph refuses a vertex or an edge.
    #[error("Failed to build graph from grid: {0}")]
    Graph(#[from] GraphError),
}
