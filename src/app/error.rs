use thiserror::Error;

use crate::graph::GraphError;
use crate::grid::GridError;
use crate::path::PathError;

// Application-level error. Anything that reaches `main` ends the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Grid loading error: {0}")]
    Grid(#[from] GridError),
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("DOT formatting error: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Path search error: {0}")]
    Path(#[from] PathError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
