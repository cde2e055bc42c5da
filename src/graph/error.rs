use std::collections::TryReserveError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph store operations.
///
/// `InvalidIndex` and `EdgeNotFound` are soft failures: the graph is left
/// untouched and the caller may retry. The remaining variants are resource
/// failures that the application treats as fatal.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex index outside `[0, len)` was supplied.
    #[error("Invalid index {index}: the graph has {len} vertices")]
    InvalidIndex { index: usize, len: usize },

    /// `remove_edge` found no adjacency entry pointing at the target.
    #[error("No edge found from vertex {from} to vertex {to}")]
    EdgeNotFound { from: usize, to: usize },

    /// A graph was requested with a starting capacity of zero.
    #[error("Initial graph capacity must be at least 1")]
    ZeroCapacity,

    /// Growing the vertex storage failed.
    #[error("Failed to reserve memory for vertices: {0}")]
    Allocation(#[from] TryReserveError),
}

impl GraphError {
    /// Returns `true` for failures that leave no sensible way to continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GraphError::ZeroCapacity | GraphError::Allocation(_))
    }
}
