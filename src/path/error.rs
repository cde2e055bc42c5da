use thiserror::Error;

// Error type for path search operations.
#[derive(Error, Debug)]
pub enum PathError {
    /// Error when a search endpoint does not name a vertex of the graph.
    #[error("Vertex {index} is out of range for a graph with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    /// Error when emitting a found path to a writer fails.
    #[error("Failed to write path: {0}")]
    Io(#[from] std::io::Error),
}
