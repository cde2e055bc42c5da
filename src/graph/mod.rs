// error module
mod error;
// store module
mod store;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the store module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use store::{Graph, Vertex, VertexHandle};
