// error module
mod error;
// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the explorer module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use explorer::{BestPath, FoundPath, PathExplorer};
