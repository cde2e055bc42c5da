//! Grid-derived directed graphs with interactive editing and exhaustive
//! best-sum path search.
//!
//! - `graph`: the vertex store with id renumbering and cascading edge cleanup
//! - `path`: backtracking searches (best-sum path, all simple paths)
//! - `grid`: matrix file parsing into grid graphs
//! - `export`: DOT rendering with an optional highlighted path
//! - `app`: command line, interactive menu and logging

pub mod app;
pub mod export;
pub mod graph;
pub mod grid;
pub mod path;
