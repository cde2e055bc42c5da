// error module
mod error;
// loader module
mod loader;

pub use error::GridError;
pub use loader::{load_grid_from_file, parse_grid, Grid, DEFAULT_DELIMITER};
