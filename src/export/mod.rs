// error module
mod error;
// dot module
mod dot;

pub use dot::{render_png, DotExporter, DOT_TOOL};
pub use error::RenderError;
