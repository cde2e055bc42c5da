use thiserror::Error;

// Error type for running the external Graphviz renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Error when the `dot` executable could not be started.
    #[error("Failed to run '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Error when `dot` ran but reported failure.
    #[error("'{tool}' exited with {status}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
    },
}
