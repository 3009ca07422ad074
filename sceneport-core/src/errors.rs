use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("destination is not writable: {0}")]
    DestinationUnavailable(PathBuf),

    #[error("markup document is malformed: {0}")]
    MarkupState(String),

    #[error("scene graph is malformed: {0}")]
    MalformedScene(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine error: {0}")]
    Engine(#[from] anyhow::Error),
}
