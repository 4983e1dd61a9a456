use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the command-line front end.
///
/// Rendering itself cannot fail; everything here is I/O or setup.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to encode document as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
