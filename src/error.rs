//! Error types for pattern generation

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown pattern '{name}' (available: {})", .available.join(", "))]
    UnknownPattern { name: String, available: Vec<String> },
}
