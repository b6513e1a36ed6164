//! Error type shared by the library and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Only plain `.txt` files are accepted.
    #[error("Unsupported file type: {} (expected a .txt file)", .0.display())]
    UnsupportedType(PathBuf),

    /// The upload is not valid UTF-8.
    #[error("File is not valid UTF-8 text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Stop-word list or lexicons could not be loaded. Fatal at setup.
    #[error("Language resources unavailable: {0}")]
    Resources(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Process exit code: 2 for setup failures, 1 for everything tied to a single document.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Resources(_) => 2,
            _ => 1,
        }
    }
}
