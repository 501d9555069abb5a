use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
