use std::path::PathBuf;

use modforge_xml_mapping::MappingError;
use thiserror::Error;

/// Error types for loading, saving and comparing configuration documents.
#[derive(Error, Debug)]
pub enum SerdeError {
    /// Malformed XML text, with the 1-based position where parsing stopped.
    #[error("XML parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A path passed to a file-based loader does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A required input was empty.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// The document root does not match the model being loaded.
    #[error("unexpected root element <{found}>, expected <{expected}>")]
    RootMismatch {
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// XML writer failure.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking task running a load or save did not complete.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SerdeError>;
