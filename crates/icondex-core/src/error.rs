//! Error types for icondex.

use thiserror::Error;

/// icondex error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error(
        "catalog not found at {}. Generate icons.json and pass --catalog or set catalog_path",
        .0.display()
    )]
    CatalogNotFound(std::path::PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for icondex operations.
pub type Result<T> = std::result::Result<T, Error>;
