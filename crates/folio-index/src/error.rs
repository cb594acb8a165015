//! Error types for folio-index.

/// Errors that can occur while loading, indexing, or retrieving documents.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// IO error reading source files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file exceeds the configured size limit.
    #[error("file too large: {0} bytes")]
    FileTooLarge(u64),

    /// Input file is not valid UTF-8 text.
    #[error("not valid UTF-8: {path}")]
    InvalidUtf8 { path: String },

    /// Index store error.
    #[error("store error: {0}")]
    Store(String),
}

/// Result type alias using `IndexError`.
pub type Result<T> = std::result::Result<T, IndexError>;
