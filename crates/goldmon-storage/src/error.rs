use std::path::PathBuf;

/// Errors raised by the storage layer.
///
/// Read-side corruption is deliberately absent: corrupt store files are
/// recovered as empty state by the individual stores (see crate docs),
/// so only write failures and serialization surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage: io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage: json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
