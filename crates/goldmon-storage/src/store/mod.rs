use std::fs;
use std::path::Path;

use crate::error::{Result, StorageError};

pub mod history;
pub mod latest;
pub mod marker;
pub mod summary;

/// Writes `bytes` to `path` via a temp-file-then-rename so readers
/// never observe a partial write.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).map_err(|source| StorageError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
