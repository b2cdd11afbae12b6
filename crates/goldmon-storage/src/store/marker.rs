use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::write_atomic;

/// Single-token marker file used to make periodic reports idempotent:
/// the hourly marker holds a `YYYY-MM-DD-HH` key, the daily marker a
/// `YYYY-MM-DD` key.
#[derive(Debug, Clone)]
pub struct MarkerStore {
    path: PathBuf,
}

impl MarkerStore {
    pub fn hourly(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("last_hourly.txt"),
        }
    }

    pub fn daily(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("last_daily.txt"),
        }
    }

    pub fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn save(&self, key: &str) -> Result<()> {
        write_atomic(&self.path, key.as_bytes())
    }
}
