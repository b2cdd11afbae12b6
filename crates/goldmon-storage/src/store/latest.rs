use std::path::{Path, PathBuf};

use goldmon_common::Observation;

use crate::error::Result;
use crate::store::write_atomic;

/// Single-record store for the most recent observation
/// (`latest_rate.json`). Overwritten on every successful run.
#[derive(Debug, Clone)]
pub struct LatestStore {
    path: PathBuf,
}

impl LatestStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("latest_rate.json"),
        }
    }

    /// Loads the latest observation. A missing file means a first run;
    /// a corrupt file is treated the same way, with a warning.
    pub fn load(&self) -> Option<Observation> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(obs) => Some(obs),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "corrupt latest record, treating as first run");
                None
            }
        }
    }

    pub fn save(&self, observation: &Observation) -> Result<()> {
        let json = serde_json::to_string_pretty(observation)?;
        write_atomic(&self.path, json.as_bytes())
    }
}
