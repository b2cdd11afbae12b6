use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use goldmon_common::Observation;

use crate::error::Result;
use crate::store::write_atomic;

/// File-backed store for the bounded observation history
/// (`rate_history.json`).
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    cap: usize,
}

impl HistoryStore {
    pub fn new(data_dir: &Path, cap: usize) -> Self {
        Self {
            path: data_dir.join("rate_history.json"),
            cap,
        }
    }

    /// Loads the history as of the start of the run. Missing or corrupt
    /// files are recovered as an empty history (with a warning for the
    /// corrupt case); the run must never crash on bad stored state.
    pub fn load(&self) -> RateHistory {
        let entries = match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(error) => {
                    tracing::warn!(path = %self.path.display(), %error, "corrupt history, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        RateHistory {
            entries,
            cap: self.cap,
        }
    }

    pub fn save(&self, history: &RateHistory) -> Result<()> {
        let json = serde_json::to_string_pretty(&history.entries)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

/// In-memory view of the observation history for one run.
///
/// Insertion order is chronological; an out-of-order timestamp is
/// appended as-is and never re-sorted, since ordering is guaranteed by
/// single-writer sequential invocation rather than timestamp
/// comparison.
#[derive(Debug, Clone)]
pub struct RateHistory {
    entries: Vec<Observation>,
    cap: usize,
}

impl RateHistory {
    /// Empty history with the given retention cap, for bootstrapping
    /// and tests.
    pub fn empty(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Appends to the end, then evicts from the front until the length
    /// is within the retention cap.
    pub fn append(&mut self, observation: Observation) {
        self.entries.push(observation);
        if self.entries.len() > self.cap {
            let excess = self.entries.len() - self.cap;
            self.entries.drain(..excess);
        }
    }

    /// All entries observed within the trailing `duration` from `now`,
    /// in chronological order.
    pub fn window(&self, now: DateTime<Utc>, duration: Duration) -> &[Observation] {
        let cutoff = now - duration;
        let start = self
            .entries
            .iter()
            .position(|obs| obs.observed_at >= cutoff)
            .unwrap_or(self.entries.len());
        &self.entries[start..]
    }

    /// The last `n` entries, in chronological order.
    pub fn tail(&self, n: usize) -> &[Observation] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[Observation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
