//! Flat-file persistence layer for goldmon.
//!
//! One logical entity per store: the latest observation, the bounded
//! rate history, the hourly/daily report markers, and the write-only
//! run summary. Every write is atomic (serialize to `<file>.tmp`, then
//! rename) so a crash mid-run never leaves a partially written record
//! for the next invocation. Unreadable or corrupt files are recovered
//! as empty state with a warning, never a crash.

pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{Result, StorageError};
pub use store::history::{HistoryStore, RateHistory};
pub use store::latest::LatestStore;
pub use store::marker::MarkerStore;
pub use store::summary::{ActiveThresholds, FeatureFlags, RunSummary, SummaryStore};
