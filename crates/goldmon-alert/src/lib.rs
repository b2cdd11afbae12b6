//! Change-detection engine: period-aware threshold resolution, the
//! ordered alert decision list, and periodic trend reports.
//!
//! The classifier is evaluated once per run against the previous
//! observation and a short history tail; the first matching rule wins
//! and later rules are not evaluated. Rule families (main threshold,
//! micro, rapid movement, trend reversal, stability) are therefore
//! mutually exclusive by construction.

pub mod classifier;
pub mod config;
pub mod report;
pub mod thresholds;


pub use classifier::classify;
pub use config::{AlertConfig, ReportConfig, ThresholdConfig};
pub use thresholds::ThresholdSet;
