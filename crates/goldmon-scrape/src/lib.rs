//! Fetching and extraction of the gold rate.
//!
//! The run consumes these as capabilities: fetch a page with a bounded
//! timeout, locate the 24K rate in the markup, and validate the raw
//! number into a stamped [`goldmon_common::Observation`]. Implausible
//! values are rejected even when extraction succeeded, so a mis-parsed
//! page can never corrupt the stored series.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use error::ScrapeError;
pub use fetch::{HttpFetcher, PageFetcher};

/// Source URL, plausible rate band, and fetch bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Lowest rate (rupees per gram) accepted as plausible.
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,
    /// Highest rate accepted as plausible.
    #[serde(default = "default_max_rate")]
    pub max_rate: f64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_url() -> String {
    "https://www.goodreturns.in/gold-rates/kerala.html".to_string()
}
fn default_min_rate() -> f64 {
    3000.0
}
fn default_max_rate() -> f64 {
    10000.0
}
fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}
