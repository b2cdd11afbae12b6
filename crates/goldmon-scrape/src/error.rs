use thiserror::Error;

/// Failures on the path from URL to validated observation. All of them
/// end the run without touching the stores.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("page fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("page fetch returned HTTP {status}")]
    FetchStatus { status: u16 },

    #[error("no recognizable 24K rate found in the page")]
    ExtractionFailed,

    #[error("extracted rate {rate} is outside the plausible band {min}-{max}")]
    OutOfRange { rate: f64, min: f64, max: f64 },
}
