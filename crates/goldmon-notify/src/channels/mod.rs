pub mod ntfy;
pub mod pushover;
pub mod telegram;

use std::time::Duration;

/// Every provider call is bounded; a stalled provider must not hold up
/// the remaining channels or the run.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
