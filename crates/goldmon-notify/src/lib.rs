//! Notification delivery for goldmon.
//!
//! Composed messages fan out through zero or more
//! [`NotificationChannel`] implementations (Telegram, Pushover, ntfy).
//! A channel exists only when its credentials were supplied; delivery
//! failures are logged per channel and never block the other channels
//! or the rest of the run. This system does not retry failed
//! deliveries.

pub mod channels;
pub mod dispatcher;
pub mod message;

#[cfg(test)]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use goldmon_common::Priority;

/// A notification delivery channel that pushes a composed message to an
/// external service.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Delivers `message` at the given priority.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider rejects the request or the
    /// bounded per-call timeout elapses.
    async fn send(&self, message: &str, priority: Priority) -> Result<()>;

    /// Channel type name (e.g. `"telegram"`), used in logs and
    /// dispatch outcomes.
    fn name(&self) -> &'static str;
}

pub use dispatcher::{ChannelOutcome, Dispatcher};
pub use message::MessageStyle;
