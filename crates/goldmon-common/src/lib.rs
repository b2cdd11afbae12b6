//! Shared types for the goldmon tracker.
//!
//! Defines the observation record persisted by every run, the market
//! period/priority enumerations used by the alert classifier, and the
//! [`calendar::MarketCalendar`] that stamps each run with its market
//! context.

pub mod calendar;
pub mod types;

pub use calendar::{CalendarConfig, ClockError, MarketCalendar};
pub use types::{
    AlertDecision, AlertKind, Direction, Magnitude, MarketContext, MarketPeriod, Observation,
    Priority, Reversal, TrendReport,
};
