//! Time source for default-factory timestamps
//!
//! Records such as [`EmailDraft`](crate::EmailDraft) stamp `created_at` when the
//! caller leaves it out. The stamp comes from a [`Clock`] so tests can pin it.

use chrono::{DateTime, Utc};

/// Source of the current instant
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current time in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via [`Utc::now`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use data_models::{Clock, FixedClock};
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(FixedClock::new(at).now(), at);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Freeze the clock at `at`
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
