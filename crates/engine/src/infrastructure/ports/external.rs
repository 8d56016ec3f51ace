//! Ports for services outside the process.

use chrono::{DateTime, Utc};

/// Wall-clock time, injectable for tests.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
