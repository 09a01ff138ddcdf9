//! Wall clock adapter

use chrono::{DateTime, Utc};
use formprobe_application::Clock;

/// Reads the host's wall clock. The run token is the Unix time in seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates the clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn unique_token(&self) -> i64 {
        Utc::now().timestamp()
    }
}
