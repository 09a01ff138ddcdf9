//! Clock port

use chrono::{DateTime, Utc};

/// Source of time for the suite.
///
/// Email addresses in the built-in cases embed `unique_token`, so tests pin
/// it with a fixed clock.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;

    /// A value that differs between runs, used to build distinct emails.
    fn unique_token(&self) -> i64;
}
