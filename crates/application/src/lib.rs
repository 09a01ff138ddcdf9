//! Formprobe Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (form client, clock, confirmation, reporting)
//! - The single-case probe and the suite runner
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod probe_case;
pub mod run_suite;

#[cfg(test)]
mod mocks;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, Confirm, FormClient, FormClientError, FormRequest, Reporter};
pub use probe_case::{CaseRun, DEFAULT_TIMEOUT, ProbeCase};
pub use run_suite::{RunSuite, START_PROMPT};
