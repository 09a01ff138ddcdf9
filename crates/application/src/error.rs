//! Application error types

use std::io;

use formprobe_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Per-case failures never show up here; they are classified into a
/// `CaseOutcome`. These are the failures that stop the whole run.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Asking the operator for confirmation failed.
    #[error("confirmation failed: {0}")]
    Confirm(#[source] io::Error),

    /// Writing the report failed.
    #[error("report output failed: {0}")]
    Report(#[source] io::Error),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
