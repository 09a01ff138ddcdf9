//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building test cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A test case was built without a name.
    #[error("test case name must not be empty")]
    EmptyCaseName,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
