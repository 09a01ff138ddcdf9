//! Formprobe Domain - Core types
//!
//! This crate defines the domain model for probing a contact form endpoint:
//! form fields, expected outcomes, case descriptors, classification and
//! suite results. All types here are pure Rust with no I/O dependencies.

pub mod case;
pub mod error;
pub mod expectation;
pub mod form;
pub mod outcome;
pub mod response;
pub mod results;
pub mod target;

pub use case::{TestCase, contact_suite, unique_email};
pub use error::{DomainError, DomainResult};
pub use expectation::{ErrorCode, Expectation, SUCCESS_MARKER};
pub use form::{FormField, FormFields};
pub use outcome::CaseOutcome;
pub use response::{FormResponse, StatusCode};
pub use results::SuiteResults;
pub use target::{CONTACT_ENDPOINT, DEFAULT_BASE_URL, ProbeTarget};
