//! Test case descriptors
//!
//! Each case is plain data: the fields to submit and what the endpoint is
//! expected to answer. The runner consumes them in order through a single
//! generic operation.

use crate::error::{DomainError, DomainResult};
use crate::expectation::{ErrorCode, Expectation};
use crate::form::FormFields;

/// A single contact form probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    description: String,
    fields: FormFields,
    expectation: Expectation,
    skip_by_default: bool,
}

impl TestCase {
    /// Creates a new case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCaseName`] if `name` is blank; the name
    /// keys the case in the suite results.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: FormFields,
        expectation: Expectation,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyCaseName);
        }
        Ok(Self {
            name,
            description: description.into(),
            fields,
            expectation,
            skip_by_default: false,
        })
    }

    /// Marks the case as skipped unless explicitly opted in.
    #[must_use]
    pub fn skipped_by_default(mut self) -> Self {
        self.skip_by_default = true;
        self
    }

    /// Result key for this case.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Form fields to submit.
    #[must_use]
    pub const fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Expected endpoint answer.
    #[must_use]
    pub const fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    /// Whether the case only runs on explicit opt-in.
    #[must_use]
    pub const fn skip_by_default(&self) -> bool {
        self.skip_by_default
    }
}

/// Builds a unique but well-formed email address from a uniqueness token.
#[must_use]
pub fn unique_email(token: i64) -> String {
    format!("test{token}@example.com")
}

/// The fixed contact form suite, in execution order.
///
/// `token` makes generated email addresses distinct between runs. The last
/// case submits a valid form, which makes the server send real email, so
/// it is skipped by default.
///
/// # Errors
///
/// Never fails for the built-in cases; the `Result` comes from
/// [`TestCase::new`].
pub fn contact_suite(token: i64) -> DomainResult<Vec<TestCase>> {
    let email = unique_email(token);

    Ok(vec![
        TestCase::new(
            "missing_fields",
            "Missing required fields",
            FormFields::new()
                .with("name", "")
                .with("company", "")
                .with("email", "")
                .with("message", ""),
            Expectation::Error(ErrorCode::Missing),
        )?,
        TestCase::new(
            "invalid_email",
            "Invalid email format",
            FormFields::new()
                .with("name", "Test User")
                .with("company", "Test Company")
                .with("email", "not-an-email")
                .with("message", "Test message"),
            Expectation::Error(ErrorCode::InvalidEmail),
        )?,
        TestCase::new(
            "honeypot_spam",
            "Honeypot field filled (spam detection)",
            FormFields::new()
                .with("name", "Test User")
                .with("company", "Test Company")
                .with("email", email.clone())
                .with("message", "Test message")
                .with("website", "http://spam.com"),
            Expectation::Error(ErrorCode::Spam),
        )?,
        TestCase::new(
            "valid_submission",
            "Valid form submission",
            FormFields::new()
                .with("name", "Test User")
                .with("company", "Test Company")
                .with("email", email)
                .with("product", "Test Product")
                .with("message", "This is a test submission from formprobe")
                .with("website", ""),
            Expectation::Success,
        )?
        .skipped_by_default(),
    ])
}
