//! Expected outcomes for a contact form submission
//!
//! The endpoint signals its decision through the query string of the
//! redirect target: `success=true` or `error=<code>`.

use std::fmt;
use std::str::FromStr;

/// Error codes the contact endpoint redirects with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// One or more required fields were empty.
    Missing,
    /// The email field failed validation.
    InvalidEmail,
    /// The honeypot field was filled in.
    Spam,
    /// Too many submissions from the same address.
    RateLimit,
    /// The server accepted the form but could not send mail.
    SendFailed,
    /// Any code this tool does not know by name.
    Other(String),
}

impl ErrorCode {
    /// Returns the code as it appears in `error=<code>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Missing => "missing",
            Self::InvalidEmail => "invalid_email",
            Self::Spam => "spam",
            Self::RateLimit => "rate_limit",
            Self::SendFailed => "send_failed",
            Self::Other(code) => code,
        }
    }

    /// Returns the literal marker searched for in the redirect location.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("error={}", self.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "missing" => Self::Missing,
            "invalid_email" => Self::InvalidEmail,
            "spam" => Self::Spam,
            "rate_limit" => Self::RateLimit,
            "send_failed" => Self::SendFailed,
            other => Self::Other(other.to_string()),
        })
    }
}

/// Marker present in the redirect location of an accepted submission.
pub const SUCCESS_MARKER: &str = "success=true";

/// What a test case expects the endpoint to answer.
///
/// Exactly one expectation per case: either the submission is accepted,
/// or it is rejected with a specific error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Redirect location contains `success=true`.
    Success,
    /// Redirect location contains `error=<code>`.
    Error(ErrorCode),
}

impl Expectation {
    /// Returns true if the redirect location satisfies this expectation.
    ///
    /// Matching is a plain substring search, so `error=spam` also matches
    /// `error=spammy`.
    #[must_use]
    pub fn is_met_by(&self, location: &str) -> bool {
        match self {
            Self::Success => location.contains(SUCCESS_MARKER),
            Self::Error(code) => location.contains(&code.marker()),
        }
    }

    /// Returns a short description for report output.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Success => "form accepted".to_string(),
            Self::Error(code) => format!("error {code}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trips_known_codes() {
        for code in ["missing", "invalid_email", "spam", "rate_limit", "send_failed"] {
            let Ok(parsed) = code.parse::<ErrorCode>();
            assert_eq!(parsed.as_str(), code);
            assert!(!matches!(parsed, ErrorCode::Other(_)));
        }
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let Ok(parsed) = "captcha".parse::<ErrorCode>();
        assert_eq!(parsed, ErrorCode::Other("captcha".to_string()));
        assert_eq!(parsed.marker(), "error=captcha");
    }

    #[test]
    fn test_success_expectation() {
        let expectation = Expectation::Success;
        assert!(expectation.is_met_by("index.html?success=true"));
        assert!(!expectation.is_met_by("index.html?error=missing"));
        assert!(!expectation.is_met_by(""));
    }

    #[test]
    fn test_error_expectation_requires_exact_code() {
        let expectation = Expectation::Error(ErrorCode::InvalidEmail);
        assert!(expectation.is_met_by("https://example.com/index.html?error=invalid_email"));
        assert!(!expectation.is_met_by("index.html?error=missing"));
        assert!(!expectation.is_met_by("index.html?success=true"));
    }

    #[test]
    fn test_success_location_does_not_satisfy_error() {
        let expectation = Expectation::Error(ErrorCode::Spam);
        assert!(!expectation.is_met_by("index.html?success=true"));
    }
}
