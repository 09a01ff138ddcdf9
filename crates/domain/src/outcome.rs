//! Case outcome classification

use std::fmt;

use crate::expectation::Expectation;
use crate::response::{FormResponse, StatusCode};

/// Why a single case passed or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The redirect target matched the expectation.
    Passed,
    /// The server redirected, but not to the expected target.
    UnexpectedRedirect {
        /// The `Location` value received (empty if the header was missing).
        location: String,
    },
    /// The server answered with something other than 301/302/303.
    UnexpectedStatus {
        /// The status received.
        status: StatusCode,
    },
    /// No connection could be made to the server.
    ConnectionFailed {
        /// Transport error description.
        message: String,
    },
    /// Any other transport-level failure.
    TransportFailed {
        /// Transport error description.
        message: String,
    },
}

impl CaseOutcome {
    /// Classifies a received response against an expectation.
    ///
    /// Transport failures never reach this function; they are mapped to
    /// [`CaseOutcome::ConnectionFailed`] or [`CaseOutcome::TransportFailed`]
    /// by the caller.
    #[must_use]
    pub fn classify(expectation: &Expectation, response: &FormResponse) -> Self {
        if !response.status.is_form_redirect() {
            return Self::UnexpectedStatus {
                status: response.status,
            };
        }

        let location = response.location_or_empty();
        if expectation.is_met_by(location) {
            Self::Passed
        } else {
            Self::UnexpectedRedirect {
                location: location.to_string(),
            }
        }
    }

    /// Returns true only for [`CaseOutcome::Passed`].
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("passed"),
            Self::UnexpectedRedirect { location } => {
                write!(f, "unexpected redirect to '{location}'")
            }
            Self::UnexpectedStatus { status } => {
                write!(f, "expected redirect, got {}", status.as_u16())
            }
            Self::ConnectionFailed { message } => write!(f, "connection failed: {message}"),
            Self::TransportFailed { message } => write!(f, "request failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectation::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matching_error_redirect_passes() {
        let expectation = Expectation::Error(ErrorCode::Missing);
        let response = FormResponse::redirect(302u16, "index.html?error=missing");
        assert_eq!(CaseOutcome::classify(&expectation, &response), CaseOutcome::Passed);
    }

    #[test]
    fn test_success_redirect_passes_with_303() {
        let response = FormResponse::redirect(303u16, "/index.html?success=true");
        assert!(CaseOutcome::classify(&Expectation::Success, &response).passed());
    }

    #[test]
    fn test_wrong_error_code_is_unexpected_redirect() {
        let expectation = Expectation::Error(ErrorCode::Spam);
        let response = FormResponse::redirect(301u16, "index.html?error=rate_limit");
        assert_eq!(
            CaseOutcome::classify(&expectation, &response),
            CaseOutcome::UnexpectedRedirect {
                location: "index.html?error=rate_limit".to_string()
            }
        );
    }

    #[test]
    fn test_redirect_without_location_fails() {
        let outcome = CaseOutcome::classify(&Expectation::Success, &FormResponse::new(302u16));
        assert_eq!(
            outcome,
            CaseOutcome::UnexpectedRedirect {
                location: String::new()
            }
        );
    }

    #[test]
    fn test_non_redirect_status_fails_even_with_location() {
        let expectation = Expectation::Error(ErrorCode::Missing);
        for status in [200u16, 307, 308, 500] {
            let response = FormResponse::redirect(status, "index.html?error=missing");
            assert_eq!(
                CaseOutcome::classify(&expectation, &response),
                CaseOutcome::UnexpectedStatus {
                    status: StatusCode::new(status)
                }
            );
        }
    }

    #[test]
    fn test_only_passed_counts_as_pass() {
        assert!(CaseOutcome::Passed.passed());
        assert!(
            !CaseOutcome::ConnectionFailed {
                message: "refused".to_string()
            }
            .passed()
        );
        assert!(
            !CaseOutcome::TransportFailed {
                message: "timeout".to_string()
            }
            .passed()
        );
    }
}
