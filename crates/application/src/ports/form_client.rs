//! Form client port

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use formprobe_domain::{FormFields, FormResponse};
use thiserror::Error;

/// A form-url-encoded POST to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// Absolute endpoint URL.
    pub url: String,
    /// Fields to encode into the body.
    pub fields: FormFields,
    /// Upper bound on the whole exchange.
    pub timeout: Duration,
}

impl FormRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(url: impl Into<String>, fields: FormFields, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            fields,
            timeout,
        }
    }
}

/// Transport-level failures of a form POST.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormClientError {
    /// No connection could be established (refused, DNS, unreachable).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The exchange did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The endpoint URL could not be used.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The form body could not be encoded.
    #[error("invalid form body: {0}")]
    InvalidBody(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

impl FormClientError {
    /// Returns true if the server could not be reached at all.
    #[must_use]
    pub const fn is_connection_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_))
    }
}

/// Port for posting a form without following redirects.
///
/// Implementations must return 3xx responses as-is so the caller can read
/// the `Location` header.
pub trait FormClient: Send + Sync {
    /// Sends the form and returns the first response received.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed at the
    /// transport level. HTTP error statuses are not errors.
    fn post_form<'a>(
        &'a self,
        request: &'a FormRequest,
    ) -> Pin<Box<dyn Future<Output = Result<FormResponse, FormClientError>> + Send + 'a>>;
}
