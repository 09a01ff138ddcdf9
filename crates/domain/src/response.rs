//! Response types
//!
//! The probe only reads two things from a response: the status code and
//! the `Location` header.

use std::fmt;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true for the redirects a form handler answers a POST with.
    ///
    /// Only 301, 302 and 303 count. 307 and 308 re-send the POST body and
    /// are not used for post-redirect-get.
    #[must_use]
    pub const fn is_form_redirect(&self) -> bool {
        matches!(self.0, 301..=303)
    }

    /// Returns the canonical reason phrase for common status codes.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            301 => "Moved Permanently",
            302 => "Found",
            303 => "See Other",
            307 => "Temporary Redirect",
            308 => "Permanent Redirect",
            400 => "Bad Request",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// The parts of a contact form response the probe inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw `Location` header value, if the server sent one.
    pub location: Option<String>,
}

impl FormResponse {
    /// Creates a response without a `Location` header.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>) -> Self {
        Self {
            status: status.into(),
            location: None,
        }
    }

    /// Creates a redirect response pointing at `location`.
    #[must_use]
    pub fn redirect(status: impl Into<StatusCode>, location: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            location: Some(location.into()),
        }
    }

    /// Returns the `Location` value, or an empty string when absent.
    #[must_use]
    pub fn location_or_empty(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }
}
