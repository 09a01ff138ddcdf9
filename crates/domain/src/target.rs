//! Probe target

use std::fmt;

/// Base URL used when none is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Path of the contact form handler, relative to the base URL.
pub const CONTACT_ENDPOINT: &str = "contact.php";

/// Base URL of the site under test.
///
/// Not validated here. A base URL the HTTP client cannot use fails each
/// case at send time, so the suite still completes and prints a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    base_url: String,
}

impl ProbeTarget {
    /// Creates a target from a base URL as given by the operator.
    ///
    /// Surrounding whitespace and trailing slashes are dropped.
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    /// The base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the contact endpoint.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("{}/{CONTACT_ENDPOINT}", self.base_url)
    }
}

impl Default for ProbeTarget {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_target() {
        let target = ProbeTarget::default();
        assert_eq!(target.endpoint_url(), "http://localhost/contact.php");
    }

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        let target = ProbeTarget::new("https://www.example.co.za/");
        assert_eq!(target.endpoint_url(), "https://www.example.co.za/contact.php");
    }

    #[test]
    fn test_subdirectory_base() {
        let target = ProbeTarget::new(" http://127.0.0.1:8080/site ");
        assert_eq!(target.endpoint_url(), "http://127.0.0.1:8080/site/contact.php");
    }

    #[test]
    fn test_unusable_base_is_kept_verbatim() {
        assert_eq!(
            ProbeTarget::new("localhost:8000").endpoint_url(),
            "localhost:8000/contact.php"
        );
        assert_eq!(ProbeTarget::new("ftp://example.com").base_url(), "ftp://example.com");
    }
}
