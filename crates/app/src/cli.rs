//! Command line arguments

use std::time::Duration;

use clap::Parser;
use formprobe_application::DEFAULT_TIMEOUT;
use formprobe_domain::{DEFAULT_BASE_URL, ProbeTarget, SuiteResults};

/// Smoke-test a contact form endpoint by posting fixed submissions and
/// checking where it redirects.
#[derive(Debug, Parser)]
#[command(name = "formprobe", version, about)]
pub struct Cli {
    /// Base URL of the site; the form is posted to `<BASE_URL>/contact.php`.
    ///
    /// Taken as given. A URL the client cannot use fails each case instead.
    #[arg(default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Do not wait for ENTER before sending requests.
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Also run the valid submission case. This makes the server send real email.
    #[arg(long)]
    pub include_disabled: bool,

    /// Exit with status 1 if any case fails.
    #[arg(long)]
    pub strict: bool,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Site under test.
    pub target: ProbeTarget,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Run cases that are skipped by default.
    pub include_disabled: bool,
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
    /// Fail the process when a case fails.
    pub strict: bool,
}

impl ProbeConfig {
    /// Whether the run should end with a failure exit status.
    ///
    /// Without `--strict` failures are reported only in the output.
    #[must_use]
    pub fn should_fail(&self, results: &SuiteResults) -> bool {
        self.strict && !results.all_passed()
    }
}

impl From<Cli> for ProbeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            target: ProbeTarget::new(&cli.base_url),
            timeout: Duration::from_secs(cli.timeout),
            include_disabled: cli.include_disabled,
            assume_yes: cli.assume_yes,
            strict: cli.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(args: &[&str]) -> ProbeConfig {
        let argv = std::iter::once("formprobe").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("valid arguments").into()
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.target, ProbeTarget::default());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.include_disabled);
        assert!(!config.assume_yes);
        assert!(!config.strict);
    }

    #[test]
    fn test_positional_base_url_and_flags() {
        let config = config(&[
            "https://www.example.com/",
            "--yes",
            "--include-disabled",
            "--strict",
            "--timeout",
            "3",
        ]);
        assert_eq!(
            config.target.endpoint_url(),
            "https://www.example.com/contact.php"
        );
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.include_disabled && config.assume_yes && config.strict);
    }

    #[test]
    fn test_unusable_base_url_is_not_a_usage_error() {
        for base_url in ["localhost:8000", "ftp://example.com", "not a url"] {
            let result = Cli::try_parse_from(["formprobe", base_url]);
            assert!(result.is_ok(), "{base_url}");
        }
        assert_eq!(
            config(&["localhost:8000"]).target.endpoint_url(),
            "localhost:8000/contact.php"
        );
    }

    #[test]
    fn test_exit_status_only_fails_in_strict_mode() {
        let mut results = SuiteResults::new();
        results.record("missing_fields", true);
        results.record("invalid_email", false);

        assert!(!config(&[]).should_fail(&results));
        assert!(config(&["--strict"]).should_fail(&results));

        let mut passing = SuiteResults::new();
        passing.record("missing_fields", true);
        assert!(!config(&["--strict"]).should_fail(&passing));
    }
}
