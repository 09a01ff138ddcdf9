//! Console reporter.
//!
//! Prints human-readable progress and a summary to any `Write` sink,
//! stdout in the CLI.

use std::io::{self, Stdout, Write};

use formprobe_application::{CaseRun, Reporter};
use formprobe_domain::{CaseOutcome, Expectation, ProbeTarget, SuiteResults, TestCase};

const RULE: &str = "============================================================";

/// Reporter that writes plain text lines.
pub struct ConsoleReporter<W: Write> {
    out: W,
    target: ProbeTarget,
}

impl ConsoleReporter<Stdout> {
    /// Creates a reporter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            target: ProbeTarget::default(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{RULE}")
    }

    fn outcome(&mut self, expectation: &Expectation, outcome: &CaseOutcome) -> io::Result<()> {
        match outcome {
            CaseOutcome::Passed => match expectation {
                Expectation::Success => writeln!(self.out, "✅ SUCCESS - Form accepted"),
                Expectation::Error(code) => {
                    writeln!(self.out, "✅ SUCCESS - Got expected error: {code}")
                }
            },
            CaseOutcome::UnexpectedRedirect { .. } => writeln!(
                self.out,
                "❌ FAILED - Unexpected redirect (expected {})",
                expectation.description()
            ),
            CaseOutcome::UnexpectedStatus { status } => writeln!(
                self.out,
                "❌ FAILED - Expected redirect, got {}",
                status.as_u16()
            ),
            CaseOutcome::ConnectionFailed { message } => {
                writeln!(self.out, "❌ CONNECTION ERROR - Is the server running?")?;
                writeln!(self.out, "   {message}")?;
                writeln!(self.out, "   For local testing: php -S localhost:80")?;
                writeln!(
                    self.out,
                    "   Or probe a deployed site: formprobe https://www.example.com"
                )?;
                writeln!(self.out, "   (currently probing {})", self.target)
            }
            CaseOutcome::TransportFailed { message } => {
                writeln!(self.out, "❌ ERROR: {message}")
            }
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn suite_started(&mut self, target: &ProbeTarget) -> io::Result<()> {
        self.target = target.clone();
        self.banner("🧪 CONTACT FORM TEST SUITE")?;
        writeln!(self.out, "Testing: {target}")?;
        self.out.flush()
    }

    fn suite_declined(&mut self) -> io::Result<()> {
        writeln!(self.out, "Aborted, no requests sent.")?;
        self.out.flush()
    }

    fn case_started(&mut self, case: &TestCase) -> io::Result<()> {
        self.banner(&format!("Testing: {}", case.description()))?;
        self.out.flush()
    }

    fn case_finished(&mut self, case: &TestCase, run: &CaseRun) -> io::Result<()> {
        if let Some(response) = &run.response {
            writeln!(self.out, "Status Code: {}", response.status.as_u16())?;
            if response.status.is_form_redirect() {
                writeln!(self.out, "Redirect to: {}", response.location_or_empty())?;
            }
        }
        self.outcome(case.expectation(), &run.outcome)?;
        self.out.flush()
    }

    fn suite_finished(&mut self, results: &SuiteResults) -> io::Result<()> {
        self.banner("TEST SUMMARY")?;
        for (name, passed) in results.iter() {
            let status = if passed { "✅ PASS" } else { "❌ FAIL" };
            writeln!(self.out, "{status} - {name}")?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", results.summary_line())?;
        writeln!(self.out, "{RULE}")?;

        if !results.skipped().is_empty() {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "Note: {} skipped by default to avoid sending real email.",
                results.skipped().join(", ")
            )?;
            writeln!(
                self.out,
                "Run with --include-disabled to test the full form flow."
            )?;
        }
        self.out.flush()
    }
}
