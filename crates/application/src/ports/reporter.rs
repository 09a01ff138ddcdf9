//! Reporter port

use std::io;

use formprobe_domain::{ProbeTarget, SuiteResults, TestCase};

use crate::probe_case::CaseRun;

/// Receives progress and results as the suite runs.
pub trait Reporter {
    /// Called once before the operator is asked to confirm.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be written.
    fn suite_started(&mut self, target: &ProbeTarget) -> io::Result<()>;

    /// Called when the operator declines to run the suite.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be written.
    fn suite_declined(&mut self) -> io::Result<()>;

    /// Called before a case's request is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be written.
    fn case_started(&mut self, case: &TestCase) -> io::Result<()>;

    /// Called after a case has been classified.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be written.
    fn case_finished(&mut self, case: &TestCase, run: &CaseRun) -> io::Result<()>;

    /// Called once with the final results.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be written.
    fn suite_finished(&mut self, results: &SuiteResults) -> io::Result<()>;
}
