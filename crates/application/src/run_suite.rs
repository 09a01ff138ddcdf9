//! Run Suite Use Case
//!
//! Gates on operator confirmation, then runs each case in order and
//! collects pass/fail per case name.

use std::sync::Arc;

use formprobe_domain::{SuiteResults, TestCase, contact_suite};
use tracing::info;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{Clock, Confirm, FormClient, Reporter};
use crate::probe_case::ProbeCase;

/// Prompt shown before any request is sent.
pub const START_PROMPT: &str = "Press ENTER to start tests...";

/// Use case for running the contact form suite.
pub struct RunSuite<C: FormClient, K: Clock> {
    probe: ProbeCase<C>,
    clock: Arc<K>,
    include_disabled: bool,
}

impl<C: FormClient, K: Clock> RunSuite<C, K> {
    /// Creates a new `RunSuite`.
    pub fn new(probe: ProbeCase<C>, clock: Arc<K>) -> Self {
        Self {
            probe,
            clock,
            include_disabled: false,
        }
    }

    /// Also run cases that are skipped by default.
    #[must_use]
    pub fn with_include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = include;
        self
    }

    /// Runs the built-in contact form suite.
    ///
    /// # Errors
    ///
    /// Returns an error if confirmation or report output fails. Failing
    /// cases are not errors.
    pub async fn run<F, R>(&self, confirm: &F, reporter: &mut R) -> ApplicationResult<SuiteResults>
    where
        F: Confirm + ?Sized,
        R: Reporter + ?Sized,
    {
        let cases = contact_suite(self.clock.unique_token())?;
        self.run_cases(&cases, confirm, reporter).await
    }

    /// Runs the given cases in order after operator confirmation.
    ///
    /// If the operator declines, nothing is sent and the results are empty.
    ///
    /// # Errors
    ///
    /// Returns an error if confirmation or report output fails.
    pub async fn run_cases<F, R>(
        &self,
        cases: &[TestCase],
        confirm: &F,
        reporter: &mut R,
    ) -> ApplicationResult<SuiteResults>
    where
        F: Confirm + ?Sized,
        R: Reporter + ?Sized,
    {
        reporter
            .suite_started(self.probe.target())
            .map_err(ApplicationError::Report)?;

        if !confirm
            .confirm(START_PROMPT)
            .map_err(ApplicationError::Confirm)?
        {
            info!("suite declined by operator");
            reporter.suite_declined().map_err(ApplicationError::Report)?;
            return Ok(SuiteResults::new());
        }

        info!(
            base_url = %self.probe.target(),
            cases = cases.len(),
            started_at = %self.clock.now(),
            "starting suite"
        );
        let mut results = SuiteResults::new();

        for case in cases {
            if case.skip_by_default() && !self.include_disabled {
                info!(case = case.name(), "skipping disabled case");
                results.record_skipped(case.name());
                continue;
            }

            reporter.case_started(case).map_err(ApplicationError::Report)?;
            let run = self.probe.execute(case).await;
            reporter
                .case_finished(case, &run)
                .map_err(ApplicationError::Report)?;
            results.record(case.name(), run.passed());
        }

        info!(
            passed = results.passed(),
            total = results.total(),
            "suite finished"
        );
        reporter
            .suite_finished(&results)
            .map_err(ApplicationError::Report)?;
        Ok(results)
    }
}
