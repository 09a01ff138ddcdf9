//! Probe Case Use Case
//!
//! Sends one test case to the contact endpoint and classifies the answer.
//! This never fails: transport errors become failed outcomes.

use std::sync::Arc;
use std::time::Duration;

use formprobe_domain::{CaseOutcome, FormResponse, ProbeTarget, TestCase};
use tracing::{debug, warn};

use crate::ports::{FormClient, FormClientError, FormRequest};

/// Upper bound on a single exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of running a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRun {
    /// The response, if one was received.
    pub response: Option<FormResponse>,
    /// Classified outcome.
    pub outcome: CaseOutcome,
}

impl CaseRun {
    /// Returns true if the case passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.outcome.passed()
    }
}

/// Use case for executing a single test case.
pub struct ProbeCase<C: FormClient> {
    client: Arc<C>,
    target: ProbeTarget,
    timeout: Duration,
}

impl<C: FormClient> ProbeCase<C> {
    /// Creates a new `ProbeCase` against `target` with the default timeout.
    pub fn new(client: Arc<C>, target: ProbeTarget) -> Self {
        Self {
            client,
            target,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The target being probed.
    #[must_use]
    pub const fn target(&self) -> &ProbeTarget {
        &self.target
    }

    /// Sends the case once and classifies the result.
    pub async fn execute(&self, case: &TestCase) -> CaseRun {
        let request = FormRequest::new(
            self.target.endpoint_url(),
            case.fields().clone(),
            self.timeout,
        );
        debug!(
            case = case.name(),
            url = %request.url,
            fields = request.fields.len(),
            "posting form"
        );

        match self.client.post_form(&request).await {
            Ok(response) => {
                let outcome = CaseOutcome::classify(case.expectation(), &response);
                debug!(
                    case = case.name(),
                    status = response.status.as_u16(),
                    location = response.location.as_deref(),
                    passed = outcome.passed(),
                    "classified response"
                );
                CaseRun {
                    response: Some(response),
                    outcome,
                }
            }
            Err(error) => {
                warn!(case = case.name(), %error, "form request failed");
                CaseRun {
                    response: None,
                    outcome: Self::failure_outcome(error),
                }
            }
        }
    }

    fn failure_outcome(error: FormClientError) -> CaseOutcome {
        match error {
            FormClientError::ConnectionFailed(message) => CaseOutcome::ConnectionFailed { message },
            other => CaseOutcome::TransportFailed {
                message: other.to_string(),
            },
        }
    }
}
