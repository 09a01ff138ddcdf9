//! Test doubles for the application ports.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use formprobe_domain::{FormResponse, ProbeTarget, SuiteResults, TestCase};

use crate::ports::{Clock, Confirm, FormClient, FormClientError, FormRequest, Reporter};
use crate::probe_case::CaseRun;

type Handler = Box<dyn Fn(&FormRequest) -> Result<FormResponse, FormClientError> + Send + Sync>;

/// Form client that answers from a handler and records every request.
pub struct MockFormClient {
    handler: Handler,
    requests: Mutex<Vec<FormRequest>>,
}

impl MockFormClient {
    pub fn with_handler(
        handler: impl Fn(&FormRequest) -> Result<FormResponse, FormClientError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(response: FormResponse) -> Self {
        Self::with_handler(move |_| Ok(response.clone()))
    }

    pub fn redirecting(location: &str) -> Self {
        Self::responding(FormResponse::redirect(302u16, location))
    }

    pub fn failing(error: FormClientError) -> Self {
        Self::with_handler(move |_| Err(error.clone()))
    }

    pub fn requests(&self) -> Vec<FormRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl FormClient for MockFormClient {
    fn post_form<'a>(
        &'a self,
        request: &'a FormRequest,
    ) -> Pin<Box<dyn Future<Output = Result<FormResponse, FormClientError>> + Send + 'a>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let result = (self.handler)(request);
        Box::pin(async move { result })
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.0, 0).single().unwrap_or_default()
    }

    fn unique_token(&self) -> i64 {
        self.0
    }
}

/// Confirmation that always gives the same answer and counts prompts.
pub struct StaticConfirm {
    pub answer: bool,
    pub asked: Mutex<Vec<String>>,
}

impl StaticConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.lock().map(|a| a.len()).unwrap_or_default()
    }
}

impl Confirm for StaticConfirm {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.to_string());
        }
        Ok(self.answer)
    }
}

/// Reporter that records events as strings.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn suite_started(&mut self, target: &ProbeTarget) -> io::Result<()> {
        self.events.push(format!("start {target}"));
        Ok(())
    }

    fn suite_declined(&mut self) -> io::Result<()> {
        self.events.push("declined".to_string());
        Ok(())
    }

    fn case_started(&mut self, case: &TestCase) -> io::Result<()> {
        self.events.push(format!("case {}", case.name()));
        Ok(())
    }

    fn case_finished(&mut self, case: &TestCase, run: &CaseRun) -> io::Result<()> {
        self.events
            .push(format!("done {} {}", case.name(), run.outcome));
        Ok(())
    }

    fn suite_finished(&mut self, results: &SuiteResults) -> io::Result<()> {
        self.events.push(results.summary_line());
        Ok(())
    }
}
