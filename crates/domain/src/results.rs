//! Suite results

use indexmap::IndexMap;

/// Pass/fail per case name, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuiteResults {
    results: IndexMap<String, bool>,
    skipped: Vec<String>,
}

impl SuiteResults {
    /// Creates an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result for a case. Recording the same name twice keeps
    /// the original position and overwrites the value.
    pub fn record(&mut self, name: impl Into<String>, passed: bool) {
        self.results.insert(name.into(), passed);
    }

    /// Records a case that was not executed.
    pub fn record_skipped(&mut self, name: impl Into<String>) {
        self.skipped.push(name.into());
    }

    /// Iterates `(name, passed)` in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(name, passed)| (name.as_str(), *passed))
    }

    /// Returns the result for a case, if it ran.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.results.get(name).copied()
    }

    /// Names of cases that were skipped.
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Number of cases that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.values().filter(|passed| **passed).count()
    }

    /// Number of cases executed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Returns true if every executed case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Returns the `<passed>/<total> tests passed` summary line.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{}/{} tests passed", self.passed(), self.total())
    }
}
