//! Shared result types for check runs
//!
//! Each check reports an independent pass/fail outcome; a suite collects
//! them into a console summary.

use std::time::Duration;

/// Terminal status of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Extracted values matched the expectations
    Passed,
    /// Assertion mismatch or harness error, with the reason
    Failed(String),
    /// Check did not run (environment missing, earlier setup failed)
    Skipped(String),
}

/// Outcome of a single named check
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Descriptive check name, as the runner reports it
    pub name: String,
    /// Final status
    pub status: CheckStatus,
    /// Wall-clock time the check took
    pub elapsed: Duration,
}

impl CheckOutcome {
    /// Create a passed outcome
    pub fn passed(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Passed,
            elapsed,
        }
    }

    /// Create a failed outcome
    pub fn failed(name: impl Into<String>, reason: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(reason.into()),
            elapsed,
        }
    }

    /// Create a skipped outcome
    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Skipped(reason.into()),
            elapsed: Duration::ZERO,
        }
    }

    /// Whether the check passed
    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// Collected outcomes for one suite run
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    /// Suite name ("news", "feedback")
    pub suite: String,
    /// Outcomes in execution order
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// Create an empty report for a suite
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            outcomes: Vec::new(),
        }
    }

    /// Record one outcome
    pub fn record(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of passed checks
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_pass()).count()
    }

    /// Number of failed checks
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, CheckStatus::Failed(_)))
            .count()
    }

    /// Whether every non-skipped check passed
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Format a console summary, one line per check
    pub fn format_summary(&self) -> String {
        let mut out = format!("suite '{}':\n", self.suite);
        for outcome in &self.outcomes {
            let line = match &outcome.status {
                CheckStatus::Passed => {
                    format!("  PASS  {} ({:?})\n", outcome.name, outcome.elapsed)
                }
                CheckStatus::Failed(reason) => {
                    format!("  FAIL  {}: {}\n", outcome.name, reason)
                }
                CheckStatus::Skipped(reason) => {
                    format!("  SKIP  {}: {}\n", outcome.name, reason)
                }
            };
            out.push_str(&line);
        }
        out.push_str(&format!(
            "  {} passed, {} failed, {} total\n",
            self.passed(),
            self.failed(),
            self.outcomes.len()
        ));
        out
    }
}
