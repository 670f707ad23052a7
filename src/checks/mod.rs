//! Check suites against the live site
//!
//! Two independent suites: the news front page content checks and the
//! article feedback form validation checks. Both are plain async functions
//! over a [`Session`](crate::browser::Session) so the CLI runner and the
//! integration tests share one implementation.

pub mod expect;
pub mod feedback;
pub mod fixtures;
pub mod news;

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::core::error::{E2eError, Result};
use crate::core::report::{CheckOutcome, SuiteReport};

/// Await one check and record its outcome with timing
pub(crate) async fn run_check<F>(report: &mut SuiteReport, name: &str, check: F)
where
    F: Future<Output = Result<()>>,
{
    let start = Instant::now();
    match check.await {
        Ok(()) => {
            info!(check = name, "passed");
            report.record(CheckOutcome::passed(name, start.elapsed()));
        }
        Err(e) => {
            warn!(check = name, error = %e, "failed");
            report.record(CheckOutcome::failed(name, e.to_string(), start.elapsed()));
        }
    }
}

/// Report a suite whose shared setup died before any check ran. Every check
/// is recorded as failed: a run where nothing was verified must never count
/// as a passing run, and the runner's exit code keys off failure counts.
pub(crate) fn abort_suite(suite: &str, names: &[&str], error: &E2eError) -> SuiteReport {
    warn!(suite, error = %error, "suite setup failed");
    let reason = format!("setup failed: {}", error);
    let mut report = SuiteReport::new(suite);
    for name in names {
        report.record(CheckOutcome::failed(*name, &reason, Duration::ZERO));
    }
    report
}
