//! bbc-e2e - End-to-end browser checks for the BBC news site
//!
//! Drives a headless Chrome instance over the DevTools protocol and asserts
//! on hard-coded page content and feedback-form validation behavior. The
//! expected values are pinned to a snapshot of the live site, so the checks
//! are regression tests against that snapshot rather than invariants of the
//! site itself.
//!
//! # Architecture
//!
//! - **Core**: shared configuration, error handling, and run reporting
//! - **Browser**: session lifecycle and page driving over chromiumoxide
//! - **Checks**: the two suites plus their selectors and expectations
//!
//! # Usage
//!
//! ```rust,no_run
//! use bbc_e2e::browser::Session;
//! use bbc_e2e::{checks, Config};
//!
//! #[tokio::main]
//! async fn main() -> bbc_e2e::Result<()> {
//!     let session = Session::launch(Config::load()).await?;
//!     let report = checks::news::run(&session).await;
//!     print!("{}", report.format_summary());
//!     session.close().await
//! }
//! ```

pub mod browser;
pub mod checks;
pub mod core;

// Re-export commonly used items
pub use browser::{DrivenPage, Session};
pub use core::{Config, E2eError, Result, SuiteReport};
