//! Core module - shared infrastructure for the harness
//!
//! This module contains foundational types, configuration, and error handling
//! used throughout the crate.

pub mod config;
pub mod error;
pub mod report;

pub use config::Config;
pub use error::{E2eError, Result};
pub use report::{CheckOutcome, CheckStatus, SuiteReport};
