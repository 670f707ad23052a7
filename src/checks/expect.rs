//! Assertion helpers for extracted page content
//!
//! Failures are reported as [`E2eError::Expectation`] so the runner can
//! tell an assertion mismatch apart from a harness fault.

use crate::core::error::{E2eError, Result};

/// Exact string equality
pub fn expect_eq(what: &str, actual: &str, expected: &str) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(E2eError::expectation(format!(
            "{}: expected '{}', got '{}'",
            what, expected, actual
        )))
    }
}

/// Containment: every expected item must appear somewhere in `actual`.
/// Order-insensitive; extra actual items are tolerated.
pub fn expect_contains_all(what: &str, actual: &[String], expected: &[&str]) -> Result<()> {
    let missing: Vec<&str> = expected
        .iter()
        .filter(|item| !actual.iter().any(|a| a == *item))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(E2eError::expectation(format!(
            "{}: {} of {} expected items missing: {:?} (got {} items)",
            what,
            missing.len(),
            expected.len(),
            missing,
            actual.len()
        )))
    }
}

/// A boolean condition that must hold
pub fn expect_true(what: &str, condition: bool) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(E2eError::expectation(format!("{}: condition was false", what)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_expect_eq() {
        assert_ok!(expect_eq("headline", "Reggie in China", "Reggie in China"));
        let err = expect_eq("headline", "Reggie", "Reggie in China").unwrap_err();
        assert!(err.is_expectation());
        assert!(err.to_string().contains("expected 'Reggie in China'"));
    }

    #[test]
    fn test_containment_ignores_order_and_extras() {
        let actual = vec![
            "extra".to_string(),
            "b".to_string(),
            "a".to_string(),
        ];
        assert_ok!(expect_contains_all("titles", &actual, &["a", "b"]));
    }

    #[test]
    fn test_containment_reports_missing_items() {
        let actual = vec!["a".to_string()];
        let err = expect_contains_all("titles", &actual, &["a", "b", "c"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("2 of 3"));
        assert!(msg.contains("\"b\""));
        assert!(msg.contains("\"c\""));
    }

    #[test]
    fn test_containment_is_exact_match_not_substring() {
        let actual = vec!["abc".to_string()];
        assert_err!(expect_contains_all("titles", &actual, &["ab"]));
    }

    #[test]
    fn test_expect_true() {
        assert_ok!(expect_true("has errors", true));
        assert_err!(expect_true("has errors", false));
    }
}
