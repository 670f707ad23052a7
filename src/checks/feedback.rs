//! Feedback form validation checks ("BBC Part 2")
//!
//! Each scenario fills the article feedback form with one requirement
//! missing, submits, and expects the form to be rejected with at least one
//! validation-error node. Scenarios run sequentially against the page the
//! shared setup left behind, matching how the form behaves for a user who
//! keeps correcting and resubmitting.

use crate::browser::{DrivenPage, Session};
use crate::checks::expect::expect_true;
use crate::checks::{abort_suite, fixtures, run_check};
use crate::core::config::WaitConfig;
use crate::core::error::Result;
use crate::core::report::SuiteReport;

/// One transient form submission. Empty fields are skipped entirely during
/// filling; for these scenarios "skipped" and "intentionally left blank to
/// trigger validation" coincide.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub question: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub number: String,
    pub accept: bool,
}

impl FeedbackForm {
    fn filled() -> Self {
        Self {
            question: "Question".to_string(),
            name: "Name".to_string(),
            email: "Email".to_string(),
            location: String::new(),
            number: String::new(),
            accept: true,
        }
    }

    /// Complete form except the question textarea
    pub fn missing_question() -> Self {
        Self {
            question: String::new(),
            ..Self::filled()
        }
    }

    /// Complete form except the name input
    pub fn missing_name() -> Self {
        Self {
            name: String::new(),
            ..Self::filled()
        }
    }

    /// Complete form except the email input
    pub fn missing_email() -> Self {
        Self {
            email: String::new(),
            ..Self::filled()
        }
    }

    /// Complete form with the consent checkbox left unticked
    pub fn unaccepted() -> Self {
        Self {
            accept: false,
            ..Self::filled()
        }
    }

    /// The (selector, text) pairs a fill pass will type, in form order.
    /// Pure, so the skip-empty contract is testable without a browser.
    pub fn fill_plan(&self) -> Vec<(&'static str, &str)> {
        let fields = [
            (fixtures::QUESTION_FIELD, self.question.as_str()),
            (fixtures::NAME_FIELD, self.name.as_str()),
            (fixtures::EMAIL_FIELD, self.email.as_str()),
            (fixtures::LOCATION_FIELD, self.location.as_str()),
            (fixtures::NUMBER_FIELD, self.number.as_str()),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

/// Open the article page; one reload makes the sign-in popup disappear
pub async fn setup(session: &Session) -> Result<DrivenPage> {
    let url = session.config().site.feedback_url.clone();
    let page = session.open(&url).await?;
    page.reload_settled().await?;
    Ok(page)
}

/// Type every non-empty field into its handle, then tick the consent
/// checkbox when requested
pub async fn fill(page: &DrivenPage, form: &FeedbackForm) -> Result<()> {
    for (selector, value) in form.fill_plan() {
        page.type_into(selector, value).await?;
    }
    if form.accept {
        page.click(fixtures::CONSENT_CHECKBOX).await?;
    }
    Ok(())
}

/// Click the send button
pub async fn submit(page: &DrivenPage) -> Result<()> {
    page.click(fixtures::SUBMIT_BUTTON).await
}

/// Whether any validation-error node shows up within the settle window
pub async fn has_error_messages(page: &DrivenPage, wait: &WaitConfig) -> Result<bool> {
    page.appears_within(
        fixtures::FORM_ERROR,
        std::time::Duration::from_millis(wait.form_settle_ms),
        std::time::Duration::from_millis(wait.poll_interval_ms),
    )
    .await
}

/// Fill, submit, and expect the submission to be rejected
pub async fn check_rejected(page: &DrivenPage, form: &FeedbackForm, wait: &WaitConfig) -> Result<()> {
    fill(page, form).await?;
    submit(page).await?;
    let rejected = has_error_messages(page, wait).await?;
    expect_true("form shows a validation error", rejected)
}

fn scenarios() -> Vec<(&'static str, FeedbackForm)> {
    vec![
        (
            "submission rejected with an empty question",
            FeedbackForm::missing_question(),
        ),
        (
            "submission rejected with an empty name",
            FeedbackForm::missing_name(),
        ),
        (
            "submission rejected with an empty email",
            FeedbackForm::missing_email(),
        ),
        (
            "submission rejected with an unconfirmed checkbox",
            FeedbackForm::unaccepted(),
        ),
    ]
}

/// Run the whole suite against an open session
pub async fn run(session: &Session) -> SuiteReport {
    let mut report = SuiteReport::new("feedback");
    let wait = session.config().wait.clone();

    let page = match setup(session).await {
        Ok(page) => page,
        // Nothing was verified; the whole suite counts as failed
        Err(e) => {
            let names: Vec<&str> = scenarios().iter().map(|(name, _)| *name).collect();
            return abort_suite("feedback", &names, &e);
        }
    };

    for (name, form) in scenarios() {
        run_check(&mut report, name, check_rejected(&page, &form, &wait)).await;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_plan_skips_empty_fields() {
        let form = FeedbackForm::missing_question();
        let plan = form.fill_plan();
        let selectors: Vec<&str> = plan.iter().map(|(s, _)| *s).collect();

        assert!(!selectors.contains(&fixtures::QUESTION_FIELD));
        assert!(selectors.contains(&fixtures::NAME_FIELD));
        assert!(selectors.contains(&fixtures::EMAIL_FIELD));
        // Optional fields were never set
        assert!(!selectors.contains(&fixtures::LOCATION_FIELD));
        assert!(!selectors.contains(&fixtures::NUMBER_FIELD));
    }

    #[test]
    fn test_fill_plan_preserves_form_order() {
        let mut form = FeedbackForm::filled();
        form.location = "London".to_string();
        form.number = "0123".to_string();

        let plan = form.fill_plan();
        let selectors: Vec<&str> = plan.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            selectors,
            vec![
                fixtures::QUESTION_FIELD,
                fixtures::NAME_FIELD,
                fixtures::EMAIL_FIELD,
                fixtures::LOCATION_FIELD,
                fixtures::NUMBER_FIELD,
            ]
        );
    }

    #[test]
    fn test_scenarios_each_drop_one_requirement() {
        assert!(FeedbackForm::missing_question().question.is_empty());
        assert!(FeedbackForm::missing_name().name.is_empty());
        assert!(FeedbackForm::missing_email().email.is_empty());
        assert!(!FeedbackForm::unaccepted().accept);

        // Everything else stays filled in each scenario
        let unaccepted = FeedbackForm::unaccepted();
        assert_eq!(unaccepted.fill_plan().len(), 3);
    }

    #[test]
    fn test_four_distinct_scenarios() {
        let names: Vec<&str> = scenarios().iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), 4);
        let unique: std::collections::HashSet<&&str> = names.iter().collect();
        assert_eq!(unique.len(), 4);
    }
}
