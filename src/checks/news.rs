//! News front page checks ("BBC Part 1")
//!
//! Shared setup navigates from the homepage to the news front page; the
//! checks then read hard-coded headline content from the page the setup
//! left behind. The search check navigates away, so it runs last.

use crate::browser::{DrivenPage, Session};
use crate::checks::expect::{expect_contains_all, expect_eq};
use crate::checks::{abort_suite, fixtures, run_check};
use crate::core::error::Result;
use crate::core::report::SuiteReport;

const CHECK_NAMES: [&str; 3] = [
    "has the headline article with the hard-coded name",
    "has all the secondary titles from the hard-coded list",
    "search for the headline category finds the hard-coded first article",
];

/// Open the homepage and click through to the news front page
pub async fn setup(session: &Session) -> Result<DrivenPage> {
    let home_url = session.config().site.home_url.clone();
    let page = session.open(&home_url).await?;
    page.click_and_settle(fixtures::NEWS_NAV_LINK).await?;
    Ok(page)
}

/// The headline promo carries the pinned headline text
pub async fn check_headline(page: &DrivenPage) -> Result<()> {
    let headline = page.text(fixtures::HEADLINE).await?;
    expect_eq("headline article name", &headline, fixtures::HEADLINE_EXPECTED)
}

/// Every pinned secondary title appears among the promo headings
pub async fn check_secondary_titles(page: &DrivenPage) -> Result<()> {
    let titles = page.texts(fixtures::SECONDARY_TITLES).await?;
    expect_contains_all(
        "secondary titles",
        &titles,
        &fixtures::SECONDARY_TITLES_EXPECTED,
    )
}

/// Searching for the headline's category tag yields the pinned first result
pub async fn check_search_first_result(page: &DrivenPage) -> Result<()> {
    let category = page.text(fixtures::HEADLINE_CATEGORY).await?;
    page.type_into(fixtures::SEARCH_INPUT, &category).await?;
    page.click_and_settle(fixtures::SEARCH_BUTTON).await?;

    let first = page.text(fixtures::FIRST_RESULT).await?;
    expect_eq(
        "first search result",
        &first,
        fixtures::FIRST_RESULT_EXPECTED,
    )
}

/// Run the whole suite against an open session
pub async fn run(session: &Session) -> SuiteReport {
    let mut report = SuiteReport::new("news");

    let page = match setup(session).await {
        Ok(page) => page,
        // Nothing was verified; the whole suite counts as failed
        Err(e) => return abort_suite("news", &CHECK_NAMES, &e),
    };

    run_check(&mut report, CHECK_NAMES[0], check_headline(&page)).await;
    run_check(&mut report, CHECK_NAMES[1], check_secondary_titles(&page)).await;
    run_check(&mut report, CHECK_NAMES[2], check_search_first_result(&page)).await;

    report
}
