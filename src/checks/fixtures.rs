//! Selectors and expected values, pinned to a snapshot of bbc.com
//!
//! This is the actual payload of the repository: the literals below were
//! scraped from the live site and the checks compare against them verbatim.
//! Several class names are build artifacts of the site's CSS pipeline
//! (e.g. `ssrcss-ww5kby-PromoLink`), so any site redeploy can invalidate
//! them. When a check fails here, compare against the live DOM before
//! suspecting the harness.

// -- News suite -------------------------------------------------------------

/// "News" entry in the homepage navigation bar
pub const NEWS_NAV_LINK: &str = ".orb-nav-newsdotcom > a";

/// Headline promo on the news front page
pub const HEADLINE: &str =
    "h3.gs-c-promo-heading__title.gel-paragon-bold.nw-o-link-split__text";

pub const HEADLINE_EXPECTED: &str = "Belarus athlete told by grandmother not to return";

/// Secondary promo headings; the `\@m` breakpoint suffix is part of the
/// class name and must stay escaped
pub const SECONDARY_TITLES: &str =
    r".nw-u-w-auto .gs-u-mt\@m a.gs-c-promo-heading h3, .gs-u-pb-alt\@m a.gs-c-promo-heading h3";

/// Every one of these must appear among the extracted secondary titles;
/// extra titles on the page are fine
pub const SECONDARY_TITLES_EXPECTED: [&str; 5] = [
    "USA's McLaughlin smashes 400m hurdles world record",
    "Belarus Olympic athlete flies out of Japan",
    "Gomez criticises 'tasteless' TV transplant joke",
    "UK takes France off 'amber-plus' list",
    "Rolling Stones drummer to miss US tour dates",
];

/// Category tag of the headline promo, used as the search query
pub const HEADLINE_CATEGORY: &str =
    ".gs-c-promo-body.gs-u-display-none .gs-c-section-link span";

pub const SEARCH_INPUT: &str = "input#orb-search-q";
pub const SEARCH_BUTTON: &str = "button.orb-search__button";

/// First promo link on the search results page
pub const FIRST_RESULT: &str = "a.ssrcss-ww5kby-PromoLink";

pub const FIRST_RESULT_EXPECTED: &str = "Reggie in China";

// -- Feedback form suite ----------------------------------------------------

/// Form fields are located by their placeholder text; the site gives them
/// no stable ids. The trailing space in the location placeholder is present
/// in the live markup.
pub const QUESTION_FIELD: &str =
    "textarea[placeholder='What questions would you like us to answer?']";
pub const NAME_FIELD: &str = "input[placeholder='Name']";
pub const EMAIL_FIELD: &str = "input[placeholder='Email address']";
pub const LOCATION_FIELD: &str = "input[placeholder='Location ']";
pub const NUMBER_FIELD: &str = "input[placeholder='Contact number']";

/// Terms-acceptance checkbox; the form renders exactly one labelled input
pub const CONSENT_CHECKBOX: &str = "label input";

pub const SUBMIT_BUTTON: &str = "button.button";

/// Any match means the submission was rejected by validation. The three
/// alternatives cover the textarea, the text inputs, and the checkbox.
pub const FORM_ERROR: &str = ".embed-content-container > div > div.input-error-message, \
     .text-input--error div, \
     .checkbox div.input-error-message";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_are_non_empty() {
        for selector in [
            NEWS_NAV_LINK,
            HEADLINE,
            SECONDARY_TITLES,
            HEADLINE_CATEGORY,
            SEARCH_INPUT,
            SEARCH_BUTTON,
            FIRST_RESULT,
            QUESTION_FIELD,
            NAME_FIELD,
            EMAIL_FIELD,
            LOCATION_FIELD,
            NUMBER_FIELD,
            CONSENT_CHECKBOX,
            SUBMIT_BUTTON,
            FORM_ERROR,
        ] {
            assert!(!selector.trim().is_empty());
        }
    }

    #[test]
    fn test_attribute_selectors_are_balanced() {
        for selector in [QUESTION_FIELD, NAME_FIELD, EMAIL_FIELD, LOCATION_FIELD, NUMBER_FIELD] {
            assert_eq!(
                selector.matches('[').count(),
                selector.matches(']').count(),
                "unbalanced brackets in {}",
                selector
            );
        }
    }

    #[test]
    fn test_breakpoint_classes_stay_escaped() {
        assert!(SECONDARY_TITLES.contains(r"\@m"));
    }
}
