//! Page driving primitives
//!
//! Thin wrapper over a DevTools page: navigation with settle detection,
//! text extraction, and element-scoped input. Typed text is always bound to
//! the located field handle; nothing here dispatches keystrokes to whatever
//! happens to hold focus.

use std::time::Duration;

use chromiumoxide::Page;
use tokio::time::Instant;
use tracing::debug;

use crate::browser::wait::{IdleSettings, SettleWatch};
use crate::core::config::WaitConfig;
use crate::core::error::{E2eError, Result};

/// A page under the harness's control
pub struct DrivenPage {
    page: Page,
    wait: WaitConfig,
}

impl DrivenPage {
    pub(crate) fn new(page: Page, wait: WaitConfig) -> Self {
        Self { page, wait }
    }

    fn idle_settings(&self) -> IdleSettings {
        IdleSettings {
            window: Duration::from_millis(self.wait.idle_window_ms),
            max_inflight: self.wait.max_inflight,
            timeout: Duration::from_secs(self.wait.navigation_timeout_secs),
        }
    }

    /// Navigate to `url` and wait for the navigation to settle
    pub async fn goto_settled(&self, url: &str) -> Result<()> {
        debug!(url, "goto");
        let watch = SettleWatch::attach(&self.page, self.idle_settings()).await?;
        self.page
            .goto(url)
            .await
            .map_err(|e| E2eError::browser(format!("goto '{}' failed: {}", url, e)))?;
        watch.settled(url).await
    }

    /// Reload the current page and wait for it to settle
    pub async fn reload_settled(&self) -> Result<()> {
        let url = self.url().await.unwrap_or_else(|| "about:blank".to_string());
        debug!(url, "reload");
        let watch = SettleWatch::attach(&self.page, self.idle_settings()).await?;
        self.page
            .reload()
            .await
            .map_err(|e| E2eError::browser(format!("reload failed: {}", e)))?;
        watch.settled(&url).await
    }

    /// Click the element matching `selector` and wait for the resulting
    /// navigation to settle. The watch is armed before the click so the two
    /// cannot race.
    pub async fn click_and_settle(&self, selector: &str) -> Result<()> {
        // Label a potential timeout with the page we clicked on, not with
        // whatever mid-navigation URL the page reports afterwards
        let label = settle_label(self.url().await, selector);

        let watch = SettleWatch::attach(&self.page, self.idle_settings()).await?;
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| E2eError::selector(selector))?;
        element
            .click()
            .await
            .map_err(|e| E2eError::browser(format!("click '{}' failed: {}", selector, e)))?;

        watch.settled(&label).await
    }

    /// Click the element matching `selector` without waiting for navigation
    pub async fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| E2eError::selector(selector))?;
        element
            .click()
            .await
            .map_err(|e| E2eError::browser(format!("click '{}' failed: {}", selector, e)))?;
        Ok(())
    }

    /// Visible text of exactly one element. Fails when the selector
    /// matches nothing.
    pub async fn text(&self, selector: &str) -> Result<String> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| E2eError::selector(selector))?;
        let text = element
            .inner_text()
            .await
            .map_err(|e| E2eError::browser(format!("innerText of '{}' failed: {}", selector, e)))?;
        Ok(text.unwrap_or_default())
    }

    /// Visible text of every matching element, in document order. An empty
    /// vector when nothing matches is not an error.
    pub async fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| E2eError::browser(format!("query '{}' failed: {}", selector, e)))?;

        let mut texts = Vec::with_capacity(elements.len());
        for element in &elements {
            let text = element.inner_text().await.map_err(|e| {
                E2eError::browser(format!("innerText of '{}' failed: {}", selector, e))
            })?;
            texts.push(text.unwrap_or_default());
        }
        Ok(texts)
    }

    /// Focus the field matching `selector` and type `text` into that
    /// handle, keystroke by keystroke.
    pub async fn type_into(&self, selector: &str, text: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| E2eError::selector(selector))?;
        element
            .focus()
            .await
            .map_err(|e| E2eError::browser(format!("focus '{}' failed: {}", selector, e)))?;
        element
            .type_str(text)
            .await
            .map_err(|e| E2eError::browser(format!("typing into '{}' failed: {}", selector, e)))?;
        debug!(selector, chars = text.len(), "typed");
        Ok(())
    }

    /// Whether any element currently matches `selector`
    pub async fn exists(&self, selector: &str) -> Result<bool> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| E2eError::browser(format!("query '{}' failed: {}", selector, e)))?;
        Ok(!elements.is_empty())
    }

    /// Poll for `selector` until it matches or `window` elapses. Returns
    /// whether a match appeared. This replaces a fixed post-submit sleep:
    /// it answers as soon as the DOM shows the node instead of always
    /// paying the full delay.
    pub async fn appears_within(
        &self,
        selector: &str,
        window: Duration,
        poll: Duration,
    ) -> Result<bool> {
        let deadline = Instant::now() + window;
        loop {
            if self.exists(selector).await? {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(poll).await;
        }
    }

    /// Current URL, when the page reports one
    pub async fn url(&self) -> Option<String> {
        self.page.url().await.ok().flatten()
    }
}

/// Error label for a settle wait triggered from `origin`; falls back to the
/// clicked selector when the page has no URL to report
fn settle_label(origin: Option<String>, selector: &str) -> String {
    origin.unwrap_or_else(|| format!("click on '{}'", selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_label_prefers_origin_url() {
        let label = settle_label(
            Some("https://www.bbc.com/".to_string()),
            ".orb-nav-newsdotcom > a",
        );
        assert_eq!(label, "https://www.bbc.com/");
    }

    #[test]
    fn test_settle_label_falls_back_to_selector() {
        let label = settle_label(None, "button.orb-search__button");
        assert!(label.contains("button.orb-search__button"));
    }
}
