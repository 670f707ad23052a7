//! Navigation settle detection
//!
//! A navigation counts as settled once the page has had no more than
//! `max_inflight` in-flight network requests for a sustained quiet window
//! (the "network idle" heuristic). The watch subscribes to DevTools network
//! events *before* the action that triggers navigation, so a fast redirect
//! cannot slip between the click and the wait.

use std::sync::Arc;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams, EventLoadingFailed, EventLoadingFinished, EventRequestWillBeSent,
};
use chromiumoxide::Page;
use futures::stream::BoxStream;
use futures::StreamExt;
use tokio::time::Instant;
use tracing::debug;

use crate::core::error::{E2eError, Result};

/// Tuning for one settle watch
#[derive(Debug, Clone, Copy)]
pub struct IdleSettings {
    /// Required quiet window
    pub window: Duration,
    /// In-flight request ceiling during the quiet window
    pub max_inflight: usize,
    /// Overall bound for the navigation
    pub timeout: Duration,
}

/// Bookkeeping for the idle criterion, separated from the event plumbing
/// so the quiet-window rules are testable without a browser.
#[derive(Debug)]
struct IdleTracker {
    inflight: usize,
    max_inflight: usize,
    quiet_since: Instant,
}

impl IdleTracker {
    fn new(max_inflight: usize, now: Instant) -> Self {
        Self {
            inflight: 0,
            max_inflight,
            quiet_since: now,
        }
    }

    fn on_started(&mut self) {
        self.inflight += 1;
    }

    fn on_finished(&mut self, now: Instant) {
        let was_over = self.inflight > self.max_inflight;
        // Requests started before the watch attached still emit finish events
        self.inflight = self.inflight.saturating_sub(1);
        if was_over && self.inflight <= self.max_inflight {
            self.quiet_since = now;
        }
    }

    fn is_settled(&self, now: Instant, window: Duration) -> bool {
        self.inflight <= self.max_inflight && now.duration_since(self.quiet_since) >= window
    }

    fn next_wake(&self, window: Duration, deadline: Instant) -> Instant {
        if self.inflight <= self.max_inflight {
            std::cmp::min(deadline, self.quiet_since + window)
        } else {
            deadline
        }
    }
}

/// An armed settle watch over one page's network traffic
pub struct SettleWatch {
    started: BoxStream<'static, Arc<EventRequestWillBeSent>>,
    finished: BoxStream<'static, Arc<EventLoadingFinished>>,
    failed: BoxStream<'static, Arc<EventLoadingFailed>>,
    settings: IdleSettings,
}

impl SettleWatch {
    /// Subscribe to the page's network events. Must be called before the
    /// navigation-triggering action.
    pub async fn attach(page: &Page, settings: IdleSettings) -> Result<Self> {
        page.execute(EnableParams::default())
            .await
            .map_err(|e| E2eError::browser(format!("Network.enable failed: {}", e)))?;

        let started = page
            .event_listener::<EventRequestWillBeSent>()
            .await
            .map_err(|e| E2eError::browser(format!("event subscription failed: {}", e)))?
            .boxed();
        let finished = page
            .event_listener::<EventLoadingFinished>()
            .await
            .map_err(|e| E2eError::browser(format!("event subscription failed: {}", e)))?
            .boxed();
        let failed = page
            .event_listener::<EventLoadingFailed>()
            .await
            .map_err(|e| E2eError::browser(format!("event subscription failed: {}", e)))?
            .boxed();

        Ok(Self {
            started,
            finished,
            failed,
            settings,
        })
    }

    /// Consume events until the idle criterion holds, or fail with a
    /// navigation timeout. `url` only labels the error.
    pub async fn settled(mut self, url: &str) -> Result<()> {
        let window = self.settings.window;
        let deadline = Instant::now() + self.settings.timeout;
        let mut tracker = IdleTracker::new(self.settings.max_inflight, Instant::now());

        // A stream ends when the page goes away; stop polling it then so a
        // ready `None` cannot spin the select loop.
        let mut started_open = true;
        let mut finished_open = true;
        let mut failed_open = true;

        loop {
            let now = Instant::now();
            if tracker.is_settled(now, window) {
                debug!(url, "navigation settled");
                return Ok(());
            }
            if now >= deadline {
                return Err(E2eError::NavigationTimeout {
                    url: url.to_string(),
                    timeout: self.settings.timeout,
                });
            }

            let wake = tracker.next_wake(window, deadline);
            tokio::select! {
                _ = tokio::time::sleep_until(wake) => {}
                ev = self.started.next(), if started_open => {
                    match ev {
                        Some(_) => tracker.on_started(),
                        None => started_open = false,
                    }
                }
                ev = self.finished.next(), if finished_open => {
                    match ev {
                        Some(_) => tracker.on_finished(Instant::now()),
                        None => finished_open = false,
                    }
                }
                ev = self.failed.next(), if failed_open => {
                    match ev {
                        Some(_) => tracker.on_finished(Instant::now()),
                        None => failed_open = false,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn test_settles_after_quiet_window() {
        let t0 = Instant::now();
        let tracker = IdleTracker::new(2, t0);
        assert!(!tracker.is_settled(t0, WINDOW));
        assert!(tracker.is_settled(t0 + Duration::from_millis(600), WINDOW));
    }

    #[test]
    fn test_two_inflight_still_counts_as_idle() {
        let t0 = Instant::now();
        let mut tracker = IdleTracker::new(2, t0);
        tracker.on_started();
        tracker.on_started();
        // At the ceiling, not over it
        assert!(tracker.is_settled(t0 + Duration::from_millis(600), WINDOW));
    }

    #[test]
    fn test_quiet_window_restarts_when_traffic_drops_back() {
        let t0 = Instant::now();
        let mut tracker = IdleTracker::new(2, t0);
        for _ in 0..3 {
            tracker.on_started();
        }
        let t1 = t0 + Duration::from_millis(600);
        assert!(!tracker.is_settled(t1, WINDOW));

        // Third request finishes at t1; the window restarts from there
        tracker.on_finished(t1);
        assert!(!tracker.is_settled(t1 + Duration::from_millis(100), WINDOW));
        assert!(tracker.is_settled(t1 + Duration::from_millis(500), WINDOW));
    }

    #[test]
    fn test_unmatched_finish_events_do_not_underflow() {
        let t0 = Instant::now();
        let mut tracker = IdleTracker::new(2, t0);
        tracker.on_finished(t0);
        tracker.on_finished(t0);
        assert!(tracker.is_settled(t0 + Duration::from_millis(600), WINDOW));
    }

    #[test]
    fn test_next_wake_caps_at_deadline() {
        let t0 = Instant::now();
        let deadline = t0 + Duration::from_millis(100);
        let mut tracker = IdleTracker::new(0, t0);
        assert_eq!(tracker.next_wake(WINDOW, deadline), deadline);

        tracker.on_started();
        // Over the ceiling: nothing to wait for but the deadline
        assert_eq!(tracker.next_wake(WINDOW, deadline), deadline);
    }
}
