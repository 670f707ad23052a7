//! Browser session lifecycle
//!
//! Owns the Chrome process, the DevTools connection, and the event handler
//! task. Suites are strictly sequential, so a session hands out one driven
//! page at a time and nothing here needs locking.

use std::path::PathBuf;

use chromiumoxide::browser::{Browser, BrowserConfig as CdpConfig};
use futures::StreamExt;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::browser::page::DrivenPage;
use crate::core::config::Config;
use crate::core::error::{E2eError, Result};

/// A launched browser with its handler task
pub struct Session {
    browser: Browser,
    handler: JoinHandle<()>,
    // Scratch profile; cleaned up on drop
    _profile_dir: TempDir,
    config: Config,
}

impl Session {
    /// Locate a Chrome/Chromium executable: the configured path wins,
    /// otherwise common installation paths are probed.
    pub fn chrome_binary(config: &Config) -> Option<PathBuf> {
        if let Some(ref path) = config.browser.chrome_path {
            let path = PathBuf::from(path);
            return path.exists().then_some(path);
        }
        chrome_candidates().into_iter().find(|p| p.exists())
    }

    /// Cheap reachability probe before paying for a browser launch.
    /// Transport failure means the site (or the network) is down; an HTTP
    /// error status still proves the site answered.
    pub async fn probe(url: &str) -> Result<()> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        match client.get(url).send().await {
            Ok(response) => {
                debug!(url, status = %response.status(), "preflight ok");
                Ok(())
            }
            Err(e) => {
                warn!(url, error = %e, "preflight failed");
                Err(E2eError::SiteUnreachable(url.to_string()))
            }
        }
    }

    /// Launch a browser for the given configuration
    pub async fn launch(config: Config) -> Result<Self> {
        config.validate()?;

        let chrome = Self::chrome_binary(&config).ok_or(E2eError::ChromeNotFound)?;
        let profile_dir = TempDir::new()?;

        let cdp_config = launch_config(&config, &chrome, profile_dir.path())?;

        let (browser, mut events) = Browser::launch(cdp_config)
            .await
            .map_err(|e| E2eError::browser(format!("launch failed: {}", e)))?;

        // Drive the CDP connection until it closes
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!(chrome = %chrome.display(), headed = config.browser.headed, "browser launched");

        Ok(Self {
            browser,
            handler,
            _profile_dir: profile_dir,
            config,
        })
    }

    /// Create a fresh page and navigate it to `url`, waiting for the
    /// navigation to settle.
    pub async fn open(&self, url: &str) -> Result<DrivenPage> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| E2eError::browser(format!("new page failed: {}", e)))?;

        let driven = DrivenPage::new(page, self.config.wait.clone());
        driven.goto_settled(url).await?;
        Ok(driven)
    }

    /// Harness configuration this session was launched with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Close the browser and stop the handler task
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| E2eError::browser(format!("close failed: {}", e)))?;
        self.handler.abort();
        Ok(())
    }
}

/// Translate harness configuration into chromiumoxide launch options.
/// chromiumoxide defaults to the legacy headless mode, so both branches set
/// the mode explicitly: headed via `with_head()`, headless via the modern
/// `--headless=new` equivalent.
fn launch_config(
    config: &Config,
    chrome: &std::path::Path,
    profile_dir: &std::path::Path,
) -> Result<CdpConfig> {
    let mut builder = CdpConfig::builder()
        .chrome_executable(chrome)
        .user_data_dir(profile_dir)
        .window_size(config.browser.viewport_width, config.browser.viewport_height)
        .arg("--no-sandbox")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--disable-extensions")
        .arg("--disable-popup-blocking");

    if config.browser.headed {
        builder = builder.with_head();
    } else {
        builder = builder.new_headless_mode();
    }

    builder
        .build()
        .map_err(|e| E2eError::browser(format!("bad launch config: {}", e)))
}

fn chrome_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "linux")]
    {
        paths.push(PathBuf::from("/usr/bin/google-chrome"));
        paths.push(PathBuf::from("/usr/bin/google-chrome-stable"));
        paths.push(PathBuf::from("/usr/bin/chromium"));
        paths.push(PathBuf::from("/usr/bin/chromium-browser"));
        paths.push(PathBuf::from("/snap/bin/chromium"));
    }

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from(
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        ));
        paths.push(PathBuf::from(
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
        ));
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join("Applications/Google Chrome.app/Contents/MacOS/Google Chrome"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        paths.push(PathBuf::from(
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
        ));
        paths.push(PathBuf::from(
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_chrome_path_must_exist() {
        let mut config = Config::default();
        config.browser.chrome_path = Some("/definitely/not/here/chrome".to_string());
        assert!(Session::chrome_binary(&config).is_none());
    }

    #[test]
    fn test_candidate_list_is_absolute() {
        for path in chrome_candidates() {
            assert!(path.is_absolute(), "{} not absolute", path.display());
        }
    }

    // chromiumoxide keeps the headless mode private, but it shows up in the
    // config's Debug output as `headless: True | False | New`.

    #[test]
    fn test_headed_config_launches_with_head() {
        let mut config = Config::default();
        config.browser.headed = true;

        let profile = TempDir::new().unwrap();
        let cdp = launch_config(&config, std::path::Path::new("/usr/bin/chromium"), profile.path())
            .unwrap();
        assert!(
            format!("{:?}", cdp).contains("headless: False"),
            "headed config must not launch headless: {:?}",
            cdp
        );
    }

    #[test]
    fn test_headless_config_uses_new_headless_mode() {
        let config = Config::default();

        let profile = TempDir::new().unwrap();
        let cdp = launch_config(&config, std::path::Path::new("/usr/bin/chromium"), profile.path())
            .unwrap();
        let debug = format!("{:?}", cdp);
        assert!(debug.contains("headless: New"), "{}", debug);
        // The mode is set through the builder, not a duplicate raw flag
        assert!(!debug.contains("--headless"), "{}", debug);
    }
}
