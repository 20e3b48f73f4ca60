use crate::{browser::config::LaunchOptions,
            error::{BrowserError, Result},
            wait::Wait};
use headless_chrome::{Browser, Element, Tab, browser::tab::NoElementFound,
                      protocol::cdp::Page::CaptureScreenshotFormatOption};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Browser session that owns one Chrome/Chromium instance and drives a single tab.
///
/// The Chrome process is killed when the session is dropped, so a fixture
/// holding it releases the browser whatever the scenarios did.
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance (kept alive for the tab's lifetime)
    #[allow(dead_code)]
    browser: Browser,

    /// The tab every operation runs against
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Keep the browser alive through slow suites (default is 30 seconds)
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.sandbox = options.sandbox;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if options.disable_dev_shm {
            launch_opts.args.push(OsStr::new("--disable-dev-shm-usage"));
        }
        if options.disable_gpu {
            launch_opts.args.push(OsStr::new("--disable-gpu"));
        }

        log::info!(
            "Launching browser (headless: {}, sandbox: {}, size: {}x{})",
            options.headless,
            options.sandbox,
            options.window_width,
            options.window_height
        );

        let browser = Browser::new(launch_opts).map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Navigate to a URL without waiting for the load to finish
    pub fn navigate(&self, url: &str) -> Result<()> {
        log::debug!("Navigating to {}", url);
        self.tab
            .navigate_to(url)
            .map_err(|e| BrowserError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| BrowserError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Find an element by CSS selector, without waiting.
    ///
    /// Only a missing element maps to `ElementNotFound`; protocol failures
    /// (crashed tab, closed connection) map to `EvaluationFailed`.
    pub fn find_element(&self, css_selector: &str) -> Result<Element<'_>> {
        self.tab
            .find_element(css_selector)
            .map_err(|e| lookup_error(css_selector, e))
    }

    /// Retry the lookup until the element is present or the wait expires
    pub fn wait_for_element(&self, css_selector: &str, wait: Wait) -> Result<Element<'_>> {
        wait.until_found(css_selector, || self.find_element(css_selector))
    }

    /// Current document title
    pub fn title(&self) -> Result<String> {
        self.tab.get_title().map_err(|e| BrowserError::EvaluationFailed(format!("Failed to read title: {}", e)))
    }

    /// Capture the visible viewport as PNG bytes
    pub fn screenshot(&self) -> Result<Vec<u8>> {
        self.tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| BrowserError::ScreenshotFailed(e.to_string()))
    }

    /// Close the tab and shut the browser down
    pub fn close(self) -> Result<()> {
        log::info!("Closing browser session");
        // Dropping `self.browser` afterwards kills the Chrome process
        let _ = self.tab.close(false);
        Ok(())
    }
}

fn lookup_error(css_selector: &str, error: anyhow::Error) -> BrowserError {
    if error.downcast_ref::<NoElementFound>().is_some() {
        BrowserError::ElementNotFound(format!("Element '{}' not found", css_selector))
    } else {
        BrowserError::EvaluationFailed(format!("Lookup of '{}' failed: {}", css_selector, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_not_found() {
        let err = lookup_error("#num1", anyhow::Error::new(NoElementFound {}));
        assert!(matches!(err, BrowserError::ElementNotFound(ref msg) if msg.contains("#num1")));
    }

    #[test]
    fn test_lookup_error_protocol_failure() {
        let err = lookup_error("#result", anyhow::anyhow!("Unable to make method calls because underlying connection is closed"));

        match err {
            BrowserError::EvaluationFailed(msg) => {
                assert!(msg.contains("#result"));
                assert!(msg.contains("connection is closed"));
            }
            other => panic!("Expected EvaluationFailed, got {other}"),
        }
    }

    // Integration tests (require Chrome to be installed)
    #[test]
    #[ignore] // Ignore by default, run with: cargo test -- --ignored
    fn test_launch_browser() {
        let result = BrowserSession::launch(LaunchOptions::new().headless(true));
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_navigate_and_title() {
        let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");

        session
            .navigate("data:text/html,<html><head><title>Hello</title></head><body></body></html>")
            .expect("Failed to navigate");
        session.wait_for_navigation().expect("Navigation did not finish");

        assert_eq!(session.title().expect("Failed to read title"), "Hello");
    }

    #[test]
    #[ignore]
    fn test_wait_for_missing_element_times_out() {
        let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");
        session.navigate("about:blank").expect("Failed to navigate");

        let err = session
            .wait_for_element("#missing", Wait::new(Duration::from_millis(300)))
            .err()
            .expect("Expected a timeout");
        assert!(err.is_timeout());
    }
}
