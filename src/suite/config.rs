use crate::wait::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, Wait};
use std::time::Duration;

/// Environment variable overriding the calculator page location
pub const PAGE_ENV: &str = "CALCULATOR_PAGE";

/// Calculator page shipped with the crate's test fixtures
pub const DEFAULT_PAGE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/calculator/index.html");

/// Settings shared by every scenario of a suite run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// File path or URL of the calculator page
    pub page: String,

    /// Bound on retrying a control lookup while the control is missing
    pub lookup_timeout: Duration,

    /// Bound on waiting for the result element
    pub result_timeout: Duration,

    /// Bound on waiting for the ready marker after a load
    pub ready_timeout: Duration,

    pub poll_interval: Duration,

    /// Maximum acceptable load-to-ready time
    pub load_budget: Duration,

    /// Pause between rows of table-driven scenarios, so UI transitions don't overlap
    pub settle_delay: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            lookup_timeout: DEFAULT_TIMEOUT,
            result_timeout: DEFAULT_TIMEOUT,
            ready_timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            load_budget: Duration::from_secs(3),
            settle_delay: Duration::from_secs(1),
        }
    }
}

impl SuiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the page taken from `CALCULATOR_PAGE` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(page) = lookup(PAGE_ENV).filter(|p| !p.trim().is_empty()) {
            config.page = page;
        }
        config
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }

    pub fn result_timeout(mut self, timeout: Duration) -> Self {
        self.result_timeout = timeout;
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn lookup_wait(&self) -> Wait {
        Wait::new(self.lookup_timeout).poll_interval(self.poll_interval)
    }

    pub fn result_wait(&self) -> Wait {
        Wait::new(self.result_timeout).poll_interval(self.poll_interval)
    }

    pub fn ready_wait(&self) -> Wait {
        Wait::new(self.ready_timeout).poll_interval(self.poll_interval)
    }
}
