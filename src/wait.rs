//! Bounded polling waits
//!
//! `Wait` repeatedly evaluates a condition until it yields a value or the deadline
//! elapses. It backs both the page-ready wait and the result-ready wait.

use crate::error::{BrowserError, Result};
use std::time::{Duration, Instant};

/// Default timeout for element waits (10 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval (100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A bounded wait: poll every `poll_interval` until `timeout` has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Wait {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Poll `condition` until it returns `Ok(Some(_))`.
    ///
    /// `Ok(None)` means "not yet" and is retried; `Err` aborts the wait
    /// immediately. The condition always runs at least once, even with a zero
    /// timeout. On expiry the error names `what` was awaited.
    pub fn until<T, F>(&self, what: &str, mut condition: F) -> Result<T>
    where
        F: FnMut() -> Result<Option<T>>,
    {
        let start = Instant::now();
        loop {
            if let Some(value) = condition()? {
                log::debug!("{} ready after {:?}", what, start.elapsed());
                return Ok(value);
            }

            let elapsed = start.elapsed();
            if elapsed >= self.timeout {
                return Err(BrowserError::Timeout {
                    what: what.to_string(),
                    waited: self.timeout,
                });
            }

            std::thread::sleep(self.poll_interval.min(self.timeout - elapsed));
        }
    }

    /// Retry a lookup while it reports `ElementNotFound`.
    ///
    /// Any other error (crashed tab, lost connection, failed evaluation)
    /// is returned immediately instead of being polled into a timeout.
    pub fn until_found<T, F>(&self, what: &str, mut lookup: F) -> Result<T>
    where
        F: FnMut() -> Result<T>,
    {
        self.until(what, || match lookup() {
            Ok(value) => Ok(Some(value)),
            Err(BrowserError::ElementNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_first_ready_value() {
        let mut calls = 0;
        let wait = Wait::new(Duration::from_secs(1)).poll_interval(Duration::from_millis(1));

        let value = wait
            .until("counter", || {
                calls += 1;
                Ok((calls == 3).then_some(calls))
            })
            .unwrap();

        assert_eq!(value, 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_times_out() {
        let wait = Wait::new(Duration::from_millis(30)).poll_interval(Duration::from_millis(5));
        let start = Instant::now();

        let err = wait.until::<(), _>("never", || Ok(None)).unwrap_err();

        assert!(start.elapsed() >= Duration::from_millis(30));
        match err {
            BrowserError::Timeout { what, waited } => {
                assert_eq!(what, "never");
                assert_eq!(waited, Duration::from_millis(30));
            }
            other => panic!("Expected timeout, got {other}"),
        }
    }

    #[test]
    fn test_zero_timeout_checks_once() {
        let mut calls = 0;
        let result = Wait::new(Duration::ZERO).until("once", || {
            calls += 1;
            Ok(Some(()))
        });

        assert!(result.is_ok());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_condition_error_aborts_wait() {
        let mut calls = 0;
        let err = Wait::new(Duration::from_secs(5))
            .until::<(), _>("broken", || {
                calls += 1;
                Err(BrowserError::EvaluationFailed("tab crashed".to_string()))
            })
            .unwrap_err();

        assert_eq!(calls, 1);
        assert!(matches!(err, BrowserError::EvaluationFailed(_)));
    }

    #[test]
    fn test_until_found_retries_not_found() {
        let mut calls = 0;
        let wait = Wait::new(Duration::from_secs(1)).poll_interval(Duration::from_millis(1));

        let value = wait
            .until_found("#num1", || {
                calls += 1;
                if calls < 3 {
                    Err(BrowserError::ElementNotFound("#num1".to_string()))
                } else {
                    Ok("input")
                }
            })
            .unwrap();

        assert_eq!(value, "input");
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_until_found_surfaces_other_errors_at_once() {
        let mut calls = 0;
        let start = Instant::now();

        let err = Wait::new(Duration::from_secs(10))
            .until_found::<(), _>("#result", || {
                calls += 1;
                Err(BrowserError::EvaluationFailed("connection closed".to_string()))
            })
            .unwrap_err();

        assert_eq!(calls, 1);
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(matches!(err, BrowserError::EvaluationFailed(ref msg) if msg == "connection closed"));
    }

    #[test]
    fn test_until_found_times_out_when_never_found() {
        let wait = Wait::new(Duration::from_millis(20)).poll_interval(Duration::from_millis(5));

        let err = wait
            .until_found::<(), _>("#missing", || Err(BrowserError::ElementNotFound("#missing".to_string())))
            .unwrap_err();

        assert!(err.is_timeout());
    }
}
