use std::{path::PathBuf, time::Duration};
use thiserror::Error;

/// Errors raised while driving the browser or checking the calculator page
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Chrome could not be started or its first tab could not be opened
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// The calculator page is a local path that does not exist
    #[error("Calculator page not found at {} (set CALCULATOR_PAGE or pass --page)", .0.display())]
    PageNotFound(PathBuf),

    /// A DOM lookup failed because the expected element (or select option) is absent
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A bounded wait expired before its condition held
    #[error("Timed out after {waited:?} waiting for {what}")]
    Timeout { what: String, waited: Duration },

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    /// Click, typing or another element interaction was rejected by the browser
    #[error("{action} failed: {reason}")]
    InteractionFailed { action: String, reason: String },

    #[error("Unknown operation '{0}' (expected add, subtract, multiply or divide)")]
    UnknownOperation(String),

    /// An observed value did not match what the scenario expected
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Failed to capture screenshot: {0}")]
    ScreenshotFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BrowserError {
    pub(crate) fn interaction(action: impl Into<String>, reason: impl ToString) -> Self {
        Self::InteractionFailed {
            action: action.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came from a bounded wait expiring
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
