//! Assertion helpers that fail a scenario with `AssertionFailed` instead of panicking

use crate::error::{BrowserError, Result};
use std::fmt::Debug;

pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition { Ok(()) } else { Err(BrowserError::AssertionFailed(message())) }
}

pub fn ensure_eq<T: PartialEq + Debug>(actual: T, expected: T, what: &str) -> Result<()> {
    ensure(actual == expected, || format!("{}: expected {:?}, got {:?}", what, expected, actual))
}

pub fn ensure_contains(haystack: &str, needle: &str) -> Result<()> {
    ensure(haystack.contains(needle), || format!("expected '{}' in '{}'", needle, haystack))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_contains() {
        assert!(ensure_contains("Résultat: 15", "Résultat: 15").is_ok());

        let err = ensure_contains("Résultat: 14", "Résultat: 15").unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: expected 'Résultat: 15' in 'Résultat: 14'");
    }

    #[test]
    fn test_ensure_eq() {
        assert!(ensure_eq("400px", "400px", "max-width").is_ok());

        let err = ensure_eq("380px", "400px", "max-width").unwrap_err();
        assert_eq!(err.to_string(), "Assertion failed: max-width: expected \"400px\", got \"380px\"");
    }
}
