use std::fmt;

/// Label the page puts in front of a computed value
pub const RESULT_LABEL: &str = "Résultat:";

/// Label the page puts in front of an error message
pub const ERROR_LABEL: &str = "Erreur:";

/// The two shapes of text the result element can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationOutcome {
    /// "Résultat: 15"
    Value(String),
    /// "Erreur: Division par zéro"
    Error(String),
}

impl CalculationOutcome {
    /// Classify raw result text. Returns `None` for text carrying neither label.
    pub fn parse(text: &str) -> Option<Self> {
        if let Some((_, rest)) = text.split_once(RESULT_LABEL) {
            return Some(Self::Value(rest.trim().to_string()));
        }
        if let Some((_, rest)) = text.split_once(ERROR_LABEL) {
            return Some(Self::Error(rest.trim().to_string()));
        }
        None
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The numeric value, when the page reported one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Value(v) => v.replace(',', ".").parse().ok(),
            Self::Error(_) => None,
        }
    }
}

impl fmt::Display for CalculationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{} {}", RESULT_LABEL, v),
            Self::Error(e) => write!(f, "{} {}", ERROR_LABEL, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        let outcome = CalculationOutcome::parse("Résultat: 15").unwrap();
        assert_eq!(outcome, CalculationOutcome::Value("15".to_string()));
        assert_eq!(outcome.as_f64(), Some(15.0));
        assert!(!outcome.is_error());
    }

    #[test]
    fn test_parse_error() {
        let outcome = CalculationOutcome::parse("Erreur: Division par zéro").unwrap();
        assert_eq!(outcome, CalculationOutcome::Error("Division par zéro".to_string()));
        assert!(outcome.is_error());
        assert_eq!(outcome.as_f64(), None);
    }

    #[test]
    fn test_parse_with_surrounding_text() {
        let outcome = CalculationOutcome::parse("\n  Résultat:   -2.5 \n").unwrap();
        assert_eq!(outcome.as_f64(), Some(-2.5));
        assert_eq!(outcome.to_string(), "Résultat: -2.5");
    }

    #[test]
    fn test_parse_unlabelled_text() {
        assert_eq!(CalculationOutcome::parse(""), None);
        assert_eq!(CalculationOutcome::parse("15"), None);
    }
}
