//! # Quantity Error Types Module
//!
//! This module defines the error type raised when quantity text cannot be read
//! as an exact fraction. Ingredient lines themselves never fail to parse; only
//! stored quantity values that are malformed surface as errors.

/// Errors raised while reading quantity text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text that is neither an integer nor a decimal (e.g. "etwas")
    InvalidNumber(String),
    /// Text containing a `/` whose parts are not numeric (e.g. "a/b", "1/")
    InvalidFraction(String),
    /// A fraction with a zero denominator (e.g. "3/0")
    DivisionByZero(String),
    /// A number in the text larger than `u64::MAX`
    Overflow(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(text) => write!(f, "Invalid number: '{text}'"),
            ParseError::InvalidFraction(text) => write!(f, "Invalid fraction: '{text}'"),
            ParseError::DivisionByZero(text) => write!(f, "Division by zero in fraction: '{text}'"),
            ParseError::Overflow(text) => write!(f, "Quantity out of range: '{text}'"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_input() {
        let err = ParseError::InvalidFraction("a/b".to_string());
        assert_eq!(err.to_string(), "Invalid fraction: 'a/b'");

        let err = ParseError::DivisionByZero("3/0".to_string());
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(ParseError::InvalidNumber("etwas".to_string()))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<ParseError>().is_some());
    }
}
