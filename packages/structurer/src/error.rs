//! Error types for the structurer.
//!
//! Heading misses and out-of-alphabet numerals are not errors (they degrade
//! to plain text); only conditions under which no faithful output can be
//! produced surface here.

use thiserror::Error;

/// Main error type for the structurer library.
#[derive(Debug, Error)]
pub enum StructurerError {
    /// Input bytes are not valid UTF-8. No partial output is produced.
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// A custom numeral alphabet produced classifier patterns that do not compile.
    #[error("numeral alphabet does not compile into classifier patterns: {0}")]
    InvalidAlphabet(#[from] regex::Error),
}

/// Result type alias for structurer operations.
pub type Result<T> = std::result::Result<T, StructurerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_encoding_display() {
        let err = match std::str::from_utf8(&[0xff, 0xfe]) {
            Err(e) => StructurerError::from(e),
            Ok(_) => unreachable!("0xff 0xfe is not valid UTF-8"),
        };
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_invalid_alphabet_display() {
        let err = match regex::Regex::new("[") {
            Err(e) => StructurerError::from(e),
            Ok(_) => unreachable!("'[' is not a valid pattern"),
        };
        assert!(err.to_string().contains("alphabet"));
    }
}
