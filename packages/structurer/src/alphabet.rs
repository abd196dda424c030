//! The numeral alphabet used by heading markers.
//!
//! Taiwanese regulatory documents number their divisions with a small fixed
//! set of ideographic numerals. The set is modeled as an explicit injectable
//! table so other numbering dialects can be supported without touching the
//! classifier's control flow. Numerals outside the table never match a
//! heading pattern; that is a documented limitation, not an error.

/// Ideographic numerals used by the default document dialect.
pub const DEFAULT_NUMERALS: &str = "一二三四五六七八九十百千〇○";

/// Immutable table of numeral characters accepted in heading markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralAlphabet {
    numerals: String,
}

impl NumeralAlphabet {
    /// Create an alphabet from a set of numeral characters.
    #[must_use]
    pub fn new(numerals: impl Into<String>) -> Self {
        Self {
            numerals: numerals.into(),
        }
    }

    /// Whether a character is part of this alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.numerals.contains(c)
    }

    /// The raw numeral characters.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.numerals
    }

    /// Render the alphabet as the body of a regex character class.
    ///
    /// Each character is escaped individually so metacharacters in a custom
    /// alphabet cannot change the class structure.
    #[must_use]
    pub(crate) fn to_char_class(&self) -> String {
        self.numerals
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect()
    }
}

impl Default for NumeralAlphabet {
    fn default() -> Self {
        Self::new(DEFAULT_NUMERALS)
    }
}
