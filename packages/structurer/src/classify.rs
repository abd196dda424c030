//! Line classification for regulatory document text.
//!
//! One text unit maps to one structural level plus a parsed numeral and
//! title. Patterns are tested in fixed priority order — Part, Article,
//! Sub-item, Numbered-item — and the first match wins; anything else is
//! plain content. Heading-shaped lines whose numeral falls outside the
//! configured alphabet degrade to plain content with a debug-level signal.

use regex::Regex;
use std::sync::LazyLock;

use crate::alphabet::NumeralAlphabet;
use crate::error::Result;

/// Structural level of a text unit, ordered by nesting depth.
///
/// `Part` is the shallowest division; `Plain` is not a heading at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    /// Top-level division, marked `第<numeral>編`.
    Part,
    /// Numbered clause within a part, marked `<numeral>、`.
    Article,
    /// Nested clause under an article, marked `(<numeral>)` or `（<numeral>）`.
    SubItem,
    /// Finest-grained enumerated entry, marked `<digit>.`.
    NumberedItem,
    /// Plain content.
    Plain,
}

impl HeadingLevel {
    /// Markdown heading depth for this level, if it renders as a heading.
    #[must_use]
    pub fn heading_depth(self) -> Option<usize> {
        match self {
            Self::Part => Some(1),
            Self::Article => Some(2),
            Self::SubItem => Some(3),
            Self::NumberedItem | Self::Plain => None,
        }
    }
}

/// One classified text unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Structural level the line was classified at.
    pub level: HeadingLevel,

    /// Raw numeral label (e.g. `三` or `1`). Empty for plain lines.
    pub numeral: String,

    /// Heading title or list-item body, possibly empty.
    pub title: String,

    /// The source line with trailing whitespace stripped and leading
    /// whitespace preserved.
    pub raw: String,
}

impl ClassifiedLine {
    /// Create a plain content line.
    #[must_use]
    pub fn plain(raw: impl Into<String>) -> Self {
        Self {
            level: HeadingLevel::Plain,
            numeral: String::new(),
            title: String::new(),
            raw: raw.into(),
        }
    }

    /// Whether this line carries a heading marker of any level.
    #[must_use]
    pub fn is_heading(&self) -> bool {
        self.level != HeadingLevel::Plain
    }
}

/// Numbered-item marker: `1. body`. The body must be non-empty; a bare
/// `3.` line is prose.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s*(.+?)\s*$").expect("valid regex"));

/// Part-shaped line with an arbitrary ideographic numeral, for diagnostics.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PART_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*第(\p{Han}{1,4})編").expect("valid regex"));

/// Article-shaped line with an arbitrary ideographic numeral, for diagnostics.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\p{Han}{1,4})、").expect("valid regex"));

/// Sub-item-shaped line with an arbitrary ideographic numeral, for diagnostics.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUB_ITEM_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[(（](\p{Han}{1,4})[)）]").expect("valid regex"));

/// Maps text units to structural levels.
///
/// Heading patterns are compiled once per classifier from the injected
/// numeral alphabet.
#[derive(Debug)]
pub struct Classifier {
    part: Regex,
    article: Regex,
    sub_item: Regex,
}

impl Classifier {
    /// Build a classifier for the given numeral alphabet.
    ///
    /// # Errors
    /// `StructurerError::InvalidAlphabet` if the alphabet cannot be compiled
    /// into the heading patterns.
    pub fn new(alphabet: &NumeralAlphabet) -> Result<Self> {
        let class = alphabet.to_char_class();
        Ok(Self {
            part: Regex::new(&format!(r"^\s*第([{class}]+)編\s*(.*?)\s*$"))?,
            article: Regex::new(&format!(r"^\s*([{class}]+)、\s*(.*?)\s*$"))?,
            sub_item: Regex::new(&format!(r"^\s*[(（]([{class}]+)[)）]\s*(.*?)\s*$"))?,
        })
    }

    /// Classify one text unit.
    ///
    /// Trailing whitespace (including any stray `\r`) is stripped from the
    /// stored raw line; leading whitespace is preserved.
    #[must_use]
    pub fn classify(&self, unit: &str) -> ClassifiedLine {
        let raw = unit.trim_end();

        for (pattern, level) in [
            (&self.part, HeadingLevel::Part),
            (&self.article, HeadingLevel::Article),
            (&self.sub_item, HeadingLevel::SubItem),
        ] {
            if let Some(captures) = pattern.captures(raw) {
                return ClassifiedLine {
                    level,
                    numeral: captures[1].to_string(),
                    title: captures[2].to_string(),
                    raw: raw.to_string(),
                };
            }
        }

        if let Some(captures) = NUMBERED_ITEM.captures(raw) {
            return ClassifiedLine {
                level: HeadingLevel::NumberedItem,
                numeral: captures[1].to_string(),
                title: captures[2].to_string(),
                raw: raw.to_string(),
            };
        }

        self.signal_out_of_alphabet(raw);
        ClassifiedLine::plain(raw)
    }

    /// Emit a soft diagnostic for heading-shaped lines whose numeral is
    /// outside the configured alphabet. Never fatal; the line stays plain.
    fn signal_out_of_alphabet(&self, raw: &str) {
        for (shape, marker) in [
            (&*PART_SHAPE, "part"),
            (&*ARTICLE_SHAPE, "article"),
            (&*SUB_ITEM_SHAPE, "sub-item"),
        ] {
            if let Some(captures) = shape.captures(raw) {
                tracing::debug!(
                    numeral = %&captures[1],
                    marker,
                    "numeral outside configured alphabet, keeping line as plain text"
                );
                return;
            }
        }
    }
}

impl Default for Classifier {
    #[allow(clippy::expect_used)] // Default alphabet is a known-good constant
    fn default() -> Self {
        Self::new(&NumeralAlphabet::default()).expect("default alphabet compiles")
    }
}
