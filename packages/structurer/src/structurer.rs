//! High-level pipeline facade.
//!
//! Wires the normalizer, classifier, hierarchy buffer and serializers into
//! the two rendering targets. A `Structurer` is cheap to build and holds no
//! per-document state, so one instance can process any number of documents
//! (in parallel at the caller's discretion).

use crate::alphabet::NumeralAlphabet;
use crate::classify::Classifier;
use crate::error::Result;
use crate::hierarchy::{Document, HierarchyBuffer, NestingProfile};
use crate::markdown;
use crate::normalize::{clean_text, text_from_bytes};
use crate::tree::{build_tree, TreeDocument};

/// Document structuring pipeline.
#[derive(Debug, Default)]
pub struct Structurer {
    classifier: Classifier,
}

impl Structurer {
    /// Create a structurer with the default numeral alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a structurer for a different numbering dialect.
    ///
    /// # Errors
    /// `StructurerError::InvalidAlphabet` if the alphabet cannot be compiled
    /// into classifier patterns.
    pub fn with_alphabet(alphabet: &NumeralAlphabet) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new(alphabet)?,
        })
    }

    /// Fold an ordered sequence of text units into a buffered document.
    ///
    /// Units carrying embedded newlines are split into lines first; an empty
    /// unit counts as a blank line.
    #[must_use]
    pub fn structure<'a, I>(&self, units: I, profile: NestingProfile) -> Document
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut buffer = HierarchyBuffer::new(profile);
        for unit in units {
            for line in unit.split('\n') {
                buffer.observe(self.classifier.classify(line));
            }
        }
        buffer.finish()
    }

    /// Render text units as canonically formatted markdown.
    #[must_use]
    pub fn markdown_from_units<'a, I>(&self, units: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        markdown::render(&self.structure(units, NestingProfile::Markdown))
    }

    /// Clean a raw text blob and render it as markdown.
    #[must_use]
    pub fn markdown_from_text(&self, text: &str) -> String {
        let cleaned = clean_text(text);
        self.markdown_from_units(cleaned.lines())
    }

    /// Decode bytes as UTF-8 and render the text as markdown.
    ///
    /// # Errors
    /// `StructurerError::InvalidEncoding` for invalid UTF-8; no partial
    /// output is produced.
    pub fn markdown_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        Ok(self.markdown_from_text(text_from_bytes(bytes)?))
    }

    /// Render text units as a nested document tree.
    #[must_use]
    pub fn tree_from_units<'a, I>(&self, name: &str, units: I) -> TreeDocument
    where
        I: IntoIterator<Item = &'a str>,
    {
        build_tree(name, &self.structure(units, NestingProfile::Tree))
    }

    /// Clean a raw text blob and render it as a nested document tree.
    #[must_use]
    pub fn tree_from_text(&self, name: &str, text: &str) -> TreeDocument {
        let cleaned = clean_text(text);
        self.tree_from_units(name, cleaned.lines())
    }

    /// Decode bytes as UTF-8 and render the text as a nested document tree.
    ///
    /// # Errors
    /// `StructurerError::InvalidEncoding` for invalid UTF-8.
    pub fn tree_from_bytes(&self, name: &str, bytes: &[u8]) -> Result<TreeDocument> {
        Ok(self.tree_from_text(name, text_from_bytes(bytes)?))
    }
}

/// Render a text blob as markdown with the default alphabet.
#[must_use]
pub fn to_markdown(text: &str) -> String {
    Structurer::new().markdown_from_text(text)
}

/// Render a text blob as a nested document tree with the default alphabet.
#[must_use]
pub fn to_tree(name: &str, text: &str) -> TreeDocument {
    Structurer::new().tree_from_text(name, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_from_text_cleans_first() {
        let md = to_markdown("> 一、總則\r\n本規定依法訂定。   \n");
        assert_eq!(md, "## 一、總則\n\n本規定依法訂定。\n");
    }

    #[test]
    fn test_markdown_from_bytes_rejects_invalid_utf8() {
        let structurer = Structurer::new();
        assert!(structurer.markdown_from_bytes(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_tree_from_bytes() {
        let structurer = Structurer::new();
        let doc = match structurer.tree_from_bytes("doc", "一、總則\n內文".as_bytes()) {
            Ok(d) => d,
            Err(e) => unreachable!("valid UTF-8: {e}"),
        };
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].heading, "一、總則");
    }

    #[test]
    fn test_units_with_embedded_newlines_split() {
        let structurer = Structurer::new();
        let md = structurer.markdown_from_units(["一、總則\n內文"]);
        assert_eq!(md, "## 一、總則\n\n內文\n");
    }

    #[test]
    fn test_custom_alphabet_pipeline() {
        let structurer = match Structurer::with_alphabet(&NumeralAlphabet::new("壹貳參")) {
            Ok(s) => s,
            Err(e) => unreachable!("alphabet compiles: {e}"),
        };
        let md = structurer.markdown_from_units(["壹、總則"]);
        assert_eq!(md, "## 壹、總則\n");
    }
}
