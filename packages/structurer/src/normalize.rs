//! Text normalization pre-pass.
//!
//! Converted source text arrives with conversion artifacts: stray HTML tags,
//! blockquote markers, mixed line endings and runs of blank lines. The
//! cleanup here runs before any classification so the classifier only ever
//! sees plain, consistently-terminated lines.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;

/// Inline HTML tags left behind by document conversion.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Blockquote markers at the start of a line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLOCKQUOTE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>\s?").expect("valid regex"));

/// Runs of three or more newlines (two or more blank lines).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Clean raw converted text before classification.
///
/// Steps, in order:
/// 1. remove inline HTML tags
/// 2. remove blockquote markers
/// 3. normalize all line endings to `\n`
/// 4. strip trailing whitespace on each line (leading whitespace is kept;
///    it carries meaning for list continuation lines)
/// 5. collapse runs of blank lines to a single blank line and trim the whole text
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = HTML_TAG.replace_all(text, "");
    let text = BLOCKQUOTE_MARKER.replace_all(&text, "");
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Decode input bytes as strict UTF-8.
///
/// # Returns
/// * `Ok(&str)` borrowing the input
/// * `Err(StructurerError::InvalidEncoding)` for any invalid sequence
pub fn text_from_bytes(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}
