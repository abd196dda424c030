//! Markdown rendering of buffered documents.
//!
//! Headings render as `#`/`##`/`###` lines with exactly one blank line on
//! either side; numbered items render as `1. body` list lines separated from
//! surrounding prose by forced blanks so markdown renderers never glue prose
//! onto a list. Sub-item numerals always normalize to full-width brackets.
//! Rendering is idempotent: feeding the output back through the pipeline
//! reproduces it byte for byte, because rendered headings no longer match any
//! heading pattern and the blank-line discipline is stable.

use regex::Regex;
use std::sync::LazyLock;

use crate::classify::{ClassifiedLine, HeadingLevel};
use crate::hierarchy::{Container, Document, Node};

/// Runs of three or more newlines (two or more blank lines).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// A rendered numbered-list line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("valid regex"));

/// Render a buffered document as canonically formatted markdown.
///
/// The result is trimmed and ends with exactly one trailing newline; it
/// never contains a run of two or more blank lines.
#[must_use]
pub fn render(document: &Document) -> String {
    let mut out: Vec<String> = Vec::new();

    for node in &document.preamble.children {
        emit_node(&mut out, node);
    }
    for entry in &document.entries {
        emit_container(&mut out, entry);
    }

    let joined = out.join("\n");
    let collapsed = BLANK_RUN.replace_all(&joined, "\n\n");
    let mut text = collapsed.trim().to_string();
    text.push('\n');
    text
}

fn emit_container(out: &mut Vec<String>, container: &Container) {
    emit_heading(out, container);
    for node in &container.children {
        emit_node(out, node);
    }
}

fn emit_node(out: &mut Vec<String>, node: &Node) {
    match node {
        Node::Child(child) => emit_container(out, child),
        Node::Line(line) => emit_line(out, line),
    }
}

/// Emit a heading with one blank line before (unless first) and one after.
fn emit_heading(out: &mut Vec<String>, container: &Container) {
    let body = match container.level {
        HeadingLevel::Part => format!("第{}編 {}", container.numeral, container.title),
        HeadingLevel::Article => format!("{}、{}", container.numeral, container.title),
        HeadingLevel::SubItem => format!("（{}）{}", container.numeral, container.title),
        // The preamble has no heading; numbered items and plain lines never
        // become containers.
        HeadingLevel::NumberedItem | HeadingLevel::Plain => return,
    };
    let Some(depth) = container.level.heading_depth() else {
        return;
    };
    let heading = format!("{} {body}", "#".repeat(depth));
    ensure_blank(out);
    out.push(heading.trim_end().to_string());
    out.push(String::new());
}

fn emit_line(out: &mut Vec<String>, line: &ClassifiedLine) {
    if line.level == HeadingLevel::NumberedItem {
        // Force a blank before a list run that follows prose. Headings are
        // already followed by a blank line.
        if out
            .last()
            .is_some_and(|prev| !prev.is_empty() && !LIST_LINE.is_match(prev))
        {
            out.push(String::new());
        }
        out.push(format!("{}. {}", line.numeral, line.title));
        return;
    }

    if line.raw.trim().is_empty() {
        // Keep at most one blank line.
        ensure_blank(out);
        return;
    }

    // Force a blank after a list run before prose, unless the line is an
    // indented continuation of the list item.
    if out.last().is_some_and(|prev| LIST_LINE.is_match(prev))
        && !line.raw.starts_with(char::is_whitespace)
    {
        out.push(String::new());
    }
    out.push(line.raw.clone());
}

/// Append a blank line unless the output is empty or already ends in one.
fn ensure_blank(out: &mut Vec<String>) {
    if out.last().is_some_and(|prev| !prev.is_empty()) {
        out.push(String::new());
    }
}
