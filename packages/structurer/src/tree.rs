//! Nested tree rendering of buffered documents.
//!
//! The tree target is a two-level document object: sections (articles) with
//! sub-sections (sub-items) holding verbatim content lines. Content that
//! precedes any explicit heading lands in sentinel containers; a sentinel is
//! included in the output only if it ever received something.

use serde::{Deserialize, Serialize};

use crate::classify::HeadingLevel;
use crate::hierarchy::{Container, Document, Node};

/// Sentinel heading for content preceding any section heading.
pub const DEFAULT_SECTION_HEADING: &str = "文件前言與大標";

/// Sentinel sub-heading for section content preceding any sub-heading.
pub const DEFAULT_SUB_HEADING: &str = "本文";

/// A structured document ready for interchange serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDocument {
    /// Document name, supplied by the caller.
    pub name: String,

    /// Top-level sections in order of appearance.
    pub sections: Vec<Section>,
}

/// An article-level section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Verbatim heading line, or [`DEFAULT_SECTION_HEADING`].
    pub heading: String,

    /// Sub-sections in order of appearance.
    pub sub_sections: Vec<SubSection>,
}

/// A sub-item-level sub-section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    /// Verbatim sub-heading line, or [`DEFAULT_SUB_HEADING`].
    pub sub_heading: String,

    /// Verbatim content lines, empty units skipped.
    pub content: Vec<String>,
}

impl SubSection {
    fn body(content: Vec<String>) -> Self {
        Self {
            sub_heading: DEFAULT_SUB_HEADING.to_string(),
            content,
        }
    }
}

/// Build the tree object for a document buffered with
/// [`NestingProfile::Tree`](crate::hierarchy::NestingProfile::Tree).
///
/// A document with no recognized headings produces a single sentinel
/// section/sub-section pair holding all lines; a document whose first line
/// is a section heading omits the sentinels entirely. A sub-item arriving
/// before any section heading becomes a sub-section of the sentinel
/// front-matter section.
#[must_use]
pub fn build_tree(name: impl Into<String>, document: &Document) -> TreeDocument {
    let mut front_subs: Vec<SubSection> = Vec::new();

    let front: Vec<String> = collect_content(&document.preamble);
    if !front.is_empty() {
        front_subs.push(SubSection::body(front));
    }

    let mut sections = Vec::new();
    for entry in &document.entries {
        // Orphan sub-items (no enclosing section yet) stay with the front
        // matter; they only ever precede the first section.
        if entry.level == HeadingLevel::SubItem {
            front_subs.push(SubSection {
                sub_heading: entry.raw.trim().to_string(),
                content: collect_content(entry),
            });
        } else {
            sections.push(section_from(entry));
        }
    }

    if !front_subs.is_empty() {
        sections.insert(
            0,
            Section {
                heading: DEFAULT_SECTION_HEADING.to_string(),
                sub_sections: front_subs,
            },
        );
    }

    TreeDocument {
        name: name.into(),
        sections,
    }
}

/// Convert an article container into a section.
///
/// Content lines before the first sub-item flush into a default `本文`
/// sub-section, which is emitted only if non-empty.
fn section_from(container: &Container) -> Section {
    let mut sub_sections = Vec::new();
    let mut body: Vec<String> = Vec::new();

    for node in &container.children {
        match node {
            Node::Line(line) => {
                let text = line.raw.trim();
                if !text.is_empty() {
                    body.push(text.to_string());
                }
            }
            Node::Child(sub) => {
                if !body.is_empty() {
                    sub_sections.push(SubSection::body(std::mem::take(&mut body)));
                }
                sub_sections.push(SubSection {
                    sub_heading: sub.raw.trim().to_string(),
                    content: collect_content(sub),
                });
            }
        }
    }
    if !body.is_empty() {
        sub_sections.push(SubSection::body(body));
    }

    Section {
        heading: container.raw.trim().to_string(),
        sub_sections,
    }
}

/// Flatten a container's content lines, skipping empty units.
fn collect_content(container: &Container) -> Vec<String> {
    container
        .content_lines()
        .into_iter()
        .map(|line| line.raw.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::hierarchy::{HierarchyBuffer, NestingProfile};
    use pretty_assertions::assert_eq;

    fn tree(name: &str, units: &[&str]) -> TreeDocument {
        let classifier = Classifier::default();
        let mut buffer = HierarchyBuffer::new(NestingProfile::Tree);
        for unit in units {
            buffer.observe(classifier.classify(unit));
        }
        build_tree(name, &buffer.finish())
    }

    #[test]
    fn test_single_heading_has_no_sentinels() {
        let doc = tree("doc", &["三、動物與環境"]);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].heading, "三、動物與環境");
        assert!(doc.sections[0].sub_sections.is_empty());
    }

    #[test]
    fn test_document_without_headings_uses_sentinel_pair() {
        let doc = tree("doc", &["第一行", "第二行"]);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].heading, DEFAULT_SECTION_HEADING);
        assert_eq!(doc.sections[0].sub_sections.len(), 1);
        let sub = &doc.sections[0].sub_sections[0];
        assert_eq!(sub.sub_heading, DEFAULT_SUB_HEADING);
        assert_eq!(sub.content, vec!["第一行", "第二行"]);
    }

    #[test]
    fn test_content_before_sub_item_goes_to_default_sub_section() {
        let doc = tree(
            "doc",
            &[
                "一、總則",
                "本規定依動物保護法訂定。",
                "(一) 適用範圍",
                "本規定適用於公立動物收容處所。",
                "二、權責",
            ],
        );
        assert_eq!(doc.sections.len(), 2);

        let first = &doc.sections[0];
        assert_eq!(first.heading, "一、總則");
        assert_eq!(first.sub_sections.len(), 2);
        assert_eq!(first.sub_sections[0].sub_heading, DEFAULT_SUB_HEADING);
        assert_eq!(first.sub_sections[0].content, vec!["本規定依動物保護法訂定。"]);
        assert_eq!(first.sub_sections[1].sub_heading, "(一) 適用範圍");
        assert_eq!(
            first.sub_sections[1].content,
            vec!["本規定適用於公立動物收容處所。"]
        );

        let second = &doc.sections[1];
        assert_eq!(second.heading, "二、權責");
        assert!(second.sub_sections.is_empty());
    }

    #[test]
    fn test_sub_heading_kept_verbatim() {
        // Half-width brackets are not normalized in the tree target.
        let doc = tree("doc", &["一、總則", "(一) 適用範圍"]);
        assert_eq!(doc.sections[0].sub_sections[0].sub_heading, "(一) 適用範圍");
    }

    #[test]
    fn test_explicit_empty_sub_section_is_kept() {
        let doc = tree("doc", &["一、總則", "(一) 適用範圍", "二、權責"]);
        assert_eq!(doc.sections[0].sub_sections.len(), 1);
        assert!(doc.sections[0].sub_sections[0].content.is_empty());
    }

    #[test]
    fn test_numbered_items_stay_content_lines() {
        let doc = tree("doc", &["一、罰則", "(一) 處分", "1.警告", "2.罰鍰"]);
        let sub = &doc.sections[0].sub_sections[0];
        assert_eq!(sub.content, vec!["1.警告", "2.罰鍰"]);
    }

    #[test]
    fn test_orphan_sub_item_joins_front_matter_section() {
        let doc = tree("doc", &["(一) 孤立子項", "內容", "一、總則"]);
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].heading, DEFAULT_SECTION_HEADING);
        assert_eq!(doc.sections[0].sub_sections.len(), 1);
        assert_eq!(doc.sections[0].sub_sections[0].sub_heading, "(一) 孤立子項");
        assert_eq!(doc.sections[0].sub_sections[0].content, vec!["內容"]);
        assert_eq!(doc.sections[1].heading, "一、總則");
    }

    #[test]
    fn test_front_matter_content_precedes_orphan_sub_section() {
        let doc = tree("doc", &["前言", "(一) 孤立子項", "內容"]);
        assert_eq!(doc.sections.len(), 1);
        let front = &doc.sections[0];
        assert_eq!(front.heading, DEFAULT_SECTION_HEADING);
        assert_eq!(front.sub_sections.len(), 2);
        assert_eq!(front.sub_sections[0].sub_heading, DEFAULT_SUB_HEADING);
        assert_eq!(front.sub_sections[0].content, vec!["前言"]);
        assert_eq!(front.sub_sections[1].sub_heading, "(一) 孤立子項");
        assert_eq!(front.sub_sections[1].content, vec!["內容"]);
    }

    #[test]
    fn test_part_line_is_content_in_tree_target() {
        let doc = tree("doc", &["第一編 總則", "一、名稱"]);
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].heading, DEFAULT_SECTION_HEADING);
        assert_eq!(doc.sections[0].sub_sections[0].content, vec!["第一編 總則"]);
        assert_eq!(doc.sections[1].heading, "一、名稱");
    }

    #[test]
    fn test_empty_units_skipped() {
        let doc = tree("doc", &["一、總則", "", "內文", ""]);
        assert_eq!(doc.sections[0].sub_sections[0].content, vec!["內文"]);
    }

    #[test]
    fn test_interchange_field_layout() {
        let doc = tree("規定.docx", &["一、總則", "內文"]);
        let value = match serde_json::to_value(&doc) {
            Ok(v) => v,
            Err(e) => unreachable!("tree serializes: {e}"),
        };
        assert_eq!(
            value,
            serde_json::json!({
                "name": "規定.docx",
                "sections": [{
                    "heading": "一、總則",
                    "sub_sections": [{
                        "sub_heading": "本文",
                        "content": ["內文"],
                    }],
                }],
            })
        );
    }
}
