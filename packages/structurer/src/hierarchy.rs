//! Flush-on-transition hierarchy buffering.
//!
//! As classified lines arrive, a stack holds one open container per level,
//! strictly deepening toward the top. A heading at level L first flushes
//! every open container at level L or deeper (deepest first, each attaching
//! to the next-shallower open container or to the document), then opens a
//! fresh container for the heading. Plain content always lands in the
//! deepest open container, or in the implicit preamble before the first
//! heading. Every container is flushed exactly once.

use crate::classify::{ClassifiedLine, HeadingLevel};

/// A child of a container: either nested structure or a content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A content line, retaining its classification for rendering.
    Line(ClassifiedLine),
    /// A flushed nested container.
    Child(Container),
}

/// One division of the document at a given heading level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Heading level this container was opened at.
    pub level: HeadingLevel,

    /// Raw numeral label from the heading (e.g. `三`).
    pub numeral: String,

    /// Heading title, possibly empty.
    pub title: String,

    /// The verbatim heading line (trailing whitespace stripped).
    pub raw: String,

    /// Whether this is an implicit (sentinel) container rather than one
    /// opened by an explicit heading.
    pub is_default: bool,

    /// Children in original order of appearance.
    pub children: Vec<Node>,
}

impl Container {
    /// Open a container for an explicit heading line.
    #[must_use]
    pub fn from_heading(line: ClassifiedLine) -> Self {
        Self {
            level: line.level,
            numeral: line.numeral,
            title: line.title,
            raw: line.raw,
            is_default: false,
            children: Vec::new(),
        }
    }

    /// The implicit preamble container absorbing content before any heading.
    #[must_use]
    pub fn preamble() -> Self {
        Self {
            level: HeadingLevel::Plain,
            numeral: String::new(),
            title: String::new(),
            raw: String::new(),
            is_default: true,
            children: Vec::new(),
        }
    }

    /// Content lines of this container and all nested containers, in
    /// traversal order.
    #[must_use]
    pub fn content_lines(&self) -> Vec<&ClassifiedLine> {
        let mut lines = Vec::new();
        for node in &self.children {
            match node {
                Node::Line(line) => lines.push(line),
                Node::Child(child) => lines.extend(child.content_lines()),
            }
        }
        lines
    }
}

/// A fully buffered document: top-level containers preceded by the implicit
/// preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Implicit container holding content that preceded any heading.
    pub preamble: Container,

    /// Top-level containers in order of appearance.
    pub entries: Vec<Container>,
}

impl Document {
    /// All content lines of the document in traversal order.
    ///
    /// Concatenating these reproduces the original relative order of plain
    /// content units in the input.
    #[must_use]
    pub fn content_lines(&self) -> Vec<&ClassifiedLine> {
        let mut lines = self.preamble.content_lines();
        for entry in &self.entries {
            lines.extend(entry.content_lines());
        }
        lines
    }
}

/// Which heading levels open containers for a given rendering target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingProfile {
    /// Markdown rendering: Part, Article and Sub-item nest; numbered items
    /// are a list-rendering concern and stay content lines.
    Markdown,
    /// Tree rendering: Article is a section, Sub-item a sub-section. Part
    /// and numbered-item lines stay content lines.
    Tree,
}

impl NestingProfile {
    /// Whether a heading at this level opens a container under this profile.
    #[must_use]
    pub fn opens(self, level: HeadingLevel) -> bool {
        match self {
            Self::Markdown => matches!(
                level,
                HeadingLevel::Part | HeadingLevel::Article | HeadingLevel::SubItem
            ),
            Self::Tree => matches!(level, HeadingLevel::Article | HeadingLevel::SubItem),
        }
    }
}

/// The stateful fold from classified lines to a [`Document`].
#[derive(Debug)]
pub struct HierarchyBuffer {
    profile: NestingProfile,
    stack: Vec<Container>,
    preamble: Container,
    entries: Vec<Container>,
}

impl HierarchyBuffer {
    /// Create an empty buffer for the given nesting profile.
    #[must_use]
    pub fn new(profile: NestingProfile) -> Self {
        Self {
            profile,
            stack: Vec::new(),
            preamble: Container::preamble(),
            entries: Vec::new(),
        }
    }

    /// Feed one classified line into the buffer.
    ///
    /// Headings at levels the profile does not open are routed like plain
    /// content.
    pub fn observe(&mut self, line: ClassifiedLine) {
        if line.is_heading() && self.profile.opens(line.level) {
            self.open(line);
        } else {
            self.append_content(line);
        }
    }

    /// Flush all remaining open containers and return the document.
    #[must_use]
    pub fn finish(mut self) -> Document {
        while let Some(container) = self.stack.pop() {
            Self::attach(&mut self.stack, &mut self.entries, container);
        }
        Document {
            preamble: self.preamble,
            entries: self.entries,
        }
    }

    /// Open a container for a heading, flushing same-or-deeper levels first.
    fn open(&mut self, line: ClassifiedLine) {
        while self.stack.last().is_some_and(|c| c.level >= line.level) {
            if let Some(container) = self.stack.pop() {
                Self::attach(&mut self.stack, &mut self.entries, container);
            }
        }
        self.stack.push(Container::from_heading(line));
    }

    /// Attach a flushed container to the next-shallower open container, or
    /// emit it as a top-level document entry.
    fn attach(stack: &mut [Container], entries: &mut Vec<Container>, container: Container) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(Node::Child(container)),
            None => entries.push(container),
        }
    }

    /// Append a content line to the deepest open container or the preamble.
    fn append_content(&mut self, line: ClassifiedLine) {
        let target = self.stack.last_mut().unwrap_or(&mut self.preamble);
        target.children.push(Node::Line(line));
    }
}
