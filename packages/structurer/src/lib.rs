//! RegDoc Structurer - Structure Taiwanese regulatory text into hierarchies.
//!
//! This crate classifies a flat stream of text units from Taiwanese-style
//! legal/regulatory documents into a nested hierarchy (Part → Article →
//! Sub-item → Numbered-item, identified by fixed ideographic/numeral
//! markers) and re-serializes the hierarchy either as canonically formatted
//! heading-annotated markdown or as a nested document tree.
//!
//! # Example
//!
//! ```
//! use regdoc_structurer::to_markdown;
//!
//! let md = to_markdown("一、總則\n本規定依法訂定。");
//! assert_eq!(md, "## 一、總則\n\n本規定依法訂定。\n");
//! ```
//!
//! # Architecture
//!
//! - [`normalize`]: text cleanup pre-pass and UTF-8 decoding
//! - [`alphabet`]: injectable numeral alphabet table
//! - [`classify`]: per-line structural classification
//! - [`hierarchy`]: flush-on-transition hierarchy buffering
//! - [`markdown`]: markdown serializer
//! - [`tree`]: nested document-tree serializer
//! - [`structurer`]: pipeline facade
//! - [`error`]: error types and Result alias
//!
//! Reading source documents, writing output files and any service calls are
//! the caller's concern; the pipeline is a pure function of its input.

pub mod alphabet;
pub mod classify;
pub mod error;
pub mod hierarchy;
pub mod markdown;
pub mod normalize;
pub mod structurer;
pub mod tree;

// Re-export main entry points
pub use structurer::{to_markdown, to_tree, Structurer};

// Re-export commonly used items
pub use alphabet::NumeralAlphabet;
pub use classify::{ClassifiedLine, Classifier, HeadingLevel};
pub use error::{Result, StructurerError};
pub use hierarchy::{Container, Document, HierarchyBuffer, NestingProfile, Node};
pub use tree::{Section, SubSection, TreeDocument};
