//! # protodoc_ast
//!
//! Document model for protodoc.
//!
//! This crate provides the types shared between the parser, the reference
//! annotator and the renderer:
//!
//! - [`Document`]: license, title, table of contents and ordered sections
//! - [`TocEntry`] / [`Section`]: numbered entries keyed by dotted-decimal numbers
//! - [`TextSpan`]: a run of annotated body text (plain, hyperlink, section reference)
//! - [`TocNode`]: the table of contents arranged as a forest by nesting depth
//!
//! ## Example
//!
//! ```rust
//! use protodoc_ast::{TocEntry, build_toc_tree};
//!
//! let toc = vec![
//!     TocEntry::new("1", "Overview"),
//!     TocEntry::new("1.1", "Scope"),
//!     TocEntry::new("2", "Frame header"),
//! ];
//!
//! let tree = build_toc_tree(&toc);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree[0].children.len(), 1);
//! ```

mod document;
mod span;
mod toc;

pub use document::{Document, Section, TocEntry, section_depth};
pub use span::TextSpan;
pub use toc::{TocNode, build_toc_tree};
