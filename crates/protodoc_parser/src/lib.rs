//! # protodoc_parser
//!
//! Parser for numbered plain-text protocol specifications.
//!
//! This crate provides [`SpecParser`], the parser for heading-delimited
//! specifications with an embedded table of contents, producing a
//! [`Document`]. Structural problems are reported as [`ParseError`].
//!
//! ## Document layout
//!
//! ```text
//! # license comment lines
//!
//!     Title
//!
//! Table of Contents
//!
//!   1. Overview
//!   2. Frames
//!
//! 1. Overview
//!
//!   body text ...
//! ```
//!
//! ## Example
//!
//! ```rust
//! use protodoc_parser::SpecParser;
//!
//! let source = "# MIT\n\n  Protocol\n\nTable of Contents\n\n  1. Overview\n\n1. Overview\n\n  Hello.\n";
//! let doc = SpecParser::new().parse(source).unwrap();
//!
//! assert_eq!(doc.title, "Protocol");
//! assert_eq!(doc.sections[0].number, "1");
//! ```
//!
//! [`Document`]: protodoc_ast::Document

mod error;
mod heading;
mod spec;

pub use error::ParseError;
pub use spec::SpecParser;
