//! Parsed document types.

use serde::{Deserialize, Serialize};

/// Returns the nesting depth of a dotted-decimal section number.
///
/// `"3"` has depth 1, `"3.2.1"` has depth 3. The empty number used for a
/// preamble section also has depth 1.
#[inline]
pub fn section_depth(number: &str) -> usize {
    number.matches('.').count() + 1
}

/// A parsed protocol specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// License text taken from the leading comment block, one `\n` per line.
    pub license: String,
    /// Document title.
    pub title: String,
    /// Table of contents in document order.
    pub toc: Vec<TocEntry>,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

/// An entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TocEntry {
    /// Dotted-decimal number, e.g. `"3.2.1"`.
    pub number: String,
    /// Entry title as written in the table of contents.
    pub title: String,
}

impl TocEntry {
    /// Creates a new TOC entry.
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
        }
    }

    /// Nesting depth derived from the number.
    #[inline]
    pub fn depth(&self) -> usize {
        section_depth(&self.number)
    }
}

/// A numbered section of the document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Dotted-decimal number. Empty for text preceding the first heading.
    pub number: String,
    /// Heading title as written in the body.
    pub title: String,
    /// Raw body lines joined with `\n`.
    pub body: String,
}

impl Section {
    /// Creates a new section.
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Nesting depth derived from the number.
    #[inline]
    pub fn depth(&self) -> usize {
        section_depth(&self.number)
    }

    /// Returns true for the unnumbered section holding text before the first heading.
    #[inline]
    pub fn is_preamble(&self) -> bool {
        self.number.is_empty()
    }
}
