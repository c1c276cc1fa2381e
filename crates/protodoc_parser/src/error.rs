//! Parse error types.

use thiserror::Error;

/// Structural errors detected while parsing a specification.
///
/// Every variant carries the 0-based index of the line where the expected
/// structure was missing. When the input ended early, the index is one past
/// the last line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended before a title line.
    #[error("line {index}: missing title")]
    MissingTitle {
        /// Line index (0-indexed).
        index: usize,
    },

    /// The line after the title is not the table of contents marker.
    #[error("line {index}: expected table of contents")]
    ExpectedTableOfContents {
        /// Line index (0-indexed).
        index: usize,
    },

    /// A non-blank line inside the table of contents is not a heading.
    #[error("line {index}: expected toc entry")]
    ExpectedTocEntry {
        /// Line index (0-indexed).
        index: usize,
    },
}

impl ParseError {
    /// Creates a missing title error.
    pub fn missing_title(index: usize) -> Self {
        Self::MissingTitle { index }
    }

    /// Creates a missing table of contents error.
    pub fn expected_table_of_contents(index: usize) -> Self {
        Self::ExpectedTableOfContents { index }
    }

    /// Creates a malformed TOC entry error.
    pub fn expected_toc_entry(index: usize) -> Self {
        Self::ExpectedTocEntry { index }
    }
}
