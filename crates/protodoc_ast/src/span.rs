//! Annotated text spans.
//!
//! A section body is split into a sequence of spans by the reference
//! annotator. Concatenating the visible text of all spans reproduces the
//! body verbatim.

use serde::{Deserialize, Serialize};

/// A contiguous run of section body text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextSpan {
    /// Text rendered as-is.
    PlainText {
        /// Visible text.
        text: String,
    },
    /// An absolute URL.
    Hyperlink {
        /// Visible text.
        text: String,
        /// Link target.
        href: String,
    },
    /// A reference to another section of the same document.
    SectionReference {
        /// Visible text, e.g. `"Section 4.2"` or just `"4.2"` inside a list.
        text: String,
        /// Referenced section number.
        section: String,
    },
}

impl TextSpan {
    /// Creates a plain text span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// Creates a hyperlink span whose visible text is the URL itself.
    pub fn hyperlink(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::Hyperlink {
            text: url.clone(),
            href: url,
        }
    }

    /// Creates a section reference span.
    pub fn section_reference(text: impl Into<String>, section: impl Into<String>) -> Self {
        Self::SectionReference {
            text: text.into(),
            section: section.into(),
        }
    }

    /// Returns the visible text of the span.
    pub fn text(&self) -> &str {
        match self {
            TextSpan::PlainText { text }
            | TextSpan::Hyperlink { text, .. }
            | TextSpan::SectionReference { text, .. } => text,
        }
    }

    /// Returns the referenced section number for section references.
    pub fn section(&self) -> Option<&str> {
        match self {
            TextSpan::SectionReference { section, .. } => Some(section),
            _ => None,
        }
    }

    /// Returns true if the span renders as a link.
    pub fn is_link(&self) -> bool {
        !matches!(self, TextSpan::PlainText { .. })
    }
}
