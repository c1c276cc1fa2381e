//! Heading grammar and section-start detection.

use std::sync::OnceLock;

use protodoc_ast::TocEntry;
use regex::Regex;

static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

fn heading_regex() -> &'static Regex {
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r"^([\t\n\f\r ]*)([0-9]+(?:\.[0-9]+)*)\.? (.*)$")
            .expect("Invalid heading pattern")
    })
}

/// A line matching the heading grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Heading<'s> {
    /// Whether the line starts with whitespace.
    pub indented: bool,
    /// Dotted-decimal number without a trailing `.`.
    pub number: &'s str,
    /// Everything after the separating space.
    pub title: &'s str,
}

impl<'s> Heading<'s> {
    /// Matches `line` against the heading grammar: optional indentation, a
    /// dotted number, an optional `.`, one space, then the title.
    pub fn parse(line: &'s str) -> Option<Self> {
        let caps = heading_regex().captures(line)?;
        Some(Self {
            indented: caps.get(1).is_some_and(|m| !m.is_empty()),
            number: caps.get(2)?.as_str(),
            title: caps.get(3)?.as_str(),
        })
    }
}

/// Forward-only position in the table of contents used to tell real section
/// headings from heading-like body text.
#[derive(Debug)]
pub(crate) struct TocCursor<'t> {
    toc: &'t [TocEntry],
    position: usize,
}

impl<'t> TocCursor<'t> {
    pub fn new(toc: &'t [TocEntry]) -> Self {
        Self { toc, position: 0 }
    }

    /// Index of the next TOC entry expected to appear in the body.
    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Decides whether `line` starts a new section, advancing the cursor when
    /// it does.
    ///
    /// - Once the TOC is exhausted nothing starts a section.
    /// - An unindented heading always starts a section; the cursor moves only
    ///   if its number is the expected one.
    /// - An indented heading starts a section only if some remaining TOC entry
    ///   has the same number and a title that contains, or is contained in,
    ///   the heading title, ignoring case. The cursor moves past the
    ///   first such entry.
    pub fn section_start<'s>(&mut self, line: &'s str) -> Option<Heading<'s>> {
        let heading = Heading::parse(line)?;
        let expected = self.toc.get(self.position)?;

        if !heading.indented {
            if heading.number == expected.number {
                self.position += 1;
            }
            return Some(heading);
        }

        let title = heading.title.to_lowercase();
        let found = self.toc[self.position..].iter().position(|entry| {
            let toc_title = entry.title.to_lowercase();
            entry.number == heading.number
                && (title.contains(&toc_title) || toc_title.contains(&title))
        })?;

        self.position += found + 1;
        Some(heading)
    }
}
