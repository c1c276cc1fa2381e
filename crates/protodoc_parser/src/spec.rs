//! Parser for heading-delimited protocol specifications.
//!
//! The document is read in fixed phases: license comment block, title,
//! `Table of Contents` marker, TOC entries, then the body. Body headings are
//! reconciled against the TOC with a `TocCursor` so that numbered lines
//! inside example payloads do not split sections.

use protodoc_ast::{Document, Section, TocEntry};
use tracing::{debug, trace};

use crate::heading::{Heading, TocCursor};
use crate::ParseError;

/// Literal line introducing the table of contents.
const TABLE_OF_CONTENTS: &str = "Table of Contents";

/// Parser for numbered plain-text specifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecParser;

impl SpecParser {
    /// Creates a new specification parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses the source text into a document.
    ///
    /// A structural error aborts the parse; no partial document is returned.
    pub fn parse(&self, source: &str) -> Result<Document, ParseError> {
        Lines::new(source).parse()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// License lines start with `#` and an optional single space.
fn comment_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Line-oriented parse state.
struct Lines<'s> {
    lines: Vec<&'s str>,
    index: usize,
}

impl<'s> Lines<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, index: 0 }
    }

    fn current(&self) -> Option<&'s str> {
        self.lines.get(self.index).copied()
    }

    fn skip_blank(&mut self) {
        while self.current().is_some_and(is_blank) {
            self.index += 1;
        }
    }

    fn parse(mut self) -> Result<Document, ParseError> {
        let license = self.license();

        self.skip_blank();
        let title = self.title()?;

        self.skip_blank();
        self.table_of_contents_marker()?;

        self.skip_blank();
        let toc = self.toc_entries()?;
        debug!("Parsed {} toc entries", toc.len());

        self.skip_blank();
        let sections = self.sections(&toc);
        debug!("Parsed {} sections", sections.len());

        Ok(Document {
            license,
            title,
            toc,
            sections,
        })
    }

    fn license(&mut self) -> String {
        let mut license = String::new();
        while let Some(text) = self.current().and_then(comment_text) {
            license.push_str(text);
            license.push('\n');
            self.index += 1;
        }
        license
    }

    fn title(&mut self) -> Result<String, ParseError> {
        let line = self
            .current()
            .ok_or(ParseError::missing_title(self.index))?;
        self.index += 1;
        Ok(line.trim().to_string())
    }

    fn table_of_contents_marker(&mut self) -> Result<(), ParseError> {
        match self.current() {
            Some(line) if line.trim_end() == TABLE_OF_CONTENTS => {
                self.index += 1;
                Ok(())
            }
            _ => Err(ParseError::expected_table_of_contents(self.index)),
        }
    }

    fn toc_entries(&mut self) -> Result<Vec<TocEntry>, ParseError> {
        let mut toc = Vec::new();
        while let Some(line) = self.current() {
            if is_blank(line) {
                break;
            }
            let heading =
                Heading::parse(line).ok_or(ParseError::expected_toc_entry(self.index))?;
            toc.push(TocEntry::new(heading.number, heading.title));
            self.index += 1;
        }
        Ok(toc)
    }

    fn sections(&mut self, toc: &[TocEntry]) -> Vec<Section> {
        let mut cursor = TocCursor::new(toc);
        let mut sections = Vec::new();
        let mut open: Option<Section> = None;
        let mut body: Vec<&str> = Vec::new();

        while let Some(line) = self.current() {
            let index = self.index;
            self.index += 1;

            let Some(heading) = cursor.section_start(line) else {
                if Heading::parse(line).is_some() {
                    trace!("Line {} looks like a heading, kept as body text", index);
                }
                body.push(line);
                continue;
            };

            debug!("Section {} starts at line {}", heading.number, index);
            flush(&mut sections, open.take(), &mut body);
            open = Some(Section::new(heading.number, heading.title, String::new()));
            self.skip_blank();
        }

        flush(&mut sections, open, &mut body);
        sections
    }
}

/// Appends the open section with the buffered body.
///
/// Body text before the first heading becomes an unnumbered section; nothing
/// is appended when there is neither an open section nor buffered text.
fn flush(sections: &mut Vec<Section>, open: Option<Section>, body: &mut Vec<&str>) {
    if open.is_none() && body.is_empty() {
        return;
    }
    let mut section = open.unwrap_or_default();
    section.body = body.join("\n");
    body.clear();
    sections.push(section);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(source: &str) -> Result<Document, ParseError> {
        SpecParser::new().parse(source)
    }

    const HEADER: &str = "\
# Copyright notice
#
#Licensed under the terms below.

                     Example Protocol v1

Table of Contents

  1. Overview
  2. Frame header
    2.1. version
    2.2. flags
  3. Notations
";

    fn sample() -> String {
        format!(
            "{HEADER}
1. Overview

  This document describes the protocol.
  See Section 2.1 for details.

2. Frame header

  Each frame starts with a header.

2.1. version

  The version byte.
    4.1  Some unrelated title
  More about the version.

2.2. flags

  Flags byte.

3. Notations

  [int] A 4 bytes integer
"
        )
    }

    #[test]
    fn test_parse_license() {
        let doc = parse(&sample()).unwrap();
        assert_eq!(
            doc.license,
            "Copyright notice\n\nLicensed under the terms below.\n"
        );
    }

    #[test]
    fn test_parse_title_is_trimmed() {
        let doc = parse(&sample()).unwrap();
        assert_eq!(doc.title, "Example Protocol v1");
    }

    #[test]
    fn test_parse_toc() {
        let doc = parse(&sample()).unwrap();
        assert_eq!(
            doc.toc,
            vec![
                TocEntry::new("1", "Overview"),
                TocEntry::new("2", "Frame header"),
                TocEntry::new("2.1", "version"),
                TocEntry::new("2.2", "flags"),
                TocEntry::new("3", "Notations"),
            ]
        );
    }

    #[test]
    fn test_sections_follow_toc_order() {
        let doc = parse(&sample()).unwrap();
        let numbers: Vec<&str> = doc.sections.iter().map(|s| s.number.as_str()).collect();
        let toc_numbers: Vec<&str> = doc.toc.iter().map(|e| e.number.as_str()).collect();

        assert_eq!(numbers, toc_numbers);
        assert_eq!(doc.sections.len(), doc.toc.len());
    }

    #[test]
    fn test_section_bodies() {
        let doc = parse(&sample()).unwrap();

        assert_eq!(doc.sections[0].title, "Overview");
        assert_eq!(
            doc.sections[0].body,
            "  This document describes the protocol.\n  See Section 2.1 for details.\n"
        );
        assert_eq!(doc.sections[3].body, "  Flags byte.\n");
        // the input ends with a newline, so the last body keeps a trailing empty line
        assert_eq!(doc.sections[4].body, "  [int] A 4 bytes integer\n");
    }

    #[test]
    fn test_indented_unrelated_heading_stays_in_body() {
        let doc = parse(&sample()).unwrap();
        let version = &doc.sections[2];
        assert_eq!(version.number, "2.1");

        assert_eq!(
            version.body,
            "  The version byte.\n    4.1  Some unrelated title\n  More about the version.\n"
        );
    }

    #[test]
    fn test_indented_matching_heading_starts_section() {
        let source = format!(
            "{HEADER}
1. Overview

  text

  2 Frame header

  header text
"
        );
        let doc = parse(&source).unwrap();

        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[1].number, "2");
        assert_eq!(doc.sections[1].title, "Frame header");
        assert_eq!(doc.sections[0].body, "  text\n");
    }

    #[test]
    fn test_no_sections_after_toc() {
        let doc = parse(HEADER).unwrap();
        assert!(doc.sections.is_empty());
        assert_eq!(doc.toc.len(), 5);
    }

    #[test]
    fn test_trailing_blank_lines_do_not_create_section() {
        let doc = parse(&format!("{HEADER}\n\n\n")).unwrap();
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_last_section_with_empty_body_is_kept() {
        let doc = parse(&format!("{HEADER}\n1. Overview")).unwrap();

        assert_eq!(doc.sections, vec![Section::new("1", "Overview", "")]);
    }

    #[test]
    fn test_preamble_before_first_heading() {
        let doc = parse(&format!("{HEADER}\nIntroductory text.\n1. Overview\n\nbody")).unwrap();

        assert_eq!(
            doc.sections,
            vec![
                Section::new("", "", "Introductory text."),
                Section::new("1", "Overview", "body"),
            ]
        );
        assert!(doc.sections[0].is_preamble());
    }

    #[test]
    fn test_numbering_drift_is_tolerated() {
        let doc = parse(&format!("{HEADER}\n1. Overview\n\n9. Appendix\n\n2. Frame header\n"))
            .unwrap();
        let numbers: Vec<&str> = doc.sections.iter().map(|s| s.number.as_str()).collect();

        assert_eq!(numbers, vec!["1", "9", "2"]);
    }

    #[test]
    fn test_headings_after_toc_exhausted_are_body() {
        let source = "\
  Title

Table of Contents

  1. Only

1. Only

2. Not in toc
";
        let doc = parse(source).unwrap();

        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].body, "2. Not in toc\n");
    }

    #[test]
    fn test_crlf_input() {
        let source = "# L\r\n\r\n  Title\r\n\r\nTable of Contents\r\n\r\n  1. Overview\r\n\r\n1. Overview\r\n\r\n  body\r\n";
        let doc = parse(source).unwrap();

        assert_eq!(doc.license, "L\n");
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.toc, vec![TocEntry::new("1", "Overview")]);
        assert_eq!(doc.sections[0].title, "Overview");
        assert_eq!(doc.sections[0].body, "  body\n");
    }

    #[test]
    fn test_no_license() {
        let doc = parse("Title\nTable of Contents\n1 A\n").unwrap();
        assert_eq!(doc.license, "");
        assert_eq!(doc.title, "Title");
    }

    #[rstest]
    #[case::empty_input("", ParseError::MissingTitle { index: 1 })]
    #[case::only_license("# a\n# b", ParseError::MissingTitle { index: 2 })]
    #[case::only_blank_lines("\n\n  \n", ParseError::MissingTitle { index: 4 })]
    #[case::missing_marker("# a\n\n  Title\n\n  1. Overview\n", ParseError::ExpectedTableOfContents { index: 4 })]
    #[case::eof_after_title("  Title\n", ParseError::ExpectedTableOfContents { index: 2 })]
    #[case::malformed_toc("  Title\n\nTable of Contents\n\n  1. Overview\n  Frame header\n", ParseError::ExpectedTocEntry { index: 5 })]
    fn test_structural_errors(#[case] source: &str, #[case] expected: ParseError) {
        assert_eq!(parse(source), Err(expected));
    }
}
