//! Advisory cross-validation between the table of contents, the sections and
//! the references found in section bodies.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::HypertextDocument;

/// A mismatch found by [`check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inconsistency {
    /// A TOC entry has no matching section.
    MissingSection { number: String },
    /// A section is not listed in the TOC.
    MissingTocEntry { number: String },
    /// A section reference points at a section that does not exist.
    UnresolvedReference { section: String, target: String },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::MissingSection { number } => {
                write!(f, "table of contents lists {number} but no such section exists")
            }
            Inconsistency::MissingTocEntry { number } => {
                write!(f, "section {number} is missing from the table of contents")
            }
            Inconsistency::UnresolvedReference { section, target } => {
                if section.is_empty() {
                    write!(f, "preamble references unknown section {target}")
                } else {
                    write!(f, "section {section} references unknown section {target}")
                }
            }
        }
    }
}

/// Cross-validates `doc` and logs every finding as a warning.
///
/// Findings are ordered: missing sections in TOC order, then missing TOC
/// entries and unresolved references in section order.
pub fn check_consistency(doc: &HypertextDocument) -> Vec<Inconsistency> {
    let toc_numbers: HashSet<&str> = doc.toc.iter().map(|e| e.number.as_str()).collect();
    let section_numbers: HashSet<&str> = doc
        .sections
        .iter()
        .filter(|s| !s.number.is_empty())
        .map(|s| s.number.as_str())
        .collect();

    let mut findings: Vec<Inconsistency> = doc
        .toc
        .iter()
        .filter(|e| !section_numbers.contains(e.number.as_str()))
        .map(|e| Inconsistency::MissingSection {
            number: e.number.clone(),
        })
        .collect();

    for section in &doc.sections {
        if !section.number.is_empty() && !toc_numbers.contains(section.number.as_str()) {
            findings.push(Inconsistency::MissingTocEntry {
                number: section.number.clone(),
            });
        }

        for target in section.spans.iter().filter_map(|span| span.section()) {
            if !section_numbers.contains(target) {
                findings.push(Inconsistency::UnresolvedReference {
                    section: section.number.clone(),
                    target: target.to_string(),
                });
            }
        }
    }

    for finding in &findings {
        warn!("{}", finding);
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProtodocConfig;
    use pretty_assertions::assert_eq;
    use protodoc_ast::{Document, Section, TocEntry};
    use protodoc_text::ReferencePolicy;

    fn build(document: &Document, config: &ProtodocConfig) -> HypertextDocument {
        HypertextDocument::build(document, config)
    }

    #[test]
    fn test_consistent_document() {
        let document = Document {
            toc: vec![TocEntry::new("1", "A"), TocEntry::new("2", "B")],
            sections: vec![
                Section::new("", "", "See Section 2.\n"),
                Section::new("1", "A", "Sections 1 and 2\n"),
                Section::new("2", "B", "https://example.com/\n"),
            ],
            ..Document::default()
        };
        let doc = build(&document, &ProtodocConfig::default());
        assert_eq!(check_consistency(&doc), vec![]);
    }

    #[test]
    fn test_findings() {
        let document = Document {
            toc: vec![TocEntry::new("1", "A"), TocEntry::new("2", "B")],
            sections: vec![
                Section::new("", "", "Section 7\n"),
                Section::new("1", "A", "see Section 3\n"),
                Section::new("1.1", "Unlisted", "\n"),
            ],
            ..Document::default()
        };
        let doc = build(&document, &ProtodocConfig::default());

        assert_eq!(
            check_consistency(&doc),
            vec![
                Inconsistency::MissingSection {
                    number: "2".to_string()
                },
                Inconsistency::UnresolvedReference {
                    section: String::new(),
                    target: "7".to_string()
                },
                Inconsistency::UnresolvedReference {
                    section: "1".to_string(),
                    target: "3".to_string()
                },
                Inconsistency::MissingTocEntry {
                    number: "1.1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_strict_policy_leaves_nothing_unresolved() {
        let document = Document {
            toc: vec![TocEntry::new("1", "A")],
            sections: vec![Section::new("1", "A", "see Section 3\n")],
            ..Document::default()
        };
        let config = ProtodocConfig {
            references: ReferencePolicy::Strict,
            ..ProtodocConfig::default()
        };
        assert_eq!(check_consistency(&build(&document, &config)), vec![]);
    }

    #[test]
    fn test_display() {
        let finding = Inconsistency::UnresolvedReference {
            section: "4.2".to_string(),
            target: "9".to_string(),
        };
        assert_eq!(
            finding.to_string(),
            "section 4.2 references unknown section 9"
        );
        assert_eq!(
            Inconsistency::MissingSection {
                number: "3".to_string()
            }
            .to_string(),
            "table of contents lists 3 but no such section exists"
        );
    }
}
