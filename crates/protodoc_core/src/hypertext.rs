//! Hypertext assembly.
//!
//! Turns a parsed [`Document`] into the render-ready [`HypertextDocument`]:
//! every section gets an anchor, a heading level and its body split into
//! annotated spans, and the table of contents is arranged as a forest.

use std::collections::HashSet;

use protodoc_ast::{Document, Section, TextSpan, TocEntry, TocNode, build_toc_tree};
use protodoc_text::ReferenceAnnotator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ProtodocConfig;

/// Deepest HTML heading level.
const MAX_HEADING_LEVEL: usize = 6;

/// Anchor suffix of the unnumbered section preceding the first heading.
const PREAMBLE_ANCHOR: &str = "preamble";

/// A section ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSection {
    pub number: String,
    pub title: String,
    /// HTML heading level, `depth + 1` clamped to 6.
    pub level: usize,
    /// Fragment id of the heading.
    pub anchor: String,
    pub spans: Vec<TextSpan>,
}

/// A document ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypertextDocument {
    pub license: String,
    pub title: String,
    pub toc: Vec<TocEntry>,
    pub toc_tree: Vec<TocNode>,
    pub sections: Vec<AnnotatedSection>,
    pub anchor_prefix: String,
}

impl HypertextDocument {
    /// Annotates every section of `document` using the reference policy and
    /// anchor prefix from `config`.
    pub fn build(document: &Document, config: &ProtodocConfig) -> Self {
        let known: HashSet<&str> = document
            .sections
            .iter()
            .filter(|s| !s.is_preamble())
            .map(|s| s.number.as_str())
            .collect();

        let sections = document
            .sections
            .iter()
            .map(|section| annotate_section(section, config, &known))
            .collect();

        Self {
            license: document.license.clone(),
            title: document.title.clone(),
            toc: document.toc.clone(),
            toc_tree: build_toc_tree(&document.toc),
            sections,
            anchor_prefix: config.anchor_prefix.clone(),
        }
    }
}

fn anchor_for(prefix: &str, number: &str) -> String {
    if number.is_empty() {
        format!("{prefix}{PREAMBLE_ANCHOR}")
    } else {
        format!("{prefix}{number}")
    }
}

fn annotate_section(
    section: &Section,
    config: &ProtodocConfig,
    known: &HashSet<&str>,
) -> AnnotatedSection {
    let spans = ReferenceAnnotator::annotate(&section.body);
    let spans = config
        .references
        .apply(spans, |number| known.contains(number));

    debug!(
        "Annotated section {:?} into {} spans",
        section.number,
        spans.len()
    );

    AnnotatedSection {
        number: section.number.clone(),
        title: section.title.clone(),
        level: (section.depth() + 1).min(MAX_HEADING_LEVEL),
        anchor: anchor_for(&config.anchor_prefix, &section.number),
        spans,
    }
}
