//! Hypertext generation engine.

use std::fs;
use std::path::{Path, PathBuf};

use protodoc_ast::Document;
use protodoc_parser::SpecParser;
use protodoc_text::ReferencePolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consistency::{Inconsistency, check_consistency};
use crate::renderer::{HtmlRenderer, render_json};
use crate::{HypertextDocument, ProtodocConfig, ProtodocError};

/// Output format of a generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Specification file that was read.
    pub input: PathBuf,
    /// File that was written.
    pub output: PathBuf,
    /// Findings of the consistency check, empty when the check is disabled.
    pub inconsistencies: Vec<Inconsistency>,
}

/// Turns specification sources into hypertext.
///
/// Orchestrates parsing, reference annotation, the optional consistency
/// check and rendering.
pub struct Generator {
    config: ProtodocConfig,
    parser: SpecParser,
}

impl Generator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: ProtodocConfig) -> Self {
        Self {
            config,
            parser: SpecParser::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ProtodocConfig {
        &self.config
    }

    /// Parses a specification source.
    pub fn parse(&self, source: &str) -> Result<Document, ProtodocError> {
        Ok(self.parser.parse(source)?)
    }

    /// Annotates a parsed document with the configured reference policy.
    pub fn hypertext(&self, document: &Document) -> HypertextDocument {
        HypertextDocument::build(document, &self.config)
    }

    /// Cross-validates a parsed document.
    ///
    /// References are checked before the reference policy is applied, so
    /// references to unknown sections are reported under `strict` too.
    pub fn check(&self, document: &Document) -> Vec<Inconsistency> {
        let lenient = ProtodocConfig {
            references: ReferencePolicy::Lenient,
            ..self.config.clone()
        };
        check_consistency(&HypertextDocument::build(document, &lenient))
    }

    /// Creates the HTML renderer, honouring a configured custom template.
    pub fn renderer(&self) -> Result<HtmlRenderer, ProtodocError> {
        match self.config.template_path() {
            Some(path) => HtmlRenderer::with_template(&path),
            None => HtmlRenderer::new(),
        }
    }

    /// Renders an annotated document in `format`.
    pub fn render(
        &self,
        doc: &HypertextDocument,
        format: OutputFormat,
    ) -> Result<String, ProtodocError> {
        match format {
            OutputFormat::Html => self.renderer()?.render(doc),
            OutputFormat::Json => render_json(doc),
        }
    }

    /// Reads the specification at `input` and writes the rendered document to `output`.
    ///
    /// Either path may be a directory, in which case the configured input or
    /// output file name is used inside it.
    pub fn generate(
        &self,
        input: &Path,
        output: &Path,
        format: OutputFormat,
    ) -> Result<Generated, ProtodocError> {
        let input = self.config.input_path(input);
        let output = self.config.output_path(output);

        debug!("Reading {}", input.display());
        let source = fs::read_to_string(&input)?;

        let document = self.parse(&source)?;
        debug!(
            "Parsed {} TOC entries and {} sections",
            document.toc.len(),
            document.sections.len()
        );

        let inconsistencies = if self.config.check {
            self.check(&document)
        } else {
            Vec::new()
        };
        let rendered = self.render(&self.hypertext(&document), format)?;

        fs::write(&output, rendered)?;
        info!("Wrote {}", output.display());

        Ok(Generated {
            input,
            output,
            inconsistencies,
        })
    }
}
