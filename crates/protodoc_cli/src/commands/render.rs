//! Render command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use protodoc_core::{Generator, OutputFormat};
use protodoc_text::ReferencePolicy;

use super::load_config;
use crate::cli::{Cli, RenderFormat};

pub fn run_render(
    cli: &Cli,
    input: &Path,
    output: &Path,
    format: RenderFormat,
    strict: bool,
) -> Result<()> {
    let mut config = load_config(cli)?;
    if strict {
        config.references = ReferencePolicy::Strict;
    }

    let format = match format {
        RenderFormat::Html => OutputFormat::Html,
        RenderFormat::Json => OutputFormat::Json,
    };

    let generator = Generator::new(config);
    let generated = generator
        .generate(input, output, format)
        .into_diagnostic()?;

    if !generated.inconsistencies.is_empty() {
        info!(
            "{} consistency findings in {}",
            generated.inconsistencies.len(),
            generated.input.display()
        );
    }

    Ok(())
}
