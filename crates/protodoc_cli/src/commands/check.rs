//! Check command implementation

use std::path::Path;

use miette::Result;

use protodoc_core::Generator;

use super::{load_config, read_document};
use crate::cli::Cli;
use crate::output::output_findings;

/// Returns true when inconsistencies were found.
pub fn run_check(cli: &Cli, input: &Path) -> Result<bool> {
    let generator = Generator::new(load_config(cli)?);
    let document = read_document(&generator, input)?;

    let findings = generator.check(&document);
    output_findings(&generator.config().input_path(input), &findings);

    Ok(!findings.is_empty())
}
