//! Subcommand implementations

mod check;
mod init;
mod render;
mod toc;

use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use protodoc_ast::Document;
use protodoc_core::{Generator, ProtodocConfig};

use crate::cli::Cli;

pub use check::run_check;
pub use init::run_init;
pub use render::run_render;
pub use toc::run_toc;

/// Loads the configuration named by `--config`, or the one found in the
/// working directory.
pub fn load_config(cli: &Cli) -> Result<ProtodocConfig> {
    if let Some(path) = &cli.config {
        info!("Using config: {}", path.display());
        return ProtodocConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = ProtodocConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ProtodocConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(ProtodocConfig::new())
}

/// Reads and parses the specification at `input`.
fn read_document(generator: &Generator, input: &Path) -> Result<Document> {
    let path = generator.config().input_path(input);
    let source = fs::read_to_string(&path)
        .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;
    generator.parse(&source).into_diagnostic()
}
