//! Output formatting module

mod json;
mod text;

use std::path::Path;

use miette::Result;
use protodoc_ast::TocNode;
use protodoc_core::Inconsistency;

use crate::cli::TocFormat;

pub fn output_toc(tree: &[TocNode], format: TocFormat) -> Result<()> {
    match format {
        TocFormat::Json => json::output_toc(tree)?,
        TocFormat::Text => text::output_toc(tree),
    }
    Ok(())
}

pub fn output_findings(path: &Path, findings: &[Inconsistency]) {
    text::output_findings(path, findings);
}
