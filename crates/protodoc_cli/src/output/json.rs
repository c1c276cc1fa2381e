//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use protodoc_ast::TocNode;

pub fn output_toc(tree: &[TocNode]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(tree).into_diagnostic()?);
    Ok(())
}
