//! Toc command implementation

use std::path::Path;

use miette::Result;

use protodoc_ast::build_toc_tree;
use protodoc_core::Generator;

use super::{load_config, read_document};
use crate::cli::{Cli, TocFormat};
use crate::output::output_toc;

pub fn run_toc(cli: &Cli, input: &Path, format: TocFormat) -> Result<()> {
    let generator = Generator::new(load_config(cli)?);
    let document = read_document(&generator, input)?;
    output_toc(&build_toc_tree(&document.toc), format)
}
