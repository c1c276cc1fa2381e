//! Text output formatter

use std::path::Path;

use protodoc_ast::TocNode;
use protodoc_core::Inconsistency;

pub fn output_toc(tree: &[TocNode]) {
    for root in tree {
        root.walk(&mut |depth, node| {
            println!(
                "{}{}. {}",
                "  ".repeat(depth),
                node.entry.number,
                node.entry.title
            );
        });
    }
}

pub fn output_findings(path: &Path, findings: &[Inconsistency]) {
    if !findings.is_empty() {
        println!("\n{}:", path.display());
        for finding in findings {
            println!("  {}", finding);
        }
    }

    println!();
    println!(
        "Checked {}, found {} inconsistencies",
        path.display(),
        findings.len()
    );
}
