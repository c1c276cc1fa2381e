//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// protodoc - Turn numbered plain-text protocol specifications into hypertext
#[derive(Parser)]
#[command(name = "protodoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a specification as HTML or JSON
    Render {
        /// Specification file, or a directory containing the configured input file
        input: PathBuf,

        /// Output file, or a directory receiving the configured output file
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,

        /// Link only references to sections that exist
        #[arg(long)]
        strict: bool,
    },

    /// Cross-check the table of contents, sections and references
    Check {
        /// Specification file, or a directory containing the configured input file
        input: PathBuf,
    },

    /// Print the table of contents
    Toc {
        /// Specification file, or a directory containing the configured input file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TocFormat::Text)]
        format: TocFormat,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TocFormat {
    Text,
    Json,
}
