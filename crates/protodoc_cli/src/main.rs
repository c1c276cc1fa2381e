//! protodoc CLI
//!
//! Turns numbered plain-text protocol specifications into hypertext.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_check, run_init, run_render, run_toc};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_findings) => {
            if has_findings {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Render {
            input,
            output,
            format,
            strict,
        } => run_render(cli, input, output, *format, *strict).map(|_| false),
        Commands::Check { input } => run_check(cli, input),
        Commands::Toc { input, format } => run_toc(cli, input, *format).map(|_| false),
        Commands::Init { force } => run_init(*force).map(|_| false),
    }
}
