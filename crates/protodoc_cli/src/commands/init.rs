//! Init command implementation

use std::io::Write;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use protodoc_core::ProtodocConfig;

const DEFAULT_CONFIG: &str = r#"{
  // Specification file read when the input path is a directory
  "input": "native_protocol_v5.spec",
  // HTML file written when the output path is a directory
  "output": "native_protocol_v5.html",
  "anchor_prefix": "s",
  // "lenient" links every reference, "strict" only existing sections
  "references": "lenient",
  "check": true
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(ProtodocConfig::CONFIG_FILES[0]);

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        match options.open(&config_path) {
            Ok(mut file) => {
                file.write_all(DEFAULT_CONFIG.as_bytes()).into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                match std::fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
