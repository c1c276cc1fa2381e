//! # protodoc_core
//!
//! Hypertext generation engine for protodoc.
//!
//! This crate provides:
//! - The main `Generator` orchestrator
//! - Configuration loading
//! - Hypertext assembly (anchors, heading levels, annotated spans, TOC forest)
//! - The advisory consistency check
//! - Template-driven HTML rendering
//!
//! ## Example
//!
//! ```rust,ignore
//! use protodoc_core::{Generator, OutputFormat, ProtodocConfig};
//!
//! let config = ProtodocConfig::from_file(".protodoc.jsonc")?;
//! let generator = Generator::new(config);
//!
//! let generated = generator.generate("doc".as_ref(), "out".as_ref(), OutputFormat::Html)?;
//! println!("{}: {} findings", generated.output.display(), generated.inconsistencies.len());
//! ```

mod config;
mod consistency;
mod error;
mod generator;
mod hypertext;
mod renderer;

pub use config::ProtodocConfig;
pub use consistency::{Inconsistency, check_consistency};
pub use error::ProtodocError;
pub use generator::{Generated, Generator, OutputFormat};
pub use hypertext::{AnnotatedSection, HypertextDocument};
pub use renderer::{DOCUMENT_TEMPLATE_NAME, HtmlRenderer, render_json};
