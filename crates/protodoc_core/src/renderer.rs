//! Template-driven HTML output.

use std::path::Path;

use tera::{Context, Tera};
use tracing::debug;

use crate::{HypertextDocument, ProtodocError};

const MACROS_TEMPLATE: &str = include_str!("../templates/macros.html");
const DOCUMENT_TEMPLATE: &str = include_str!("../templates/document.html");

/// Name of the page template. A custom template replaces it.
pub const DOCUMENT_TEMPLATE_NAME: &str = "document.html";

/// Renders hypertext documents as a single HTML page.
///
/// The page template receives the serialized [`HypertextDocument`] as its
/// context and may import `macros.html` for the recursive TOC list.
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    /// Creates a renderer using the built-in templates.
    pub fn new() -> Result<Self, ProtodocError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("macros.html", MACROS_TEMPLATE),
            (DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Creates a renderer whose page template is read from `path`.
    pub fn with_template(path: &Path) -> Result<Self, ProtodocError> {
        let mut renderer = Self::new()?;
        debug!("Loading template: {}", path.display());
        renderer
            .tera
            .add_template_file(path, Some(DOCUMENT_TEMPLATE_NAME))?;
        Ok(renderer)
    }

    /// Renders `doc` to HTML.
    pub fn render(&self, doc: &HypertextDocument) -> Result<String, ProtodocError> {
        let context = Context::from_serialize(doc)?;
        Ok(self.tera.render(DOCUMENT_TEMPLATE_NAME, &context)?)
    }
}

/// Serializes `doc` as pretty-printed JSON.
pub fn render_json(doc: &HypertextDocument) -> Result<String, ProtodocError> {
    Ok(serde_json::to_string_pretty(doc)?)
}
