use protodoc_ast::TextSpan;
use serde::{Deserialize, Serialize};

use crate::ReferenceAnnotator;

/// How section references to unknown sections are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Link every detected reference.
    #[default]
    Lenient,
    /// Link only references to sections that exist.
    Strict,
}

impl ReferencePolicy {
    /// Applies the policy to annotated spans.
    pub fn apply(self, spans: Vec<TextSpan>, is_known: impl Fn(&str) -> bool) -> Vec<TextSpan> {
        match self {
            ReferencePolicy::Lenient => spans,
            ReferencePolicy::Strict => ReferenceAnnotator::demote_unresolved(spans, is_known),
        }
    }
}
