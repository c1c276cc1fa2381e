use std::sync::OnceLock;

use protodoc_ast::TextSpan;
use regex::Regex;

/// Absolute URL with a mandatory scheme. The match never ends in sentence
/// punctuation. Parentheses are only taken in balanced pairs, so a trailing
/// `)` is kept when it closes a `(` inside the path.
const URL_PATTERN: &str = concat!(
    r"[a-zA-Z][a-zA-Z0-9+.\-]*://",
    r"(?:(?:[a-zA-Z0-9](?:[a-zA-Z0-9\-]*[a-zA-Z0-9])?\.)*[a-zA-Z0-9](?:[a-zA-Z0-9\-]*[a-zA-Z0-9])?",
    r"|\[[0-9a-fA-F:.]+\])",
    r"(?::[0-9]+)?",
    r#"(?:[/?#](?:(?:[^\s<>"()]|\([^\s<>"()]*\))*(?:[^\s<>"().,;:!?'\]]|\([^\s<>"()]*\)))?)?"#,
);

/// Dotted-decimal number made of ASCII digits.
const NUMBER_PATTERN: &str = r"[0-9]+(?:\.[0-9]+)*";

/// Separators between numbers of a multi-section reference.
const LIST_SEPARATOR_PATTERN: &str = r", (?:and )?| and ";

static REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();
static LIST_SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn reference_regex() -> &'static Regex {
    REFERENCE_REGEX.get_or_init(|| {
        let pattern = format!(
            r"(?P<url>{URL_PATTERN})|\b[Ss]ection (?P<section>{NUMBER_PATTERN})|\b[Ss]ections (?P<sections>{NUMBER_PATTERN}(?:(?:{LIST_SEPARATOR_PATTERN}){NUMBER_PATTERN})*)"
        );
        Regex::new(&pattern).expect("Invalid reference pattern")
    })
}

fn list_separator_regex() -> &'static Regex {
    LIST_SEPARATOR_REGEX
        .get_or_init(|| Regex::new(LIST_SEPARATOR_PATTERN).expect("Invalid separator pattern"))
}

/// Splits section bodies into plain text, hyperlinks and section references.
pub struct ReferenceAnnotator;

impl ReferenceAnnotator {
    /// Annotates a section body.
    ///
    /// The body is scanned left to right for, in order of precedence at the
    /// same offset:
    /// - absolute URLs, producing [`TextSpan::Hyperlink`]
    /// - `Section N` / `section N`, producing one [`TextSpan::SectionReference`]
    ///   covering the whole phrase
    /// - `Sections N, M and K`, producing a plain `Sections ` prefix followed by
    ///   one reference per number, with the separators kept verbatim as plain text
    ///
    /// Everything else is plain text. Concatenating the span texts yields the
    /// input exactly, and no empty span is produced.
    pub fn annotate(body: &str) -> Vec<TextSpan> {
        let mut spans = Vec::new();
        let mut last = 0;

        for caps in reference_regex().captures_iter(body) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_plain(&mut spans, &body[last..whole.start()]);

            if let Some(number) = caps.name("section") {
                spans.push(TextSpan::section_reference(whole.as_str(), number.as_str()));
            } else if let Some(list) = caps.name("sections") {
                push_plain(&mut spans, &body[whole.start()..list.start()]);
                push_section_list(&mut spans, list.as_str());
            } else {
                spans.push(TextSpan::hyperlink(whole.as_str()));
            }

            last = whole.end();
        }

        push_plain(&mut spans, &body[last..]);
        spans
    }

    /// Turns every section reference whose target fails `is_known` back into
    /// plain text with the same visible text.
    pub fn demote_unresolved(
        spans: Vec<TextSpan>,
        is_known: impl Fn(&str) -> bool,
    ) -> Vec<TextSpan> {
        spans
            .into_iter()
            .map(|span| match span {
                TextSpan::SectionReference { text, section } if !is_known(&section) => {
                    TextSpan::PlainText { text }
                }
                other => other,
            })
            .collect()
    }
}

fn push_plain(spans: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        spans.push(TextSpan::plain(text));
    }
}

fn push_section_list(spans: &mut Vec<TextSpan>, list: &str) {
    let mut last = 0;
    for separator in list_separator_regex().find_iter(list) {
        let number = &list[last..separator.start()];
        spans.push(TextSpan::section_reference(number, number));
        spans.push(TextSpan::plain(separator.as_str()));
        last = separator.end();
    }
    let number = &list[last..];
    spans.push(TextSpan::section_reference(number, number));
}
