//! Positioned parse errors and their rendering.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// Tokenizer or grammar failure at a byte offset of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at offset {position}: {message}")]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }

    /// Render an annotated report pointing at the offending character.
    pub fn render(&self, source: &str) -> String {
        render_diagnostic(source, self.position, &self.message)
    }
}

pub(crate) fn render_diagnostic(source: &str, position: usize, message: &str) -> String {
    let range = char_range(source, position);
    let snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(range).label(message));
    let report = [Level::ERROR.primary_title(message).element(snippet)];
    Renderer::plain().render(&report).to_string()
}

/// Byte range of the character at `position`, or an empty range at the end.
fn char_range(source: &str, position: usize) -> std::ops::Range<usize> {
    let start = position.min(source.len());
    let len = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + len
}
