use serde::Serialize;

use crate::parsing::span::Span;

/// A styled run of text within a block.
///
/// Contents have their markup delimiters removed: `**bold**` becomes
/// `Bold("bold")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineRun {
    /// Plain text that isn't part of any special construct.
    Text(String),
    Bold(String),
    Italic(String),
    Strikethrough(String),
    /// An inline code span. No other markup is recognised inside it.
    Code(String),
    /// A `[content](url)` link.
    Link { content: String, url: String },
}

impl InlineRun {
    /// The visible text of the run.
    pub fn content(&self) -> &str {
        match self {
            InlineRun::Text(s)
            | InlineRun::Bold(s)
            | InlineRun::Italic(s)
            | InlineRun::Strikethrough(s)
            | InlineRun::Code(s) => s,
            InlineRun::Link { content, .. } => content,
        }
    }
}

/// An [`InlineRun`] together with the source span it consumed, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpannedRun {
    pub span: Span,
    pub run: InlineRun,
}
