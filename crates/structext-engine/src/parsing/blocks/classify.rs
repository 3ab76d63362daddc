use crate::parsing::{lines::LineRef, span::Span};

use super::kinds::{BlockQuote, CodeFence};

/// Classification of a single line containing only local facts.
///
/// This is the first step of zone scanning: each line is classified
/// independently without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Full byte span of this line (including its newline).
    pub line: Span,
    /// Absolute offset where the line text ends, before the newline.
    pub text_end: usize,
    /// The line text without terminator.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Absolute offset of the opening ticks if the line opens a fence.
    pub fence_at: Option<usize>,
    /// Quote content after the `>` prefix, if this is a quote line.
    pub quote: Option<&'a str>,
}

/// Classifies individual lines for the zone scanning phase.
pub struct ZoneLineClassifier;

impl ZoneLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// A fence opener wins over a quote prefix on the same line.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let fence_at = CodeFence::opener(text).map(|i| lr.span.start + i);
        let quote = if fence_at.is_some() {
            None
        } else {
            BlockQuote::strip_prefix(text).map(|i| &text[i..])
        };

        LineClass {
            line: lr.span,
            text_end: lr.text_end(),
            text,
            is_blank: text.trim().is_empty(),
            fence_at,
            quote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::lines_with_spans;

    fn classify_all(s: &str) -> Vec<LineClass<'_>> {
        lines_with_spans(s)
            .map(|lr| ZoneLineClassifier.classify(&lr))
            .collect()
    }

    #[test]
    fn classifies_fence_quote_and_blank() {
        let lines = classify_all("text\n\n> quoted\n  ```py\n");
        assert!(!lines[0].is_blank);
        assert!(lines[1].is_blank);
        assert_eq!(lines[2].quote, Some("quoted"));
        assert_eq!(lines[3].fence_at, Some(17));
    }

    #[test]
    fn quoted_fence_is_a_quote() {
        let lines = classify_all("> ```");
        assert_eq!(lines[0].fence_at, None);
        assert_eq!(lines[0].quote, Some("```"));
    }
}
