use super::span::Span;

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    /// The line text without its `\n` / `\r\n` terminator.
    pub text: &'a str,
}

impl LineRef<'_> {
    /// Absolute byte offset where the line text ends (before the terminator).
    pub fn text_end(&self) -> usize {
        self.span.start + self.text.len()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Newlines are kept inside `span` so consecutive spans tile the input exactly.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.trim_end_matches(['\r', '\n']),
        }
    })
}
