/// Blockquote block type with owned delimiter constant.
///
/// Quotes are a single level deep: only the first `>` is syntax, a second
/// one stays in the content.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one blockquote prefix from a line.
    ///
    /// Leading spaces/tabs, the `>` and at most one following space are
    /// consumed. Returns the byte offset where quote content begins, or
    /// `None` if the line is not a quote line.
    pub fn strip_prefix(s: &str) -> Option<usize> {
        let indent = s.len() - s.trim_start_matches([' ', '\t']).len();
        let rest = s[indent..].strip_prefix(Self::PREFIX)?;
        let skip = usize::from(rest.starts_with(' '));
        Some(indent + Self::PREFIX.len_utf8() + skip)
    }
}
