/// Fenced code block type with owned delimiter constant.
///
/// All fence syntax knowledge (opener detection, info-string language,
/// closer search) lives here rather than in the zone builder.
pub struct CodeFence;

impl CodeFence {
    pub const TICKS: &'static str = "```";

    /// Returns the byte offset of the opening ticks if the line opens a fence.
    ///
    /// Only leading spaces and tabs may precede the ticks.
    pub fn opener(line: &str) -> Option<usize> {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        line[indent..].starts_with(Self::TICKS).then_some(indent)
    }

    /// Splits an info string into `(language, bytes consumed)`.
    ///
    /// The language is the first token made of letters, digits and `+#-_.`;
    /// anything after it on the opener line is not part of the language.
    pub fn language(info: &str) -> (Option<&str>, usize) {
        let lead = info.len() - info.trim_start_matches([' ', '\t']).len();
        let rest = &info[lead..];
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || "+#-_.".contains(c)))
            .unwrap_or(rest.len());
        if len == 0 {
            (None, lead)
        } else {
            (Some(&rest[..len]), lead + len)
        }
    }

    /// Finds the byte offset of the next closing ticks in `s`.
    pub fn find_close(s: &str) -> Option<usize> {
        s.find(Self::TICKS)
    }
}
