use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are what remains when no other
/// detector claims the text. Splitting knowledge lives here.
pub struct Paragraph;

impl Paragraph {
    /// Bytes that end a sentence when followed by whitespace or end of input.
    pub const TERMINALS: [u8; 3] = [b'.', b'!', b'?'];

    /// Splits on blank-line boundaries, returning trimmed, non-empty blocks.
    pub fn blank_line_blocks(text: &str) -> Vec<&str> {
        static BLANK_LINE: OnceLock<Regex> = OnceLock::new();
        let re = BLANK_LINE.get_or_init(|| Regex::new(r"\n\s*\n").expect("Invalid blank-line regex"));

        re.split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Splits text into sentences.
    ///
    /// A sentence ends after a run of terminal punctuation followed by
    /// whitespace or end of input, so `3.14` and `e.g.x` stay whole. A
    /// trailing fragment without punctuation is kept as the last sentence.
    pub fn sentences(text: &str) -> Vec<&str> {
        let b = text.as_bytes();
        let mut out = vec![];
        let mut start = 0usize;
        let mut i = 0usize;

        while i < b.len() {
            if !Self::TERMINALS.contains(&b[i]) {
                i += 1;
                continue;
            }
            let mut j = i;
            while j < b.len() && Self::TERMINALS.contains(&b[j]) {
                j += 1;
            }
            if j == b.len() || b[j].is_ascii_whitespace() {
                let s = text[start..j].trim();
                if !s.is_empty() {
                    out.push(s);
                }
                start = j;
            }
            i = j;
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            out.push(rest);
        }
        out
    }

    /// Splits text into paragraphs.
    ///
    /// Blank lines separate paragraphs. When that yields a single block, the
    /// text is split into sentences and every `per_paragraph` sentences (or
    /// the final remainder) are joined into one paragraph.
    pub fn split(text: &str, per_paragraph: usize) -> Vec<String> {
        let blocks = Self::blank_line_blocks(text);
        if blocks.len() != 1 {
            return blocks.into_iter().map(str::to_string).collect();
        }

        Self::sentences(blocks[0])
            .chunks(per_paragraph.max(1))
            .map(|group| group.join(" "))
            .collect()
    }
}
