//! Pass one: split the original text into code, quote and gap zones.

use crate::parsing::{lines::lines_with_spans, span::Span};

use super::{
    classify::{LineClass, ZoneLineClassifier},
    kinds::CodeFence,
    types::Block,
};

/// A region of the input found by the zone scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Zone {
    /// A fenced code region, ticks included in `span`.
    Code {
        span: Span,
        language: String,
        code: String,
    },
    /// A contiguous run of `>` lines.
    Quote { span: Span, content: String },
    /// Everything else; handed to the detector chain.
    Gap(Span),
}

impl Zone {
    pub fn span(&self) -> Span {
        match self {
            Zone::Code { span, .. } | Zone::Quote { span, .. } | Zone::Gap(span) => *span,
        }
    }

    /// Converts an extracted zone into its block. Gaps have no block of their own.
    pub fn into_block(self) -> Option<Block> {
        match self {
            Zone::Code { language, code, .. } => Some(Block::CodeBlock { language, code }),
            Zone::Quote { content, .. } => Some(Block::Blockquote { content }),
            Zone::Gap(_) => None,
        }
    }
}

#[derive(Debug)]
enum ZoneState<'a> {
    None,
    Gap {
        start: usize,
        end: usize,
    },
    Quote {
        start: usize,
        end: usize,
        lines: Vec<&'a str>,
    },
    Fence {
        start: usize,
        language: String,
        code_start: usize,
    },
}

/// State machine that turns classified lines into [`Zone`]s.
///
/// Fenced regions are raw: while a fence is open no line is inspected for
/// quote prefixes.
pub struct ZoneBuilder<'a> {
    src: &'a str,
    state: ZoneState<'a>,
    out: Vec<Zone>,
}

impl<'a> ZoneBuilder<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            state: ZoneState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if let Some(at) = c.fence_at {
            self.flush();
            self.open_fence(at, c);
            return;
        }

        if let Some(content) = c.quote {
            self.extend_quote(c, content);
            return;
        }

        self.extend_gap(c.line.start, c.line.end);
    }

    pub fn finish(mut self) -> Vec<Zone> {
        // EOF flush; an unterminated fence runs to end of input
        if self.in_fence()
            && let ZoneState::Fence {
            start,
            language,
            code_start,
        } = std::mem::replace(&mut self.state, ZoneState::None)
        {
            let end = self.src.len();
            let code = self.src[code_start.min(end)..end].trim().to_string();
            self.out.push(Zone::Code {
                span: Span { start, end },
                language,
                code,
            });
        }
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.state, ZoneState::Fence { .. })
    }

    fn open_fence(&mut self, at: usize, c: &LineClass<'a>) {
        let info_start = at + CodeFence::TICKS.len();
        let info = &self.src[info_start..c.text_end];
        let (language, consumed) = CodeFence::language(info);
        let language = language.unwrap_or(Block::DEFAULT_LANGUAGE).to_string();
        let lang_end = info_start + consumed;

        // One-line fence: ```lang code```
        if let Some(rel) = CodeFence::find_close(&self.src[lang_end..c.text_end]) {
            let close = lang_end + rel;
            self.close_fence(at, language, lang_end, close, c);
            return;
        }

        self.state = ZoneState::Fence {
            start: at,
            language,
            code_start: c.line.end,
        };
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        let Some(rel) = CodeFence::find_close(c.text) else {
            return;
        };
        if let ZoneState::Fence {
            start,
            language,
            code_start,
        } = std::mem::replace(&mut self.state, ZoneState::None)
        {
            self.close_fence(start, language, code_start, c.line.start + rel, c);
        }
    }

    fn close_fence(
        &mut self,
        start: usize,
        language: String,
        code_start: usize,
        close: usize,
        c: &LineClass<'a>,
    ) {
        let end = close + CodeFence::TICKS.len();
        let code = self.src[code_start.min(close)..close].trim().to_string();
        self.out.push(Zone::Code {
            span: Span { start, end },
            language,
            code,
        });
        self.state = ZoneState::None;

        // Text after the closing ticks on the same line is ordinary gap text.
        if !self.src[end..c.text_end].trim().is_empty() {
            self.state = ZoneState::Gap {
                start: end,
                end: c.line.end,
            };
        }
    }

    fn extend_quote(&mut self, c: &LineClass<'a>, content: &'a str) {
        let indent = c.text.len() - c.text.trim_start().len();
        match &mut self.state {
            ZoneState::Quote { end, lines, .. } => {
                *end = c.text_end;
                lines.push(content.trim());
            }
            _ => {
                self.flush();
                self.state = ZoneState::Quote {
                    start: c.line.start + indent,
                    end: c.text_end,
                    lines: vec![content.trim()],
                };
            }
        }
    }

    fn extend_gap(&mut self, line_start: usize, line_end: usize) {
        match &mut self.state {
            ZoneState::Gap { end, .. } => *end = line_end,
            _ => {
                self.flush();
                self.state = ZoneState::Gap {
                    start: line_start,
                    end: line_end,
                };
            }
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.state, ZoneState::None) {
            ZoneState::Gap { start, end } => {
                if !self.src[start..end].trim().is_empty() {
                    self.out.push(Zone::Gap(Span { start, end }));
                }
            }
            ZoneState::Quote { start, end, lines } => {
                let content = lines.join("\n").trim().to_string();
                if !content.is_empty() {
                    self.out.push(Zone::Quote {
                        span: Span { start, end },
                        content,
                    });
                }
            }
            prev @ ZoneState::Fence { .. } => self.state = prev, // fences close themselves
            ZoneState::None => {}
        }
    }
}

/// Scans `text` into ordered, non-overlapping zones.
pub fn scan_zones(text: &str) -> Vec<Zone> {
    let classifier = ZoneLineClassifier;
    let mut builder = ZoneBuilder::new(text);

    for lr in lines_with_spans(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let zones = builder.finish();
    log::debug!("zone scan produced {} zones", zones.len());
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code(zone: &Zone) -> (&str, &str) {
        match zone {
            Zone::Code { language, code, .. } => (language, code),
            other => panic!("expected Code, got {other:?}"),
        }
    }

    #[test]
    fn fence_alone() {
        let zones = scan_zones("```js\nconsole.log(1)\n```");
        assert_eq!(zones.len(), 1);
        assert_eq!(code(&zones[0]), ("js", "console.log(1)"));
        assert_eq!(zones[0].span(), Span::new(0, 24));
    }

    #[test]
    fn fence_without_language_defaults_to_text() {
        let zones = scan_zones("```\nplain\n```\n");
        assert_eq!(code(&zones[0]), ("text", "plain"));
    }

    #[test]
    fn info_string_after_language_is_not_code() {
        let zones = scan_zones("```rust title=main.rs\nfn main() {}\n```");
        assert_eq!(code(&zones[0]), ("rust", "fn main() {}"));
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let zones = scan_zones("Intro\n```py\nprint(1)\n> not a quote");
        assert_eq!(zones.len(), 2);
        assert!(matches!(zones[0], Zone::Gap(_)));
        assert_eq!(code(&zones[1]), ("py", "print(1)\n> not a quote"));
    }

    #[test]
    fn closing_ticks_on_code_line() {
        let zones = scan_zones("```sh\necho hi```\nafter");
        assert_eq!(code(&zones[0]), ("sh", "echo hi"));
        match &zones[1] {
            Zone::Gap(sp) => assert_eq!(sp.slice("```sh\necho hi```\nafter"), "after"),
            other => panic!("expected Gap, got {other:?}"),
        }
    }

    #[test]
    fn one_line_fence() {
        let zones = scan_zones("```js alert(1)```");
        assert_eq!(code(&zones[0]), ("js", "alert(1)"));
    }

    #[test]
    fn text_after_close_on_same_line_is_gap() {
        let src = "```\nx\n``` trailing words";
        let zones = scan_zones(src);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[1].span().slice(src).trim(), "trailing words");
    }

    #[test]
    fn contiguous_quotes_merge() {
        let src = "Before\n> one\n>two\n\nAfter";
        let zones = scan_zones(src);
        assert_eq!(zones.len(), 3);
        match &zones[1] {
            Zone::Quote { span, content } => {
                assert_eq!(content, "one\ntwo");
                assert_eq!(span.slice(src), "> one\n>two");
            }
            other => panic!("expected Quote, got {other:?}"),
        }
    }

    #[test]
    fn quote_separated_by_blank_line_makes_two_quotes() {
        let zones = scan_zones("> a\n\n> b");
        let quotes: Vec<_> = zones
            .iter()
            .filter(|z| matches!(z, Zone::Quote { .. }))
            .collect();
        assert_eq!(quotes.len(), 2);
    }

    #[test]
    fn quote_prefix_inside_fence_is_code() {
        let zones = scan_zones("```\n> inside\n```");
        assert_eq!(zones.len(), 1);
        assert_eq!(code(&zones[0]), ("text", "> inside"));
    }

    #[test]
    fn trailing_quote_is_captured() {
        let zones = scan_zones("Text\n> last words");
        assert!(matches!(&zones[1], Zone::Quote { content, .. } if content == "last words"));
    }

    #[test]
    fn final_gap_is_flushed() {
        let src = "Hello world. This is great.";
        assert_eq!(scan_zones(src), vec![Zone::Gap(Span::new(0, src.len()))]);
    }

    #[test]
    fn gap_after_closed_fence_is_flushed() {
        let src = "Intro.\n```\nx\n```\nOutro text.";
        let zones = scan_zones(src);
        assert_eq!(zones.len(), 3);
        assert_eq!(zones[2].span().slice(src), "Outro text.");
    }

    #[test]
    fn quote_only_input() {
        let zones = scan_zones("> only a quote");
        assert!(matches!(&zones[..], [Zone::Quote { content, .. }] if content == "only a quote"));
    }

    #[test]
    fn empty_quote_is_dropped() {
        let zones = scan_zones("Before\n>\n\nAfter");
        assert!(zones.iter().all(|z| matches!(z, Zone::Gap(_))));
        assert_eq!(zones.len(), 2);
    }

    #[test]
    fn whitespace_only_input_has_no_zones() {
        assert!(scan_zones("  \n\n\t\n").is_empty());
        assert!(scan_zones("").is_empty());
    }

    #[test]
    fn zones_are_ordered_and_disjoint() {
        let src = "a\n```\nb\n```\n> c\nd\n```x\ne";
        let zones = scan_zones(src);
        for pair in zones.windows(2) {
            assert!(pair[0].span().end <= pair[1].span().start);
        }
    }
}
