use std::sync::OnceLock;

use regex::Regex;

use super::scan_delimited;
use crate::parsing::{
    inline::{
        cursor::Cursor,
        types::{InlineRun, SpannedRun},
    },
    span::Span,
};

/// `**bold**` with non-greedy content free of `*`.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";

    pub fn scan(text: &str, out: &mut Vec<SpannedRun>) {
        static BOLD: OnceLock<Regex> = OnceLock::new();
        let re = BOLD.get_or_init(|| Regex::new(r"\*\*([^*]+?)\*\*").expect("Invalid bold regex"));
        scan_delimited(re, text, out, InlineRun::Bold);
    }
}

/// `*italic*`: single stars that touch no other star.
///
/// Hand-scanned because the regex engine has no look-around; this keeps
/// `**bold**` from also reading as italics.
pub struct Italic;

impl Italic {
    pub const STAR: u8 = b'*';

    pub fn scan(text: &str, out: &mut Vec<SpannedRun>) {
        let mut cur = Cursor::new(text);

        while cur.seek(Self::STAR) {
            let open = cur.pos();
            let lone_open = cur.prev() != Some(Self::STAR) && cur.peek_at(1) != Some(Self::STAR);
            cur.bump();
            if !lone_open {
                continue;
            }

            // Content excludes `*`, so the only possible closer is the next star.
            let mut probe = cur.clone();
            if !probe.seek(Self::STAR) {
                return;
            }
            let close = probe.pos();
            if close == open + 1 || probe.peek_at(1) == Some(Self::STAR) {
                continue;
            }

            out.push(SpannedRun {
                span: Span::new(open, close + 1),
                run: InlineRun::Italic(text[open + 1..close].to_string()),
            });
            probe.bump();
            cur = probe;
        }
    }
}
