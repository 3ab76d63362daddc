use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    inline::types::{InlineRun, SpannedRun},
    span::Span,
};

/// `[text](url)` links.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';

    fn pattern() -> &'static Regex {
        static LINK: OnceLock<Regex> = OnceLock::new();
        LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
    }

    pub fn scan(text: &str, out: &mut Vec<SpannedRun>) {
        for caps in Self::pattern().captures_iter(text) {
            let (Some(whole), Some(content), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            out.push(SpannedRun {
                span: Span::new(whole.start(), whole.end()),
                run: InlineRun::Link {
                    content: content.as_str().to_string(),
                    url: url.as_str().to_string(),
                },
            });
        }
    }
}
