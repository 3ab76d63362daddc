use std::sync::OnceLock;

use regex::Regex;

use super::scan_delimited;
use crate::parsing::inline::types::{InlineRun, SpannedRun};

/// Code span inline type with owned delimiter constant.
///
/// Content is kept verbatim; markup inside a code span is not styled as
/// long as the span wins overlap resolution.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    pub fn scan(text: &str, out: &mut Vec<SpannedRun>) {
        static CODE: OnceLock<Regex> = OnceLock::new();
        let re = CODE.get_or_init(|| Regex::new(r"`([^`]+?)`").expect("Invalid code span regex"));
        scan_delimited(re, text, out, InlineRun::Code);
    }
}
