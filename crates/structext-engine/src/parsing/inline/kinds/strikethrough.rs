use std::sync::OnceLock;

use regex::Regex;

use super::scan_delimited;
use crate::parsing::inline::types::{InlineRun, SpannedRun};

/// `~~struck~~` with non-greedy content free of `~`.
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIM: &'static str = "~~";

    pub fn scan(text: &str, out: &mut Vec<SpannedRun>) {
        static STRIKE: OnceLock<Regex> = OnceLock::new();
        let re = STRIKE.get_or_init(|| Regex::new(r"~~([^~]+?)~~").expect("Invalid strikethrough regex"));
        scan_delimited(re, text, out, InlineRun::Strikethrough);
    }
}
