use super::{
    kinds::{Bold, CodeSpan, Italic, Link, Strikethrough},
    types::{InlineRun, SpannedRun},
};
use crate::parsing::span::Span;

type Scan = fn(&str, &mut Vec<SpannedRun>);

/// Candidate scans in priority order. Candidates that start at the same
/// offset keep this order after sorting, so a link beats bold on a tie.
const SCANS: [(&str, Scan); 5] = [
    ("link", Link::scan),
    ("bold", Bold::scan),
    ("italic", Italic::scan),
    ("strikethrough", Strikethrough::scan),
    ("code", CodeSpan::scan),
];

/// Tokenizes inline markup into runs paired with the spans they consumed.
///
/// Every scan runs over the whole text; all candidates are pooled and sorted
/// by start offset, and a candidate is accepted only if it does not overlap
/// an already accepted one. The gaps become [`InlineRun::Text`].
///
/// # Returns
/// Runs whose spans tile `text` exactly, in order, without overlap.
pub fn tokenize_spanned(text: &str) -> Vec<SpannedRun> {
    let mut candidates = vec![];
    for (name, scan) in SCANS {
        let before = candidates.len();
        scan(text, &mut candidates);
        log::trace!("{name} scan found {} candidates", candidates.len() - before);
    }

    // Stable: equal starts keep scan priority.
    candidates.sort_by_key(|c| c.span.start);

    let mut out = vec![];
    let mut last_end = 0usize;

    // Helper to flush accumulated text as a Text run
    fn flush_text(out: &mut Vec<SpannedRun>, text: &str, start: usize, end: usize) {
        if end > start {
            out.push(SpannedRun {
                span: Span { start, end },
                run: InlineRun::Text(text[start..end].to_string()),
            });
        }
    }

    for c in candidates {
        // Accepted spans are sorted and disjoint, so only the furthest end matters.
        if c.span.start < last_end {
            log::trace!("dropping overlapping candidate at {:?}", c.span);
            continue;
        }
        flush_text(&mut out, text, last_end, c.span.start);
        last_end = c.span.end;
        out.push(c);
    }

    flush_text(&mut out, text, last_end, text.len());
    out
}

/// Tokenizes inline markup into an ordered sequence of [`InlineRun`]s.
pub fn tokenize(text: &str) -> Vec<InlineRun> {
    tokenize_spanned(text).into_iter().map(|s| s.run).collect()
}
