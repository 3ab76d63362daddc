//! Pass two: the detector chain that structures gap text.

use crate::heuristics::CompiledHeuristics;

use super::{
    kinds::{Heading, ListMarker, Paragraph, Section, Table},
    types::{Block, OrderedItem, UnorderedItem},
};

/// Gap detectors in priority order.
///
/// Exactly one detector handles a gap: the first whose predicate matches.
/// `Paragraphs` always matches, so the chain never comes up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    Table,
    OrderedList,
    UnorderedList,
    Headings,
    Paragraphs,
}

impl Detector {
    pub const CHAIN: [Detector; 5] = [
        Detector::Table,
        Detector::OrderedList,
        Detector::UnorderedList,
        Detector::Headings,
        Detector::Paragraphs,
    ];

    /// Whether this detector's structural precondition holds for `text`.
    pub fn matches(self, text: &str) -> bool {
        match self {
            Detector::Table => Table::layout(text).is_some(),
            Detector::OrderedList => OrderedItem::matches(text),
            Detector::UnorderedList => UnorderedItem::matches(text),
            Detector::Headings => Heading::matches(text),
            Detector::Paragraphs => true,
        }
    }

    /// The first detector in [`Detector::CHAIN`] that matches `text`.
    pub fn select(text: &str) -> Detector {
        Self::CHAIN
            .into_iter()
            .find(|d| d.matches(text))
            .unwrap_or(Detector::Paragraphs)
    }

    /// Builds blocks for `text`.
    ///
    /// A detector whose precondition does not hold degrades to paragraphs.
    pub fn build(self, text: &str, h: &CompiledHeuristics) -> Vec<Block> {
        match self {
            Detector::Table => build_table(text, h),
            Detector::OrderedList => match OrderedItem::layout(text) {
                Some(l) => list_blocks(l.leading, Block::OrderedList { items: l.items }, l.trailing, h),
                None => build_paragraphs(text, h),
            },
            Detector::UnorderedList => match UnorderedItem::layout(text) {
                Some(l) => list_blocks(l.leading, Block::UnorderedList { items: l.items }, l.trailing, h),
                None => build_paragraphs(text, h),
            },
            Detector::Headings => build_headings(text, h),
            Detector::Paragraphs => build_paragraphs(text, h),
        }
    }
}

/// Structures one gap of text with the detector chain.
pub fn structure_gap(text: &str, h: &CompiledHeuristics) -> Vec<Block> {
    if text.trim().is_empty() {
        return vec![];
    }
    let detector = Detector::select(text);
    log::debug!("{detector:?} detector selected for {} bytes", text.len());
    detector.build(text, h)
}

/// Leading text: the first paragraph may be a header, the rest are paragraphs.
fn lead_blocks(text: &str, h: &CompiledHeuristics) -> Vec<Block> {
    Paragraph::split(text, h.sentences_per_paragraph())
        .into_iter()
        .enumerate()
        .map(|(i, p)| if i == 0 { h.lead_block(p) } else { Block::paragraph(p) })
        .collect()
}

fn plain_paragraphs(text: &str, h: &CompiledHeuristics) -> Vec<Block> {
    Paragraph::split(text, h.sentences_per_paragraph())
        .into_iter()
        .map(Block::paragraph)
        .collect()
}

fn build_table(text: &str, h: &CompiledHeuristics) -> Vec<Block> {
    let Some(t) = Table::layout(text) else {
        return build_paragraphs(text, h);
    };
    if t.dropped_rows > 0 {
        log::debug!("dropped {} malformed table rows", t.dropped_rows);
    }

    let mut blocks = lead_blocks(&t.leading, h);
    blocks.push(Block::Table {
        headers: t.headers,
        rows: t.rows,
    });
    // Text after a table may hold further structure.
    blocks.extend(structure_gap(&t.trailing, h));
    blocks
}

/// List trailing text is split into paragraphs without re-running the chain.
fn list_blocks(leading: String, list: Block, trailing: String, h: &CompiledHeuristics) -> Vec<Block> {
    let mut blocks = lead_blocks(&leading, h);
    blocks.push(list);
    blocks.extend(plain_paragraphs(&trailing, h));
    blocks
}

fn build_headings(text: &str, h: &CompiledHeuristics) -> Vec<Block> {
    let Some(layout) = Heading::layout(text) else {
        return build_paragraphs(text, h);
    };

    let mut blocks = plain_paragraphs(&layout.leading, h);
    for part in layout.parts {
        blocks.push(Block::Heading {
            level: part.level,
            content: part.title,
        });
        blocks.extend(plain_paragraphs(&part.body, h));
    }
    blocks
}

/// Fallback: every paragraph goes through the header heuristic.
///
/// With topic sections enabled and topics mentioned, the first paragraph
/// stays a plain paragraph and the rest are grouped under topic titles.
fn build_paragraphs(text: &str, h: &CompiledHeuristics) -> Vec<Block> {
    let paragraphs = Paragraph::split(text, h.sentences_per_paragraph());

    if let Some(titles) = h.topics_in(text)
        && !titles.is_empty()
        && !paragraphs.is_empty()
    {
        log::debug!("grouping {} paragraphs under {} topics", paragraphs.len(), titles.len());
        let mut paragraphs = paragraphs.into_iter();
        let mut blocks: Vec<Block> = paragraphs.next().map(Block::paragraph).into_iter().collect();
        blocks.extend(Section::distribute(paragraphs.collect(), &titles));
        return blocks;
    }

    paragraphs.into_iter().map(|p| h.lead_block(p)).collect()
}
