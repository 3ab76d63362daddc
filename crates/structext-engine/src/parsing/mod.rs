pub mod blocks;
pub mod inline;
pub mod lines;
pub mod span;

#[cfg(test)]
mod tests;

use std::{borrow::Cow, sync::OnceLock};

use crate::heuristics::{CompiledHeuristics, Heuristics, HeuristicsError};

use blocks::{Block, Zone, scan_zones, structure_gap};

/// Converts raw response text into an ordered sequence of [`Block`]s.
///
/// Holds compiled heuristics; build one per configuration and share it.
#[derive(Debug, Clone)]
pub struct Extractor {
    heuristics: CompiledHeuristics,
}

impl Extractor {
    pub fn new(heuristics: &Heuristics) -> Result<Self, HeuristicsError> {
        Ok(Self {
            heuristics: CompiledHeuristics::compile(heuristics)?,
        })
    }

    pub fn heuristics(&self) -> &CompiledHeuristics {
        &self.heuristics
    }

    /// Extracts blocks from `text`. Never fails; blank input gives no blocks.
    pub fn extract(&self, text: &str) -> Vec<Block> {
        if text.trim().is_empty() {
            return vec![];
        }

        let mut out = vec![];
        for zone in scan_zones(text) {
            match zone {
                Zone::Gap(span) => out.extend(structure_gap(span.slice(text), &self.heuristics)),
                extracted => out.extend(extracted.into_block()),
            }
        }

        for block in &mut out {
            self.apply_emphasis(block);
        }
        out
    }

    fn apply_emphasis(&self, block: &mut Block) {
        let h = &self.heuristics;
        match block {
            Block::Paragraph { content } => {
                if let Cow::Owned(s) = h.emphasize(content) {
                    *content = s;
                }
            }
            Block::Section { content, .. } => {
                for p in content.iter_mut() {
                    if let Cow::Owned(s) = h.emphasize(p) {
                        *p = s;
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        default_extractor().clone()
    }
}

fn default_extractor() -> &'static Extractor {
    static DEFAULT: OnceLock<Extractor> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        Extractor::new(&Heuristics::default()).expect("Invalid default heuristics")
    })
}

/// Extracts blocks from `text` with the default heuristics.
pub fn extract(text: &str) -> Vec<Block> {
    default_extractor().extract(text)
}
