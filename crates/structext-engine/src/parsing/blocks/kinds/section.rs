use crate::parsing::blocks::types::Block;

/// Titled paragraph groups produced by topic sections.
pub struct Section;

impl Section {
    /// Distributes `paragraphs` evenly over `titles`, in order.
    ///
    /// Each title receives `ceil(paragraphs / titles)` paragraphs; titles
    /// left without any are skipped.
    pub fn distribute(paragraphs: Vec<String>, titles: &[&str]) -> Vec<Block> {
        if titles.is_empty() {
            return paragraphs.into_iter().map(Block::paragraph).collect();
        }

        let per = paragraphs.len().div_ceil(titles.len());
        if per == 0 {
            return vec![];
        }

        let mut chunks = paragraphs.chunks(per);
        titles
            .iter()
            .filter_map(|title| {
                let chunk = chunks.next()?;
                Some(Block::Section {
                    header: title.to_string(),
                    content: chunk.to_vec(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paras(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i}.")).collect()
    }

    #[test]
    fn even_distribution() {
        let blocks = Section::distribute(paras(4), &["A", "B"]);
        assert_eq!(
            blocks,
            vec![
                Block::Section {
                    header: "A".into(),
                    content: vec!["P1.".into(), "P2.".into()]
                },
                Block::Section {
                    header: "B".into(),
                    content: vec!["P3.".into(), "P4.".into()]
                },
            ]
        );
    }

    #[test]
    fn more_titles_than_paragraphs() {
        let blocks = Section::distribute(paras(2), &["A", "B", "C"]);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[1], Block::Section { header, .. } if header == "B"));
    }

    #[test]
    fn uneven_tail_goes_to_last_section() {
        let blocks = Section::distribute(paras(5), &["A", "B"]);
        assert!(matches!(&blocks[1], Block::Section { content, .. } if content.len() == 2));
    }

    #[test]
    fn no_titles_gives_paragraphs() {
        assert_eq!(
            Section::distribute(paras(1), &[]),
            vec![Block::paragraph("P1.")]
        );
    }
}
