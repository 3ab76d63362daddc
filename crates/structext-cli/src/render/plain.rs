//! Plain-text rendering: styling is dropped, content is kept.

use structext_engine::{Block, InlineRun, tokenize};

/// Flattens inline markup to its visible text. Links keep their target.
pub fn inline_text(text: &str) -> String {
    tokenize(text)
        .iter()
        .map(|run| match run {
            InlineRun::Link { content, url } => format!("{content} ({url})"),
            other => other.content().to_string(),
        })
        .collect()
}

pub fn render(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { content } => inline_text(content),
        Block::Header { content } => format!("{}:", inline_text(content)),
        Block::Heading { level, content } => {
            let title = inline_text(content);
            let rule = if *level == 1 { '=' } else { '-' };
            let underline: String = std::iter::repeat_n(rule, title.chars().count()).collect();
            format!("{title}\n{underline}")
        }
        Block::Section { header, content } => {
            let mut out = format!("{}:", inline_text(header));
            for p in content {
                out.push_str("\n\n");
                out.push_str(&inline_text(p));
            }
            out
        }
        Block::Table { headers, rows } => render_table(headers, rows),
        Block::OrderedList { items } => items
            .iter()
            .map(|i| format!("{}. {}", i.number, inline_text(&i.content)))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::UnorderedList { items } => items
            .iter()
            .map(|i| format!("{}• {}", "  ".repeat(i.level), inline_text(&i.content)))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::CodeBlock { language, code } => {
            let body: Vec<String> = code.lines().map(|l| format!("    {l}")).collect();
            format!("[{language}]\n{}", body.join("\n"))
        }
        Block::Blockquote { content } => content
            .lines()
            .map(|l| format!("│ {}", inline_text(l)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = headers.iter().map(|h| inline_text(h)).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|c| inline_text(c)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.as_slice())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(rows.iter().map(|r| line(r.as_slice())));
    out.join("\n")
}
