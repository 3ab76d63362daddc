//! Scrollable terminal view of extracted blocks.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use structext_engine::{Block, InlineRun, tokenize};

/// Maps inline runs to styled spans on top of `base`.
pub fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    tokenize(text)
        .into_iter()
        .map(|run| match run {
            InlineRun::Text(s) => Span::styled(s, base),
            InlineRun::Bold(s) => Span::styled(s, base.add_modifier(Modifier::BOLD)),
            InlineRun::Italic(s) => Span::styled(s, base.add_modifier(Modifier::ITALIC)),
            InlineRun::Strikethrough(s) => Span::styled(s, base.add_modifier(Modifier::CROSSED_OUT)),
            InlineRun::Code(s) => Span::styled(s, base.fg(Color::Yellow)),
            InlineRun::Link { content, .. } => Span::styled(
                content,
                base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}

fn styled_line(prefix: &str, text: &str, base: Style) -> Line<'static> {
    let mut spans = vec![];
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix.to_string(), base));
    }
    spans.extend(inline_spans(text, base));
    Line::from(spans)
}

/// Converts blocks to display lines, one blank line between blocks.
pub fn to_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let plain = Style::default();
    let strong = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![];

    for block in blocks {
        match block {
            Block::Paragraph { content } => lines.push(styled_line("", content, plain)),
            Block::Header { content } => lines.push(styled_line("", content, strong)),
            Block::Heading { level, content } => {
                let style = strong.fg(Color::Magenta);
                let prefix = format!("{} ", "#".repeat(usize::from(*level)));
                lines.push(styled_line(&prefix, content, style));
            }
            Block::Section { header, content } => {
                lines.push(styled_line("", header, strong.fg(Color::Magenta)));
                for p in content {
                    lines.push(styled_line("", p, plain));
                }
            }
            Block::Table { headers, rows } => {
                lines.push(table_line(headers, strong));
                for row in rows {
                    lines.push(table_line(row, plain));
                }
            }
            Block::OrderedList { items } => {
                for i in items {
                    lines.push(styled_line(&format!("{}. ", i.number), &i.content, plain));
                }
            }
            Block::UnorderedList { items } => {
                for i in items {
                    let prefix = format!("{}• ", "  ".repeat(i.level));
                    lines.push(styled_line(&prefix, &i.content, plain));
                }
            }
            Block::CodeBlock { language, code } => {
                let dim = Style::default().fg(Color::DarkGray);
                lines.push(Line::from(Span::styled(format!("[{language}]"), dim)));
                for l in code.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {l}"),
                        Style::default().fg(Color::Yellow),
                    )));
                }
            }
            Block::Blockquote { content } => {
                let style = Style::default().add_modifier(Modifier::ITALIC);
                for l in content.lines() {
                    lines.push(styled_line("│ ", l, style));
                }
            }
        }
        lines.push(Line::default());
    }

    lines.pop();
    lines
}

fn table_line(cells: &[String], base: Style) -> Line<'static> {
    let mut spans = vec![Span::styled("│ ", base)];
    for cell in cells {
        spans.extend(inline_spans(cell, base));
        spans.push(Span::styled(" │ ", base));
    }
    Line::from(spans)
}

struct Viewer {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl Viewer {
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX).min(self.max_scroll());
    }
}

/// Shows `blocks` until the user quits with `q` or `Esc`.
pub fn run(title: &str, blocks: &[Block]) -> Result<()> {
    let mut viewer = Viewer {
        title: title.to_string(),
        lines: to_lines(blocks),
        scroll: 0,
    };

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => viewer.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => viewer.scroll_by(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => viewer.scroll_by(20),
                KeyCode::PageUp => viewer.scroll_by(-20),
                KeyCode::Home | KeyCode::Char('g') => viewer.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => viewer.scroll = viewer.max_scroll(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, viewer: &Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let content = Paragraph::new(viewer.lines.clone())
        .block(Panel::default().borders(Borders::ALL).title(viewer.title.as_str()))
        .wrap(Wrap { trim: false })
        .scroll((viewer.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}
