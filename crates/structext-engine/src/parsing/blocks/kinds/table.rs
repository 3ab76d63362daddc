use std::sync::OnceLock;

use regex::Regex;

/// Pipe table block type.
///
/// A table is a `|` row immediately followed by a separator row such as
/// `|---|:--:|`. Body rows continue while lines keep starting with `|`.
pub struct Table;

/// A table found in a gap, with the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub leading: String,
    pub headers: Vec<String>,
    /// Rows whose cell count equals the header count.
    pub rows: Vec<Vec<String>>,
    /// Rows dropped for having the wrong number of cells.
    pub dropped_rows: usize,
    pub trailing: String,
}

impl Table {
    pub const PIPE: char = '|';

    fn separator() -> &'static Regex {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        SEPARATOR
            .get_or_init(|| Regex::new(r"^\|[-:\s|]+\|$").expect("Invalid table separator regex"))
    }

    pub fn is_row(line: &str) -> bool {
        line.trim_start().starts_with(Self::PIPE)
    }

    pub fn is_separator(line: &str) -> bool {
        Self::separator().is_match(line.trim())
    }

    /// Splits a row into trimmed cells, ignoring the outer pipes.
    pub fn cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(|c| c.trim().to_string()).collect()
    }

    /// Header cells: like [`Table::cells`] with empty cells removed.
    pub fn header_cells(line: &str) -> Vec<String> {
        Self::cells(line)
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Index of the first line that starts a table.
    pub fn find(lines: &[&str]) -> Option<usize> {
        lines.windows(2).position(|w| {
            Self::is_row(w[0]) && Self::is_separator(w[1]) && !Self::header_cells(w[0]).is_empty()
        })
    }

    pub fn layout(text: &str) -> Option<TableLayout> {
        let lines: Vec<&str> = text.lines().collect();
        let head = Self::find(&lines)?;
        let headers = Self::header_cells(lines[head]);

        let body_start = head + 2;
        let body_end = lines[body_start..]
            .iter()
            .position(|l| !Self::is_row(l))
            .map_or(lines.len(), |p| body_start + p);

        let mut rows = vec![];
        let mut dropped_rows = 0;
        for line in &lines[body_start..body_end] {
            let cells = Self::cells(line);
            if cells.len() == headers.len() {
                rows.push(cells);
            } else {
                dropped_rows += 1;
            }
        }

        Some(TableLayout {
            leading: lines[..head].join("\n"),
            headers,
            rows,
            dropped_rows,
            trailing: lines[body_end..].join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn separator_variants() {
        assert!(Table::is_separator("|---|---|"));
        assert!(Table::is_separator("| :-- | --: |"));
        assert!(Table::is_separator("  |:-:|  "));
        assert!(!Table::is_separator("| a | b |"));
        assert!(!Table::is_separator("---"));
    }

    #[test]
    fn cells_are_trimmed() {
        assert_eq!(Table::cells("| 1 |  | 3 |"), vec!["1", "", "3"]);
        assert_eq!(Table::header_cells("| A |  | C |"), vec!["A", "C"]);
    }

    #[test]
    fn simple_table() {
        let t = Table::layout("| A | B |\n|---|---|\n| 1 | 2 |").unwrap();
        assert_eq!(t.headers, vec!["A", "B"]);
        assert_eq!(t.rows, vec![vec!["1", "2"]]);
        assert_eq!(t.leading, "");
        assert_eq!(t.trailing, "");
    }

    #[test]
    fn malformed_rows_are_dropped() {
        let t = Table::layout("| A | B |\n|---|---|\n| 1 |\n| 2 | 3 |\n| 4 | 5 | 6 |").unwrap();
        assert_eq!(t.rows, vec![vec!["2", "3"]]);
        assert_eq!(t.dropped_rows, 2);
    }

    #[test]
    fn text_around_table_is_kept() {
        let t = Table::layout("Prices:\n| Item | Cost |\n|--|--|\n| Tea | 2 |\n\nThat's all.").unwrap();
        assert_eq!(t.leading, "Prices:");
        assert_eq!(t.trailing, "\nThat's all.");
    }

    #[test]
    fn pipe_line_without_separator_is_not_a_table() {
        assert_eq!(Table::layout("| A | B |\n| 1 | 2 |"), None);
        assert_eq!(Table::layout("just text"), None);
    }
}
