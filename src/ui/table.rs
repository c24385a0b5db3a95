//! Minimal column-aligned table rendering.

use colored::{ColoredString, Colorize};

const DEFAULT_WIDTH: usize = 100;
const COLUMN_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Green,
    Yellow,
    Red,
    Cyan,
    Magenta,
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, CellStyle::Plain)
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self.style {
            CellStyle::Plain => text.normal(),
            CellStyle::Green => text.green(),
            CellStyle::Yellow => text.yellow(),
            CellStyle::Red => text.red().bold(),
            CellStyle::Cyan => text.cyan(),
            CellStyle::Magenta => text.magenta(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Table {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(title: impl Into<String>, headers: &[S]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render to a string, capping the total width at `max_width`.
    /// Only the last column is truncated.
    pub fn render(&self, max_width: usize) -> String {
        let columns = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(columns) {
                widths[i] = widths[i].max(cell.text.chars().count());
            }
        }

        if let Some(last) = widths.last_mut() {
            let fixed: usize = widths_prefix_total(&self.headers, &self.rows, columns);
            let available = max_width.saturating_sub(fixed);
            if available > 3 && *last > available {
                *last = available;
            }
        }

        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&format!("{}\n", self.title.cyan().bold()));
        }

        let header_line: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| pad(h, widths[i]))
            .collect();
        out.push_str(&format!(
            "{}\n",
            header_line.join(&" ".repeat(COLUMN_GAP)).bold()
        ));
        let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP * columns.saturating_sub(1);
        out.push_str(&format!("{}\n", "─".repeat(rule_width).bright_black()));

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .take(columns)
                .map(|(i, cell)| {
                    let text = truncate(&cell.text, widths[i]);
                    let padding = widths[i].saturating_sub(text.chars().count());
                    format!("{}{}", cell.paint(&text), " ".repeat(padding))
                })
                .collect();
            out.push_str(cells.join(&" ".repeat(COLUMN_GAP)).trim_end());
            out.push('\n');
        }

        out
    }

    /// Print using the current terminal width.
    pub fn print(&self) {
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(DEFAULT_WIDTH);
        print!("{}", self.render(width));
    }
}

/// Width used by every column except the last, including gaps.
fn widths_prefix_total(headers: &[String], rows: &[Vec<Cell>], columns: usize) -> usize {
    (0..columns.saturating_sub(1))
        .map(|i| {
            let cell_max = rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.text.chars().count())
                .max()
                .unwrap_or(0);
            cell_max.max(headers[i].chars().count()) + COLUMN_GAP
        })
        .sum()
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
