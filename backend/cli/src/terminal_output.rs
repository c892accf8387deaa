//! Terminal output utilities: ANSI styling, notes and table rendering.

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Strip ANSI escape codes from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm'
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Applies styles only when colour output is enabled.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    pub color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn success(&self, msg: &str) -> String {
        if self.color {
            format!("{GREEN}{BOLD}✓{RESET} {msg}")
        } else {
            format!("OK: {msg}")
        }
    }

    pub fn warning(&self, msg: &str) -> String {
        if self.color {
            format!("{YELLOW}{BOLD}⚠{RESET} {msg}")
        } else {
            format!("WARN: {msg}")
        }
    }

    pub fn error(&self, msg: &str) -> String {
        if self.color {
            format!("{RED}{BOLD}✗{RESET} {msg}")
        } else {
            format!("ERROR: {msg}")
        }
    }

    pub fn info(&self, msg: &str) -> String {
        if self.color {
            format!("{CYAN}{BOLD}ℹ{RESET} {msg}")
        } else {
            format!("INFO: {msg}")
        }
    }
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

/// A table column definition.
pub struct Column {
    pub header: String,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Render a left-aligned table. Cells wider than a column's `max_width`
/// are truncated with an ellipsis.
pub fn render_table(styler: &Styler, columns: &[Column], rows: &[Vec<String>]) -> String {
    let num_cols = columns.len();
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| c.header.chars().count())
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            let w = strip_ansi(cell).chars().count();
            let w = columns[i].max_width.map_or(w, |max| w.min(max));
            widths[i] = widths[i].max(w);
        }
    }

    let mut out = String::new();

    let header_cells: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| pad_cell(&col.header, widths[i]))
        .collect();
    out.push_str(&format!("  {}\n", styler.bold(header_cells.join("  ").trim_end())));

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("  {}\n", sep.join("  ")));

    for row in rows {
        let cells: Vec<String> = (0..num_cols)
            .map(|i| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                pad_cell(&truncate(cell, widths[i]), widths[i])
            })
            .collect();
        out.push_str(&format!("  {}\n", cells.join("  ").trim_end()));
    }

    out
}

fn truncate(s: &str, width: usize) -> String {
    let plain = strip_ansi(s);
    if plain.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = plain.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn pad_cell(s: &str, width: usize) -> String {
    let visible_len = strip_ansi(s).chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(visible_len)))
}
