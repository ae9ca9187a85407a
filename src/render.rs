//! Tree rendering using ratatui Line/Span styling.
//!
//! Nothing here writes to a terminal; see [`crate::terminal`] for that.

use crate::tree::{EntryKind, TreeEntry};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Banner title printed above the tree.
pub const HEADER_TITLE: &str = "Árbol de directorios:";
/// Underline printed below the banner title.
pub const HEADER_RULE: &str = "==================";

// Bright palette; crossterm writes these as 256-color indices 12 / 10 / 11.
pub const DIR_STYLE: Style = Style::new().fg(Color::LightBlue);
pub const FILE_STYLE: Style = Style::new().fg(Color::LightGreen);
pub const HEADER_STYLE: Style = Style::new().fg(Color::LightYellow);

/// Sanitize control characters to avoid terminal control-sequence injection.
fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// The banner block: blank line, title, rule, blank line.
pub fn header_lines() -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(HEADER_TITLE, HEADER_STYLE)),
        Line::from(Span::styled(HEADER_RULE, HEADER_STYLE)),
        Line::default(),
    ]
}

/// Convert a slice of `TreeEntry` into styled ratatui `Line` objects.
pub fn tree_to_lines(entries: &[TreeEntry]) -> Vec<Line<'static>> {
    entries.iter().map(entry_to_line).collect()
}

/// Convert a single `TreeEntry` into a styled `Line`.
///
/// The prefix is left unstyled; only the name carries a color.
fn entry_to_line(entry: &TreeEntry) -> Line<'static> {
    let prefix = Span::raw(entry.prefix.clone());
    let body = match &entry.kind {
        EntryKind::Dir => Span::styled(sanitize_terminal_text(&entry.name), DIR_STYLE),
        EntryKind::File => Span::styled(sanitize_terminal_text(&entry.name), FILE_STYLE),
        EntryKind::Error(err) => {
            let safe_err = sanitize_terminal_text(&err.to_string());
            if entry.name.is_empty() {
                Span::raw(format!("Error: {}", safe_err))
            } else {
                let safe_name = sanitize_terminal_text(&entry.name);
                Span::raw(format!("{} [Error: {}]", safe_name, safe_err))
            }
        }
    };
    Line::from(vec![prefix, body])
}

/// Extract plain text from a `Line` (useful for testing).
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
