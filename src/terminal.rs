//! Terminal output: turns styled lines into ANSI-colored text.

use crossterm::queue;
use crossterm::style::{Color as AnsiColor, Print, ResetColor, SetForegroundColor};
use ratatui::style::Color;
use ratatui::text::Line;
use std::io::{self, Stdout, Write};

/// Map a palette color onto the crossterm color that produces the same
/// ANSI code.
fn ansi_color(color: Color) -> AnsiColor {
    match color {
        Color::Reset => AnsiColor::Reset,
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::DarkRed,
        Color::Green => AnsiColor::DarkGreen,
        Color::Yellow => AnsiColor::DarkYellow,
        Color::Blue => AnsiColor::DarkBlue,
        Color::Magenta => AnsiColor::DarkMagenta,
        Color::Cyan => AnsiColor::DarkCyan,
        Color::Gray => AnsiColor::Grey,
        Color::DarkGray => AnsiColor::DarkGrey,
        Color::LightRed => AnsiColor::Red,
        Color::LightGreen => AnsiColor::Green,
        Color::LightYellow => AnsiColor::Yellow,
        Color::LightBlue => AnsiColor::Blue,
        Color::LightMagenta => AnsiColor::Magenta,
        Color::LightCyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::Rgb(r, g, b) => AnsiColor::Rgb { r, g, b },
        Color::Indexed(i) => AnsiColor::AnsiValue(i),
    }
}

/// Write styled lines to any writer, one `\n`-terminated line each.
///
/// Spans with a foreground color are wrapped in a color sequence and a reset;
/// unstyled spans are written verbatim. The caller is responsible for
/// flushing.
///
/// Returns the number of lines written.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[Line<'_>]) -> io::Result<usize> {
    for line in lines {
        for span in &line.spans {
            match span.style.fg {
                Some(fg) => queue!(
                    writer,
                    SetForegroundColor(ansi_color(fg)),
                    Print(span.content.as_ref()),
                    ResetColor
                )?,
                None => write!(writer, "{}", span.content)?,
            }
        }
        writeln!(writer)?;
    }
    Ok(lines.len())
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}
