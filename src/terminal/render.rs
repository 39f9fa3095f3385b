//! Terminal rendering module
//!
//! A frame is composed as plain lines plus a cursor position, then drawn
//! with crossterm. Composition is pure so the layout can be tested without a
//! terminal.

use std::io::Write;

use crossterm::{QueueableCommand, cursor, style, terminal};

use crate::core::line_buffer::ViewLine;

pub const ELLIPSIS: &str = "...";
pub const EMPTY_STACK: &str = "EMPTY";

pub const SHORT_HELP: &str = "\
pop:   pop last element from stack
list:  show stack
reset: reset stack
quit:  quit";

/// One screen worth of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    /// Column and row of the terminal cursor
    pub cursor: (u16, u16),
}

/// Everything a frame is composed from
#[derive(Debug, Clone, Copy)]
pub struct FrameParts<'a> {
    pub prompt: &'a str,
    pub input: &'a ViewLine,
    pub output: &'a str,
    pub stack: &'a [f64],
    pub width: usize,
    pub help: &'a str,
}

/// Lay out the input line, last output, stack and help footer
pub fn compose_frame(parts: FrameParts<'_>) -> Frame {
    let prompt_len = parts.prompt.chars().count();
    // Tabs are drawn as one column so the cursor column stays exact.
    let input = parts.input.text.replace('\t', " ");

    let mut lines = vec![
        format!("{}{}", parts.prompt, input),
        tail(parts.output, prompt_len + parts.width),
        format_stack(parts.stack, prompt_len + parts.width),
        String::new(),
    ];
    lines.extend(parts.help.lines().map(str::to_string));

    let column = prompt_len + parts.input.cursor;
    Frame {
        lines,
        cursor: (u16::try_from(column).unwrap_or(u16::MAX), 0),
    }
}

/// Most recent stack values that fit in `width` columns
///
/// Values are shown oldest to newest with two decimals. When older values do
/// not fit they are replaced by a leading `...`.
pub fn format_stack(values: &[f64], width: usize) -> String {
    if values.is_empty() {
        return EMPTY_STACK.to_string();
    }

    let reserved = ELLIPSIS.len() + 1;
    let mut parts = Vec::new();
    let mut used = 0;
    let mut truncated = false;
    for value in values.iter().rev() {
        let part = format!("[{:.2}]", value);
        let needed = used + part.len() + usize::from(!parts.is_empty());
        if needed + reserved > width {
            truncated = true;
            break;
        }
        used = needed;
        parts.push(part);
    }

    if truncated {
        parts.push(ELLIPSIS.to_string());
    }
    parts.reverse();
    parts.join(" ")
}

/// Last `width` characters of `text`
fn tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}

/// Draw `frame` over the whole screen
pub fn draw_frame<W: Write>(out: &mut W, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
    out.queue(cursor::Hide)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for (row, line) in frame.lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(style::Print(line))?;
    }
    let (column, row) = frame.cursor;
    out.queue(cursor::MoveTo(column, row))?;
    out.queue(cursor::Show)?;
    out.flush()?;
    Ok(())
}
