//! TerminalRenderer: flushes styled rows to a real terminal.
//!
//! Full redraw every frame. The board is a handful of rows, so diffing
//! against the previous frame buys nothing here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::game_view::{Span, SpanKind};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw rows from the top-left corner, clearing each line first.
    pub fn draw(&mut self, rows: &[Vec<Span>]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;

        for (y, row) in rows.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16))?;
            for span in row {
                apply_style_into(&mut self.buf, span.kind)?;
                self.buf.queue(Print(span.text.as_str()))?;
            }
        }

        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_style_into(out: &mut Vec<u8>, kind: SpanKind) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match kind {
        SpanKind::Normal => {
            out.queue(ResetColor)?;
        }
        SpanKind::Card => {
            out.queue(SetForegroundColor(Color::DarkCyan))?;
        }
        SpanKind::Revealed => {
            out.queue(SetForegroundColor(Color::Yellow))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        SpanKind::Cursor => {
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(SetAttribute(Attribute::Reverse))?;
        }
        SpanKind::Hud => {
            out.queue(SetForegroundColor(Color::Grey))?;
        }
        SpanKind::Banner => {
            out.queue(SetForegroundColor(Color::Green))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
    }
    Ok(())
}
