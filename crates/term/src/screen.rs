//! TerminalScreen: flushes a [`TextFrame`] to a real terminal.
//!
//! Owns raw mode and the alternate screen. Frames are small (a lane grid
//! plus a HUD), so every draw is a full redraw encoded into one buffered
//! write.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::frame::{Style, TextFrame};

pub struct TerminalScreen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
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

    /// Encode and flush a full-frame redraw.
    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();

        let mut current_style: Option<Style> = None;
        for y in 0..frame.height() {
            self.buf.queue(cursor::MoveTo(0, y))?;
            for x in 0..frame.width() {
                let glyph = frame.get(x, y).unwrap_or_default();
                if current_style != Some(glyph.style) {
                    apply_style_into(&mut self.buf, glyph.style)?;
                    current_style = Some(glyph.style);
                }
                self.buf.queue(Print(glyph.ch))?;
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

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(style.fg))?;
    out.queue(SetBackgroundColor(style.bg))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}
