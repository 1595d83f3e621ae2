//! Styled character frame for terminal rendering.

use crossterm::style::Color;

/// Per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::Grey,
            bg: Color::Reset,
            bold: false,
        }
    }
}

impl Style {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A single styled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A viewport-sized grid of styled characters, built by the view and
/// flushed by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl TextFrame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|idx| self.glyphs[idx])
    }

    /// Writes outside the frame are silently dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(idx) = self.index(x, y) {
            self.glyphs[idx] = Glyph { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        for (offset, ch) in text.chars().enumerate() {
            self.put(x + offset as u16, y, ch, style);
        }
    }

    /// The characters of one row, unstyled. Handy for tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|glyph| glyph.ch).unwrap_or(' '))
            .collect()
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}
