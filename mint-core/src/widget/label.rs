//! Static text

use heapless::String;
use mint_display::{text_height, text_width, Color, DisplayError, Rect, Surface, TextStyle};

use super::{truncated, MAX_TEXT_LEN};

/// Non-focusable text, optionally centered on its anchor
#[derive(Debug, Clone)]
pub struct Label {
    x: i32,
    y: i32,
    text: String<MAX_TEXT_LEN>,
    size: u8,
    centered: bool,
}

impl Label {
    /// Size 1 text with its top-left corner at (`x`, `y`)
    pub fn new(x: i32, y: i32, text: &str) -> Self {
        Self {
            x,
            y,
            text: truncated(text),
            size: 1,
            centered: false,
        }
    }

    /// Scale glyphs by `size` (minimum 1)
    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size.max(1);
        self
    }

    /// Center the text horizontally on `x`
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replace the text; the width follows
    pub fn set_text(&mut self, text: &str) {
        self.text = truncated(text);
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    fn width(&self) -> i32 {
        text_width(&self.text, self.size)
    }

    fn left(&self) -> i32 {
        if self.centered {
            self.x - self.width() / 2
        } else {
            self.x
        }
    }

    pub(crate) fn bounds(&self) -> Rect {
        Rect::new(
            self.left(),
            self.y,
            self.width() as u32,
            text_height(self.size) as u32,
        )
    }

    pub(crate) fn draw<S: Surface>(
        &self,
        surface: &mut S,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<(), DisplayError> {
        surface.draw_text(
            self.left() + offset_x,
            self.y + offset_y,
            &self.text,
            TextStyle::new(Color::On).with_size(self.size),
        )
    }
}
