//! Drawing surface trait
//!
//! Defines the interface the UI engine renders through.

use crate::graphics::font_for;

/// Panel width in pixels
pub const SCREEN_WIDTH: u16 = 128;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u16 = 64;

/// Width of one glyph cell at text size 1
pub const GLYPH_WIDTH: i32 = 6;

/// Height of one glyph cell at text size 1
pub const GLYPH_HEIGHT: i32 = 8;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Monochrome pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel lit (foreground)
    On,
    /// Pixel dark (background)
    #[default]
    Off,
}

impl Color {
    /// The other color
    pub fn inverted(self) -> Self {
        match self {
            Color::On => Color::Off,
            Color::Off => Color::On,
        }
    }
}

/// Axis-aligned rectangle in panel coordinates
///
/// The origin may be negative or beyond the panel; backends clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The same rectangle moved by (`dx`, `dy`)
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Grow (or shrink, for negative `by`) by `by` pixels on every side
    pub fn inflate(self, by: i32) -> Self {
        Self {
            x: self.x - by,
            y: self.y - by,
            width: (self.width as i32 + 2 * by).max(0) as u32,
            height: (self.height as i32 + 2 * by).max(0) as u32,
        }
    }

    /// Check whether a point lies inside (right and bottom edges exclusive)
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && px < self.x + self.width as i32
            && py >= self.y
            && py < self.y + self.height as i32
    }

    /// True when the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Text rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Integer glyph scale (1 = 6x8 cells)
    pub size: u8,
    /// Glyph color; the cell background is left untouched
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 1,
            color: Color::On,
        }
    }
}

impl TextStyle {
    /// Size 1 text in the given color
    pub const fn new(color: Color) -> Self {
        Self { size: 1, color }
    }

    /// Change the glyph scale
    pub const fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }
}

/// Width in pixels of `text` in the font drawn for `size`
pub fn text_width(text: &str, size: u8) -> i32 {
    let font = font_for(size);
    let advance = (font.character_size.width + font.character_spacing) as i32;
    text.chars().count() as i32 * advance
}

/// Height in pixels of one line in the font drawn for `size`
pub fn text_height(size: u8) -> i32 {
    font_for(size).character_size.height as i32
}

/// Drawing surface trait
///
/// Provides a hardware-agnostic interface for rendering to monochrome
/// displays. All drawing goes to a frame buffer; nothing is visible until
/// [`Surface::flush`].
pub trait Surface {
    /// Bring the panel up
    ///
    /// Called once by the engine before the first frame.
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Clear the frame buffer to the background color
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError>;

    /// Draw a one pixel rectangle outline (inside `rect`)
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError>;

    /// Draw text with its top-left glyph corner at (`x`, `y`)
    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle)
        -> Result<(), DisplayError>;

    /// Present the frame buffer on the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get pixel dimensions (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);
}
