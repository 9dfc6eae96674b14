//! Recording surface
//!
//! A [`Surface`] that records every primitive instead of rasterising it.
//! Host tests assert on the recorded operations; simulators can replay
//! them onto a window. Clearing starts a new frame and forgets the
//! previous one, like a framebuffer would.

use heapless::{String, Vec};

use crate::backend::{Color, DisplayError, Rect, Surface, TextStyle, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Maximum recorded operations per frame
pub const MAX_OPS: usize = 256;

/// Maximum recorded text length per operation
pub const MAX_TEXT_LEN: usize = 32;

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawOp {
    Clear,
    Fill(Rect, Color),
    Outline(Rect, Color),
    Text {
        x: i32,
        y: i32,
        text: String<MAX_TEXT_LEN>,
        style: TextStyle,
    },
    Flush,
}

/// Surface that logs draw calls
pub struct RecordingSurface {
    ops: Vec<DrawOp, MAX_OPS>,
    width: u16,
    height: u16,
    initialized: bool,
    fail_init: bool,
    frames: u32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create a 128x64 recording surface
    pub fn new() -> Self {
        Self::with_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Create a recording surface of arbitrary size
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            ops: Vec::new(),
            width,
            height,
            initialized: false,
            fail_init: false,
            frames: 0,
        }
    }

    /// Make [`Surface::init`] fail, to exercise bring-up error paths
    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Operations recorded since the last clear or reset
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget recorded operations
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Number of frames presented
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Whether init has succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Position of the first recorded text equal to `text`
    pub fn find_text(&self, text: &str) -> Option<(i32, i32)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { x, y, text: t, .. } if t.as_str() == text => Some((*x, *y)),
            _ => None,
        })
    }

    fn record(&mut self, op: DrawOp) -> Result<(), DisplayError> {
        self.ops.push(op).map_err(|_| DisplayError::BufferOverflow)
    }
}

impl Surface for RecordingSurface {
    fn init(&mut self) -> Result<(), DisplayError> {
        if self.fail_init {
            return Err(DisplayError::Communication);
        }
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.clear();
        self.record(DrawOp::Clear)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.record(DrawOp::Fill(rect, color))
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        self.record(DrawOp::Outline(rect, color))
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        style: TextStyle,
    ) -> Result<(), DisplayError> {
        let mut recorded = String::new();
        for ch in text.chars() {
            if recorded.push(ch).is_err() {
                break;
            }
        }
        self.record(DrawOp::Text {
            x,
            y,
            text: recorded,
            style,
        })
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.frames += 1;
        self.record(DrawOp::Flush)
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
