//! Push button

use alloc::boxed::Box;
use core::fmt;

use heapless::String;
use mint_display::{text_width, Color, DisplayError, Rect, Surface, TextStyle, GLYPH_HEIGHT};

use super::{truncated, MAX_TEXT_LEN};
use crate::animation::Animation;

/// Depth of the press animation in pixels
pub const PRESS_DEPTH_PX: f32 = 2.0;

/// Duration of the press animation
pub const PRESS_DURATION_MS: u32 = 100;

/// Callback run when a button is activated
pub type PressHandler = Box<dyn FnMut()>;

/// Focusable button with a centered caption
///
/// On click the button drops by [`PRESS_DEPTH_PX`] and springs back over
/// [`PRESS_DURATION_MS`], then runs its press handler.
pub struct Button {
    rect: Rect,
    text: String<MAX_TEXT_LEN>,
    press: Animation,
    on_press: Option<PressHandler>,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("rect", &self.rect)
            .field("text", &self.text)
            .field("press", &self.press)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

impl Button {
    /// Button occupying (`x`, `y`, `width`, `height`)
    pub fn new(x: i32, y: i32, width: u32, height: u32, text: &str) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            text: truncated(text),
            press: Animation::new(),
            on_press: None,
        }
    }

    /// Bind the press handler
    pub fn on_press(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// Replace (or remove) the press handler
    pub fn set_on_press(&mut self, handler: Option<PressHandler>) {
        self.on_press = handler;
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = truncated(text);
    }

    /// Whether the press animation is still in flight
    pub fn is_pressing(&self) -> bool {
        self.press.is_running()
    }

    pub(crate) fn bounds(&self) -> Rect {
        self.rect
    }

    pub(crate) fn click(&mut self, now_ms: u32) {
        self.press.start(PRESS_DEPTH_PX, 0.0, PRESS_DURATION_MS, now_ms);
        if let Some(handler) = self.on_press.as_mut() {
            handler();
        }
    }

    pub(crate) fn tick(&mut self, now_ms: u32) {
        self.press.tick(now_ms);
    }

    pub(crate) fn draw<S: Surface>(
        &self,
        surface: &mut S,
        offset_x: i32,
        offset_y: i32,
        focused: bool,
        now_ms: u32,
    ) -> Result<(), DisplayError> {
        let press = self.press.value(now_ms) as i32;
        let body = self.rect.translate(offset_x + press, offset_y + press);

        if focused {
            surface.fill_rect(body.inflate(1), Color::On)?;
            surface.fill_rect(body, Color::Off)?;
        } else {
            surface.draw_rect(body, Color::On)?;
        }

        let text_x = body.x + (body.width as i32 - text_width(&self.text, 1)) / 2;
        let text_y = body.y + (body.height as i32 - GLYPH_HEIGHT) / 2;
        surface.draw_text(text_x, text_y, &self.text, TextStyle::new(Color::On))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use mint_display::{DrawOp, RecordingSurface};

    #[test]
    fn test_click_runs_handler() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut button = Button::new(0, 0, 40, 12, "Go").on_press(move || seen.set(seen.get() + 1));

        button.click(0);
        button.click(10);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_click_without_handler() {
        let mut button = Button::new(0, 0, 40, 12, "Go");
        button.click(0);
        assert!(button.is_pressing());
    }

    #[test]
    fn test_press_offsets_then_settles() {
        let mut button = Button::new(10, 10, 40, 12, "Go");
        button.click(1000);

        let mut surface = RecordingSurface::new();
        button.draw(&mut surface, 0, 0, false, 1000).unwrap();
        assert_eq!(surface.ops()[0], DrawOp::Outline(Rect::new(12, 12, 40, 12), Color::On));

        button.tick(1000 + PRESS_DURATION_MS);
        assert!(!button.is_pressing());

        surface.reset();
        button.draw(&mut surface, 0, 0, false, 1000 + PRESS_DURATION_MS).unwrap();
        assert_eq!(surface.ops()[0], DrawOp::Outline(Rect::new(10, 10, 40, 12), Color::On));
    }

    #[test]
    fn test_caption_centered() {
        let button = Button::new(0, 0, 40, 12, "OK");
        let mut surface = RecordingSurface::new();
        button.draw(&mut surface, 0, 0, false, 0).unwrap();
        // (40 - 12) / 2 = 14, (12 - 8) / 2 = 2
        assert_eq!(surface.find_text("OK"), Some((14, 2)));
    }

    #[test]
    fn test_focused_draw_order() {
        let button = Button::new(10, 10, 40, 12, "OK");
        let mut surface = RecordingSurface::new();
        button.draw(&mut surface, 0, 0, true, 0).unwrap();
        assert_eq!(surface.ops()[0], DrawOp::Fill(Rect::new(9, 9, 42, 14), Color::On));
        assert_eq!(surface.ops()[1], DrawOp::Fill(Rect::new(10, 10, 40, 12), Color::Off));
    }
}
