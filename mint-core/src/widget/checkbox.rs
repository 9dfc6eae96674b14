//! Checkbox with an animated mark

use alloc::boxed::Box;
use core::fmt;

use heapless::String;
use mint_display::{text_width, Color, DisplayError, Rect, Surface, TextStyle};

use super::{truncated, MAX_TEXT_LEN};
use crate::animation::Animation;

/// Edge length of the box
pub const BOX_SIZE: i32 = 12;

/// Edge length of the fully grown check mark
pub const MARK_SIZE: f32 = 8.0;

/// Duration of the mark grow/shrink animation
pub const CHECK_DURATION_MS: u32 = 150;

/// Gap between the box and its label
const LABEL_GAP: i32 = 4;

/// Callback run with the new state whenever a click toggles the checkbox
pub type ChangeHandler = Box<dyn FnMut(bool)>;

/// Focusable boolean toggle with an optional label
pub struct Checkbox {
    x: i32,
    y: i32,
    label: String<MAX_TEXT_LEN>,
    checked: bool,
    /// Mark scale, 0.0 (empty) to 1.0 (full)
    morph: Animation,
    on_change: Option<ChangeHandler>,
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("label", &self.label)
            .field("checked", &self.checked)
            .field("morph", &self.morph)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Checkbox {
    /// Unchecked checkbox with its box at (`x`, `y`)
    pub fn new(x: i32, y: i32, label: &str) -> Self {
        Self {
            x,
            y,
            label: truncated(label),
            checked: false,
            morph: Animation::resting(0.0),
            on_change: None,
        }
    }

    /// Set the initial state without animating
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.morph = Animation::resting(if checked { 1.0 } else { 0.0 });
        self
    }

    /// Bind the change handler
    pub fn on_change(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Replace (or remove) the change handler
    pub fn set_on_change(&mut self, handler: Option<ChangeHandler>) {
        self.on_change = handler;
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Change state programmatically, animating the mark
    ///
    /// No-op when `checked` equals the current state. The change handler
    /// is not called.
    pub fn set_checked(&mut self, checked: bool, now_ms: u32) {
        if checked != self.checked {
            self.checked = checked;
            self.arm(now_ms);
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = truncated(label);
    }

    fn arm(&mut self, now_ms: u32) {
        let (from, to) = if self.checked { (0.0, 1.0) } else { (1.0, 0.0) };
        self.morph.start(from, to, CHECK_DURATION_MS, now_ms);
    }

    /// Current mark edge length in pixels
    fn mark_size(&self, now_ms: u32) -> i32 {
        if self.morph.is_active(now_ms) {
            (MARK_SIZE * self.morph.value(now_ms)) as i32
        } else if self.checked {
            MARK_SIZE as i32
        } else {
            0
        }
    }

    pub(crate) fn bounds(&self) -> Rect {
        let label_width = if self.label.is_empty() {
            0
        } else {
            text_width(&self.label, 1) + LABEL_GAP
        };
        Rect::new(
            self.x,
            self.y,
            (BOX_SIZE + label_width) as u32,
            BOX_SIZE as u32,
        )
    }

    /// Toggle, animate and notify; returns the new state
    pub(crate) fn click(&mut self, now_ms: u32) -> bool {
        self.checked = !self.checked;
        self.arm(now_ms);
        if let Some(handler) = self.on_change.as_mut() {
            handler(self.checked);
        }
        self.checked
    }

    pub(crate) fn tick(&mut self, now_ms: u32) {
        self.morph.tick(now_ms);
    }

    pub(crate) fn draw<S: Surface>(
        &self,
        surface: &mut S,
        offset_x: i32,
        offset_y: i32,
        focused: bool,
        now_ms: u32,
    ) -> Result<(), DisplayError> {
        let bx = self.x + offset_x;
        let by = self.y + offset_y;
        let frame = Rect::new(bx, by, BOX_SIZE as u32, BOX_SIZE as u32);

        if focused {
            surface.fill_rect(frame.inflate(1), Color::On)?;
            surface.fill_rect(frame, Color::Off)?;
        }
        surface.draw_rect(frame, Color::On)?;

        let size = self.mark_size(now_ms);
        if size > 0 {
            let inset = (BOX_SIZE - size) / 2;
            surface.fill_rect(
                Rect::new(bx + inset, by + inset, size as u32, size as u32),
                Color::On,
            )?;
        }

        if !self.label.is_empty() {
            surface.draw_text(
                bx + BOX_SIZE + LABEL_GAP,
                by + 2,
                &self.label,
                TextStyle::new(Color::On),
            )?;
        }
        Ok(())
    }
}
