//! Widget model
//!
//! Widgets are a closed set of variants behind one [`Widget`] type. The
//! wrapper carries the state every widget has (identifier, visibility,
//! focus); the variant carries its geometry, content and animations.
//!
//! Drawing takes an offset so windows can slide their contents without
//! touching the widgets' stored coordinates.

pub mod button;
pub mod checkbox;
pub mod label;

use heapless::String;
use mint_display::{DisplayError, Rect, Surface};

pub use button::{Button, PressHandler};
pub use checkbox::{ChangeHandler, Checkbox};
pub use label::Label;

/// Maximum identifier length
pub const MAX_ID_LEN: usize = 16;

/// Maximum text length of labels, button captions and checkbox labels
pub const MAX_TEXT_LEN: usize = 24;

/// Widget identifier
pub type WidgetId = String<MAX_ID_LEN>;

/// Copy `text` into a fixed-capacity string, dropping what does not fit
pub(crate) fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// What a click did to a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetEvent {
    /// A button was pressed
    Pressed,
    /// A checkbox changed to the contained state
    Toggled(bool),
}

/// Variant-specific widget state
#[derive(Debug)]
pub enum WidgetKind {
    Label(Label),
    Button(Button),
    Checkbox(Checkbox),
}

/// A drawable, possibly focusable, UI element
#[derive(Debug)]
pub struct Widget {
    id: WidgetId,
    visible: bool,
    focused: bool,
    kind: WidgetKind,
}

impl Widget {
    /// Wrap a variant; visible, unfocused, with an empty identifier
    pub fn new(kind: impl Into<WidgetKind>) -> Self {
        Self {
            id: String::new(),
            visible: true,
            focused: false,
            kind: kind.into(),
        }
    }

    /// Set the identifier used by [`crate::Window::widget_by_id`]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = truncated(id);
        self
    }

    /// Start hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Identifier (empty if none was given)
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Variant state
    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Mutable variant state
    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            WidgetKind::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match &mut self.kind {
            WidgetKind::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            WidgetKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match &mut self.kind {
            WidgetKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&Checkbox> {
        match &self.kind {
            WidgetKind::Checkbox(checkbox) => Some(checkbox),
            _ => None,
        }
    }

    pub fn as_checkbox_mut(&mut self) -> Option<&mut Checkbox> {
        match &mut self.kind {
            WidgetKind::Checkbox(checkbox) => Some(checkbox),
            _ => None,
        }
    }

    /// Area covered at rest (no window offset)
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            WidgetKind::Label(label) => label.bounds(),
            WidgetKind::Button(button) => button.bounds(),
            WidgetKind::Checkbox(checkbox) => checkbox.bounds(),
        }
    }

    /// Hit test against [`Widget::bounds`]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        self.bounds().contains(px, py)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether this widget can hold the focus cursor
    pub fn can_focus(&self) -> bool {
        match self.kind {
            WidgetKind::Label(_) => false,
            WidgetKind::Button(_) | WidgetKind::Checkbox(_) => true,
        }
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Activate the widget
    ///
    /// Runs the bound callback, arms the click animation and reports what
    /// happened. Labels ignore clicks.
    pub fn on_click(&mut self, now_ms: u32) -> Option<WidgetEvent> {
        match &mut self.kind {
            WidgetKind::Label(_) => None,
            WidgetKind::Button(button) => {
                button.click(now_ms);
                Some(WidgetEvent::Pressed)
            }
            WidgetKind::Checkbox(checkbox) => Some(WidgetEvent::Toggled(checkbox.click(now_ms))),
        }
    }

    /// Advance animation state to `now_ms`
    pub fn tick(&mut self, now_ms: u32) {
        match &mut self.kind {
            WidgetKind::Label(_) => {}
            WidgetKind::Button(button) => button.tick(now_ms),
            WidgetKind::Checkbox(checkbox) => checkbox.tick(now_ms),
        }
    }

    /// Draw at the stored position shifted by (`offset_x`, `offset_y`)
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        offset_x: i32,
        offset_y: i32,
        now_ms: u32,
    ) -> Result<(), DisplayError> {
        if !self.visible {
            return Ok(());
        }
        match &self.kind {
            WidgetKind::Label(label) => label.draw(surface, offset_x, offset_y),
            WidgetKind::Button(button) => {
                button.draw(surface, offset_x, offset_y, self.focused, now_ms)
            }
            WidgetKind::Checkbox(checkbox) => {
                checkbox.draw(surface, offset_x, offset_y, self.focused, now_ms)
            }
        }
    }
}

impl From<Label> for WidgetKind {
    fn from(label: Label) -> Self {
        WidgetKind::Label(label)
    }
}

impl From<Button> for WidgetKind {
    fn from(button: Button) -> Self {
        WidgetKind::Button(button)
    }
}

impl From<Checkbox> for WidgetKind {
    fn from(checkbox: Checkbox) -> Self {
        WidgetKind::Checkbox(checkbox)
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Widget::new(label)
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::new(button)
    }
}

impl From<Checkbox> for Widget {
    fn from(checkbox: Checkbox) -> Self {
        Widget::new(checkbox)
    }
}
