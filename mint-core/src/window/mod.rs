//! Windows
//!
//! A window is a titled screen owning an ordered list of widgets.
//! Insertion order is both traversal order for the focus cursor and paint
//! order (later widgets paint over earlier ones). A window also carries
//! its own horizontal slide animation used when it is pushed or popped.

pub mod stack;

use heapless::{String, Vec};
use mint_display::{Color, DisplayError, Rect, Surface, TextStyle, SCREEN_WIDTH};

use crate::animation::Animation;
use crate::config::{DEFAULT_MAX_WIDGETS, DEFAULT_SLIDE_DURATION_MS, MAX_WIDGETS};
use crate::error::UiError;
use crate::widget::{truncated, Widget, WidgetEvent, WidgetId};

pub use stack::WindowStack;

/// Maximum title length (one full row of glyphs)
pub const MAX_TITLE_LEN: usize = 21;

/// Height of the title bar in pixels
pub const TITLE_BAR_HEIGHT: i32 = 10;

/// Horizontal slide transition parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slide {
    /// Off-screen distance in pixels (normally the panel width)
    pub distance: i32,
    /// Transition duration
    pub duration_ms: u32,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            distance: SCREEN_WIDTH as i32,
            duration_ms: DEFAULT_SLIDE_DURATION_MS,
        }
    }
}

/// Result of activating the focused widget
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activation {
    /// Index of the widget in its window
    pub index: usize,
    /// Identifier of the widget
    pub id: WidgetId,
    /// What the click did
    pub event: WidgetEvent,
}

/// A titled screen of widgets
#[derive(Debug)]
pub struct Window {
    title: String<MAX_TITLE_LEN>,
    widgets: Vec<Widget, MAX_WIDGETS>,
    capacity: usize,
    focused: Option<usize>,
    slide: Animation,
    /// Offset once the current slide has finished
    settled_offset: i32,
    transitioning: bool,
}

impl Window {
    /// Window with the default widget capacity
    pub fn new(title: &str) -> Self {
        Self::with_capacity(title, DEFAULT_MAX_WIDGETS)
    }

    /// Window holding at most `capacity` widgets (clamped to [`MAX_WIDGETS`])
    pub fn with_capacity(title: &str, capacity: usize) -> Self {
        Self {
            title: truncated(title),
            widgets: Vec::new(),
            capacity: capacity.min(MAX_WIDGETS),
            focused: None,
            slide: Animation::new(),
            settled_offset: 0,
            transitioning: false,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = truncated(title);
    }

    /// Append a widget, returning its index
    ///
    /// The first focusable widget added takes the focus.
    pub fn add_widget(&mut self, widget: impl Into<Widget>) -> Result<usize, UiError> {
        if self.widgets.len() >= self.capacity {
            warn!("window '{}' full, widget dropped", self.title.as_str());
            return Err(UiError::WindowFull);
        }

        let mut widget = widget.into();
        let index = self.widgets.len();
        if self.focused.is_none() && widget.can_focus() {
            widget.on_focus();
            self.focused = Some(index);
        }
        self.widgets.push(widget).map_err(|_| UiError::WindowFull)?;
        Ok(index)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Widgets in insertion order
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    pub fn get_widget(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    pub fn get_widget_mut(&mut self, index: usize) -> Option<&mut Widget> {
        self.widgets.get_mut(index)
    }

    /// First widget with the given identifier
    ///
    /// Identifiers are stored cut to [`MAX_ID_LEN`](crate::widget::MAX_ID_LEN)
    /// characters, so `id` is cut the same way before comparing.
    pub fn widget_by_id(&self, id: &str) -> Option<&Widget> {
        let id: WidgetId = truncated(id);
        self.widgets.iter().find(|w| w.id() == id.as_str())
    }

    pub fn widget_by_id_mut(&mut self, id: &str) -> Option<&mut Widget> {
        let id: WidgetId = truncated(id);
        self.widgets.iter_mut().find(|w| w.id() == id.as_str())
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_widget(&self) -> Option<&Widget> {
        self.focused.and_then(|i| self.widgets.get(i))
    }

    /// Move focus to the next focusable, visible widget, wrapping around
    ///
    /// Returns whether the focus changed.
    pub fn focus_next(&mut self) -> bool {
        self.step_focus(true)
    }

    /// Move focus to the previous focusable, visible widget, wrapping around
    ///
    /// Returns whether the focus changed.
    pub fn focus_previous(&mut self) -> bool {
        self.step_focus(false)
    }

    /// Focus a specific widget if it can take focus
    pub fn set_focus(&mut self, index: usize) -> bool {
        match self.widgets.get(index) {
            Some(w) if w.can_focus() && w.is_visible() => self.move_focus(index),
            _ => false,
        }
    }

    fn step_focus(&mut self, forward: bool) -> bool {
        let count = self.widgets.len();
        if count == 0 {
            return false;
        }

        let start = self.focused.unwrap_or(0);
        let mut current = start;
        loop {
            current = if forward {
                (current + 1) % count
            } else {
                (current + count - 1) % count
            };

            let candidate = &self.widgets[current];
            if candidate.can_focus() && candidate.is_visible() {
                return self.move_focus(current);
            }
            if current == start {
                return false;
            }
        }
    }

    fn move_focus(&mut self, index: usize) -> bool {
        if self.focused == Some(index) {
            return false;
        }
        if let Some(previous) = self.focused {
            self.widgets[previous].on_blur();
        }
        self.widgets[index].on_focus();
        self.focused = Some(index);
        true
    }

    /// Activate the focused widget, if any
    pub fn click_focused(&mut self, now_ms: u32) -> Option<Activation> {
        let index = self.focused?;
        let widget = self.widgets.get_mut(index)?;
        let event = widget.on_click(now_ms)?;
        Some(Activation {
            index,
            id: truncated(widget.id()),
            event,
        })
    }

    /// Slide in from off-screen to rest
    pub fn start_slide_in(&mut self, from_right: bool, slide: Slide, now_ms: u32) {
        let start = if from_right {
            slide.distance
        } else {
            -slide.distance
        };
        self.settled_offset = 0;
        self.slide.start(start as f32, 0.0, slide.duration_ms, now_ms);
        self.transitioning = true;
    }

    /// Slide from rest to off-screen
    pub fn start_slide_out(&mut self, to_right: bool, slide: Slide, now_ms: u32) {
        let end = if to_right {
            slide.distance
        } else {
            -slide.distance
        };
        self.settled_offset = end;
        self.slide.start(0.0, end as f32, slide.duration_ms, now_ms);
        self.transitioning = true;
    }

    /// Advance animation state to `now_ms`
    ///
    /// Clears the transitioning flag once the slide has finished and ticks
    /// every widget. Returns whether the window is still transitioning.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        if self.transitioning && !self.slide.tick(now_ms) {
            self.transitioning = false;
        }
        for widget in self.widgets.iter_mut() {
            widget.tick(now_ms);
        }
        self.transitioning
    }

    /// Transitioning flag as of the last tick
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Horizontal slide offset at `now_ms`
    pub fn offset(&self, now_ms: u32) -> i32 {
        if self.transitioning {
            self.slide.value(now_ms) as i32
        } else {
            self.settled_offset
        }
    }

    /// Draw the title bar and visible widgets
    ///
    /// The window's slide offset is added to (`offset_x`, `offset_y`) and
    /// applied uniformly to everything it draws.
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        offset_x: i32,
        offset_y: i32,
        now_ms: u32,
    ) -> Result<(), DisplayError> {
        let x = offset_x + self.offset(now_ms);
        let y = offset_y;
        let (width, _) = surface.pixel_dimensions();

        surface.fill_rect(
            Rect::new(x, y, width as u32, TITLE_BAR_HEIGHT as u32),
            Color::On,
        )?;
        surface.draw_text(x + 2, y + 1, &self.title, TextStyle::new(Color::Off))?;

        for widget in self.widgets.iter().filter(|w| w.is_visible()) {
            widget.draw(surface, x, y, now_ms)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Button, Checkbox, Label};
    use mint_display::{DrawOp, RecordingSurface};

    fn menu() -> Window {
        let mut window = Window::new("Menu");
        window.add_widget(Label::new(0, 12, "Pick one")).unwrap();
        window.add_widget(Widget::from(Button::new(0, 24, 60, 12, "A")).with_id("a")).unwrap();
        window.add_widget(Widget::from(Button::new(0, 38, 60, 12, "B")).with_id("b")).unwrap();
        window.add_widget(Widget::from(Checkbox::new(70, 24, "C")).with_id("c")).unwrap();
        window
    }

    fn focused_count(window: &Window) -> usize {
        window.widgets().filter(|w| w.is_focused()).count()
    }

    #[test]
    fn test_first_focusable_wins() {
        let window = menu();
        assert_eq!(window.focused_index(), Some(1));
        assert_eq!(focused_count(&window), 1);
    }

    #[test]
    fn test_capacity_reported() {
        let mut window = Window::with_capacity("Small", 2);
        assert_eq!(window.add_widget(Label::new(0, 0, "1")), Ok(0));
        assert_eq!(window.add_widget(Label::new(0, 0, "2")), Ok(1));
        assert_eq!(window.add_widget(Label::new(0, 0, "3")), Err(UiError::WindowFull));
        assert_eq!(window.widget_count(), 2);
    }

    #[test]
    fn test_capacity_clamped() {
        let window = Window::with_capacity("Big", 1000);
        assert_eq!(window.capacity(), MAX_WIDGETS);
    }

    #[test]
    fn test_focus_next_skips_labels_and_wraps() {
        let mut window = menu();
        assert!(window.focus_next());
        assert_eq!(window.focused_index(), Some(2));
        assert!(window.focus_next());
        assert_eq!(window.focused_index(), Some(3));
        assert!(window.focus_next());
        assert_eq!(window.focused_index(), Some(1));
        assert_eq!(focused_count(&window), 1);
    }

    #[test]
    fn test_focus_previous_wraps() {
        let mut window = menu();
        assert!(window.focus_previous());
        assert_eq!(window.focused_index(), Some(3));
        assert!(window.focus_previous());
        assert_eq!(window.focused_index(), Some(2));
    }

    #[test]
    fn test_focus_skips_hidden() {
        let mut window = menu();
        if let Some(w) = window.get_widget_mut(2) {
            w.set_visible(false);
        }
        window.focus_next();
        assert_eq!(window.focused_index(), Some(3));
    }

    #[test]
    fn test_no_focusable_widgets() {
        let mut window = Window::new("Info");
        window.add_widget(Label::new(0, 12, "Nothing to do")).unwrap();
        window.add_widget(Label::new(0, 24, "Really")).unwrap();
        assert!(!window.focus_next());
        assert!(!window.focus_previous());
        assert_eq!(window.focused_index(), None);
    }

    #[test]
    fn test_empty_window_focus_is_noop() {
        let mut window = Window::new("Empty");
        assert!(!window.focus_next());
        assert_eq!(window.click_focused(0), None);
    }

    #[test]
    fn test_single_focusable_stays() {
        let mut window = Window::new("One");
        window.add_widget(Label::new(0, 12, "x")).unwrap();
        window.add_widget(Button::new(0, 24, 40, 12, "Only")).unwrap();
        assert!(!window.focus_next());
        assert_eq!(window.focused_index(), Some(1));
        assert!(window.get_widget(1).map(Widget::is_focused).unwrap_or(false));
    }

    #[test]
    fn test_click_focused_reports_activation() {
        let mut window = menu();
        window.focus_previous();
        let activation = window.click_focused(0).unwrap();
        assert_eq!(activation.index, 3);
        assert_eq!(activation.id.as_str(), "c");
        assert_eq!(activation.event, WidgetEvent::Toggled(true));
    }

    #[test]
    fn test_lookup() {
        let window = menu();
        assert!(window.widget_by_id("b").is_some());
        assert!(window.widget_by_id("zzz").is_none());
        assert!(window.get_widget(99).is_none());
    }

    #[test]
    fn test_lookup_by_long_id() {
        let mut window = Window::new("Net");
        let long = "network-settings-btn";
        window
            .add_widget(Widget::from(Button::new(0, 12, 60, 12, "Net")).with_id(long))
            .unwrap();
        window
            .add_widget(Widget::from(Button::new(0, 28, 60, 12, "Other")).with_id("other"))
            .unwrap();

        assert_eq!(window.widget_by_id(long).map(Widget::id), Some("network-settings"));
        assert!(window.widget_by_id_mut(long).is_some());
        assert!(window.widget_by_id("network").is_none());

        let activation = window.click_focused(0).unwrap();
        assert_eq!(activation.id.as_str(), "network-settings");
    }

    #[test]
    fn test_slide_in_lifecycle() {
        let mut window = Window::new("W");
        let slide = Slide::default();
        window.start_slide_in(true, slide, 0);
        assert!(window.is_transitioning());
        assert_eq!(window.offset(0), 128);

        assert!(window.tick(100));
        let mid = window.offset(100);
        assert!(mid < 128);

        assert!(!window.tick(250));
        assert!(!window.is_transitioning());
        assert_eq!(window.offset(250), 0);
    }

    #[test]
    fn test_slide_out_settles_offscreen() {
        let mut window = Window::new("W");
        window.start_slide_out(false, Slide::default(), 0);
        window.tick(300);
        assert_eq!(window.offset(300), -128);
    }

    #[test]
    fn test_draw_title_and_widgets_with_offset() {
        let mut window = Window::new("Menu");
        window.add_widget(Label::new(4, 20, "Hi")).unwrap();
        let mut surface = RecordingSurface::new();
        window.draw(&mut surface, 3, 0, 0).unwrap();

        assert_eq!(surface.ops()[0], DrawOp::Fill(Rect::new(3, 0, 128, 10), Color::On));
        assert_eq!(surface.find_text("Menu"), Some((5, 1)));
        assert_eq!(surface.find_text("Hi"), Some((7, 20)));
    }

    #[test]
    fn test_hidden_widgets_not_drawn() {
        let mut window = Window::new("Menu");
        window.add_widget(Widget::from(Label::new(4, 20, "Hi")).hidden()).unwrap();
        let mut surface = RecordingSurface::new();
        window.draw(&mut surface, 0, 0, 0).unwrap();
        assert_eq!(surface.find_text("Hi"), None);
    }
}
