//! Bounded window stack with deferred pop
//!
//! The top of the stack is the active window. Popping is two-phase: a pop
//! request starts the top window's slide-out and the window is only removed
//! by [`WindowStack::finish_pop`] once that slide has finished.

use heapless::Vec;

use super::{Slide, Window};
use crate::config::{DEFAULT_MAX_WINDOWS, MAX_WINDOWS};
use crate::error::UiError;

#[derive(Debug)]
pub struct WindowStack {
    windows: Vec<Window, MAX_WINDOWS>,
    capacity: usize,
    slide: Slide,
    from_right: bool,
    popping: bool,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WINDOWS)
    }
}

impl WindowStack {
    /// Stack holding at most `capacity` windows (clamped to 1..=MAX_WINDOWS)
    pub fn new(capacity: usize) -> Self {
        Self {
            windows: Vec::new(),
            capacity: capacity.clamp(1, MAX_WINDOWS),
            slide: Slide::default(),
            from_right: true,
            popping: false,
        }
    }

    /// Set the transition used for push and pop
    ///
    /// Pushed windows enter from the right and popped windows leave to the
    /// right when `from_right` is set; both are mirrored otherwise.
    pub fn with_slide(mut self, slide: Slide, from_right: bool) -> Self {
        self.slide = slide;
        self.from_right = from_right;
        self
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.windows.len() >= self.capacity
    }

    /// A pop has been requested and not yet finished
    pub fn is_popping(&self) -> bool {
        self.popping
    }

    pub fn slide(&self) -> Slide {
        self.slide
    }

    /// The active window
    pub fn top(&self) -> Option<&Window> {
        self.windows.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Window> {
        self.windows.last_mut()
    }

    /// The window directly below the active one
    pub fn beneath(&self) -> Option<&Window> {
        let len = self.windows.len();
        if len < 2 {
            return None;
        }
        self.windows.get(len - 2)
    }

    /// Window at `depth` counted from the bottom
    pub fn get(&self, depth: usize) -> Option<&Window> {
        self.windows.get(depth)
    }

    /// Push a window and start its slide-in
    ///
    /// A pop still in flight is completed first so the popping window
    /// never ends up below the new one.
    pub fn push(&mut self, mut window: Window, now_ms: u32) -> Result<(), UiError> {
        if self.popping {
            self.windows.pop();
            self.popping = false;
        }
        if self.is_full() {
            warn!("window stack full, '{}' rejected", window.title());
            return Err(UiError::StackFull);
        }

        window.start_slide_in(self.from_right, self.slide, now_ms);
        self.windows.push(window).map_err(|_| UiError::StackFull)
    }

    /// Start popping the active window
    ///
    /// Refused when only one window is left or a pop is already pending.
    pub fn request_pop(&mut self, now_ms: u32) -> bool {
        if self.popping || self.windows.len() <= 1 {
            return false;
        }
        let (slide, to_right) = (self.slide, self.from_right);
        match self.windows.last_mut() {
            Some(top) => {
                top.start_slide_out(to_right, slide, now_ms);
                self.popping = true;
                true
            }
            None => false,
        }
    }

    /// Advance every window to `now_ms`
    pub fn tick(&mut self, now_ms: u32) {
        for window in self.windows.iter_mut() {
            window.tick(now_ms);
        }
    }

    /// Remove the popping window once its slide-out has finished
    pub fn finish_pop(&mut self) -> Option<Window> {
        let done = self.popping && self.top().is_some_and(|w| !w.is_transitioning());
        if !done {
            return None;
        }
        self.popping = false;
        self.windows.pop()
    }

    /// Drop every window
    pub fn clear(&mut self) {
        self.windows.clear();
        self.popping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> Slide {
        Slide {
            distance: 128,
            duration_ms: 250,
        }
    }

    fn stack_with(count: usize) -> WindowStack {
        let mut stack = WindowStack::new(5).with_slide(slide(), true);
        for i in 0..count {
            let title = ["A", "B", "C", "D", "E"][i];
            stack.push(Window::new(title), 0).unwrap();
        }
        stack.tick(1000);
        stack
    }

    #[test]
    fn test_push_starts_slide_in() {
        let mut stack = WindowStack::new(5);
        stack.push(Window::new("A"), 0).unwrap();
        let top = stack.top().unwrap();
        assert!(top.is_transitioning());
        assert_eq!(top.offset(0), 128);
    }

    #[test]
    fn test_push_when_full() {
        let mut stack = stack_with(5);
        assert_eq!(stack.push(Window::new("F"), 0), Err(UiError::StackFull));
        assert_eq!(stack.len(), 5);
        assert_eq!(stack.top().map(Window::title), Some("E"));
    }

    #[test]
    fn test_capacity_clamped() {
        assert_eq!(WindowStack::new(0).capacity(), 1);
        assert_eq!(WindowStack::new(100).capacity(), MAX_WINDOWS);
    }

    #[test]
    fn test_pop_refused_at_root() {
        let mut stack = stack_with(1);
        assert!(!stack.request_pop(2000));
        assert!(!stack.is_popping());
    }

    #[test]
    fn test_pop_is_deferred() {
        let mut stack = stack_with(2);
        assert!(stack.request_pop(2000));
        assert!(stack.is_popping());
        assert_eq!(stack.len(), 2);

        stack.tick(2100);
        assert!(stack.finish_pop().is_none());
        assert_eq!(stack.len(), 2);

        stack.tick(2250);
        let popped = stack.finish_pop().unwrap();
        assert_eq!(popped.title(), "B");
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_popping());
    }

    #[test]
    fn test_second_pop_refused_while_popping() {
        let mut stack = stack_with(3);
        assert!(stack.request_pop(2000));
        assert!(!stack.request_pop(2010));
        stack.tick(3000);
        stack.finish_pop();
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_push_during_pop_completes_pop() {
        let mut stack = stack_with(2);
        stack.request_pop(2000);
        stack.push(Window::new("C"), 2010).unwrap();
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_popping());
        assert_eq!(stack.beneath().map(Window::title), Some("A"));
        assert_eq!(stack.top().map(Window::title), Some("C"));
    }

    #[test]
    fn test_pop_slides_out_mirrored() {
        let mut stack = WindowStack::new(3).with_slide(slide(), false);
        stack.push(Window::new("A"), 0).unwrap();
        stack.push(Window::new("B"), 0).unwrap();
        stack.tick(500);
        stack.request_pop(500);
        stack.tick(750);
        assert_eq!(stack.top().map(|w| w.offset(750)), Some(-128));
    }
}
