//! Navigation input contract
//!
//! Input sources (buttons, encoders, simulators) translate their raw
//! signals into a small set of navigation events the engine understands.

use heapless::Vec;

/// Navigation event produced by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Move focus to the previous focusable widget
    Previous,
    /// Move focus to the next focusable widget
    Next,
    /// Activate (click) the focused widget
    Select,
    /// Dismiss the active window
    Back,
}

/// Events gathered in one poll, at most one per kind
pub type NavigationEvents = Vec<NavigationEvent, 4>;

/// Source of navigation events
///
/// Polled once per frame by the engine. Implementations must not block.
pub trait InputSource {
    /// Prepare the source; `now_ms` is the engine clock at bring-up
    fn begin(&mut self, _now_ms: u32) {}

    /// Change how long a raw reading must be stable before it counts.
    /// Sources without contact bounce ignore this.
    fn set_debounce_ms(&mut self, _debounce_ms: u32) {}

    /// Sample the inputs and return any events that fired since the last
    /// poll, in channel order
    fn poll(&mut self, now_ms: u32) -> NavigationEvents;
}

impl NavigationEvent {
    /// Returns true if this event moves the focus cursor
    pub fn is_focus_move(&self) -> bool {
        matches!(self, NavigationEvent::Previous | NavigationEvent::Next)
    }
}
