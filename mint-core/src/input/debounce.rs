//! Per-button debounce state machine

use mint_hal::elapsed_ms;

/// Debounce state for one button line
///
/// A raw reading has to stay unchanged for the debounce window before it
/// becomes the debounced state. A press is reported once, on the
/// released-to-pressed transition of the debounced state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonChannel {
    raw: bool,
    last_change_ms: u32,
    debounced: bool,
    previous: bool,
}

impl ButtonChannel {
    pub const fn new() -> Self {
        Self {
            raw: false,
            last_change_ms: 0,
            debounced: false,
            previous: false,
        }
    }

    /// Restart the stability timer, e.g. at bring-up
    pub fn reset(&mut self, now_ms: u32) {
        self.last_change_ms = now_ms;
    }

    /// Feed one reading (`true` = pressed)
    ///
    /// Returns true exactly once per accepted press.
    pub fn update(&mut self, pressed: bool, now_ms: u32, debounce_ms: u32) -> bool {
        if pressed != self.raw {
            self.raw = pressed;
            self.last_change_ms = now_ms;
        }

        if self.raw == self.debounced || elapsed_ms(now_ms, self.last_change_ms) < debounce_ms {
            return false;
        }

        self.previous = self.debounced;
        self.debounced = self.raw;
        self.debounced && !self.previous
    }

    /// Debounced state
    pub fn is_pressed(&self) -> bool {
        self.debounced
    }

    /// Latest raw reading
    pub fn raw(&self) -> bool {
        self.raw
    }
}
