//! GPIO pin abstractions
//!
//! Provides the digital input trait used for button lines, an adapter for
//! `embedded-hal` 1.0 pins and a settable pin for host-side tests.

use core::cell::{Cell, RefCell};

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Check if an active-low line (pull-up, switch to ground) is asserted
    fn is_active_low(&self) -> bool {
        self.is_low()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

/// Adapter for `embedded-hal` 1.0 digital inputs
///
/// `embedded_hal::digital::InputPin` takes `&mut self` and is fallible.
/// Read errors are reported as a high level, which is the released state
/// of a pulled-up button.
pub struct HalInput<P> {
    pin: RefCell<P>,
}

impl<P> HalInput<P> {
    /// Wrap an `embedded-hal` input pin
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for HalInput<P> {
    fn is_high(&self) -> bool {
        self.pin.borrow_mut().is_high().unwrap_or(true)
    }
}

/// Input pin whose level is set by software
///
/// Used by host tests and simulators to drive the button state machine.
/// Starts high (released, pulled up).
#[derive(Debug)]
pub struct ManualPin {
    high: Cell<bool>,
}

impl Default for ManualPin {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualPin {
    /// Create a pin reading high
    pub const fn new() -> Self {
        Self {
            high: Cell::new(true),
        }
    }

    /// Set the electrical level
    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }

    /// Pull the line low (button pressed)
    pub fn press(&self) {
        self.high.set(false);
    }

    /// Let the line float back high (button released)
    pub fn release(&self) {
        self.high.set(true);
    }
}

impl InputPin for ManualPin {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}
