//! Monotonic time source
//!
//! The engine works in `u32` milliseconds. The counter wraps after about
//! 49.7 days, so durations must always be computed with [`elapsed_ms`]
//! rather than by comparing raw timestamps.

use core::cell::Cell;

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since an arbitrary epoch, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now`, tolerant of wraparound
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Clock advanced by hand
///
/// Host tests and simulators share it by reference with the engine
/// (`&ManualClock` implements [`Clock`]).
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`
    pub const fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Move the clock forward, wrapping like a hardware counter
    pub fn advance(&self, delta_ms: u32) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }

    /// Jump to an absolute time
    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
