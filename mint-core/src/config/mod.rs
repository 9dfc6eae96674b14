//! Engine configuration
//!
//! Capacities and timings the engine is built with. Defaults match a
//! 128x64 OLED with four tactile buttons.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Compiled-in upper bound on the window stack depth
pub const MAX_WINDOWS: usize = 8;

/// Compiled-in upper bound on widgets per window
pub const MAX_WIDGETS: usize = 16;

/// Default window stack depth
pub const DEFAULT_MAX_WINDOWS: usize = 5;

/// Default widgets per window
pub const DEFAULT_MAX_WIDGETS: usize = 10;

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 30;

/// Default window slide duration in milliseconds
pub const DEFAULT_SLIDE_DURATION_MS: u32 = 250;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Window stack capacity (1..=MAX_WINDOWS)
    pub max_windows: usize,
    /// Time a button reading must stay stable before it is accepted
    pub debounce_ms: u32,
    /// Duration of push/pop slide transitions
    pub slide_duration_ms: u32,
    /// Push slides in from the right and pop slides out to the right;
    /// false mirrors both
    pub slide_from_right: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_windows: DEFAULT_MAX_WINDOWS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            slide_from_right: true,
        }
    }
}

impl EngineConfig {
    /// Check the configuration against compiled-in limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_windows == 0 || self.max_windows > MAX_WINDOWS {
            return Err(ConfigError::InvalidStackCapacity);
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::InvalidDebounce);
        }
        Ok(())
    }
}
