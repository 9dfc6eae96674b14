//! Engine error types

/// Errors reported by window and stack operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiError {
    /// Window already holds its maximum number of widgets
    WindowFull,
    /// Window stack is at capacity
    StackFull,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Window capacity is zero or above the compiled-in maximum
    InvalidStackCapacity,
    /// Debounce window must be at least one millisecond
    InvalidDebounce,
}
