//! Mint UI Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the UI engine consumes. Board
//! support code implements them (directly, or through the `embedded-hal`
//! adapters provided here) so the engine itself stays chip-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  mint-core (engine, widgets, windows)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mint-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  host doubles │
//! │   adapters    │       │ (ManualPin,   │
//! │               │       │  ManualClock) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (button lines)
//! - [`time::Clock`] - Monotonic millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{HalInput, InputPin, ManualPin};
pub use time::{elapsed_ms, Clock, ManualClock};
