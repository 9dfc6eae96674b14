//! Drawing surface and input contracts for the Mint UI engine
//!
//! This crate provides:
//! - `Surface` trait, the monochrome pixel surface the engine draws on
//! - `InputSource` trait and `NavigationEvent` enum for button input
//! - `GraphicsSurface`, a `Surface` over any `embedded-graphics` draw target
//! - `Ssd1306`, a frame-buffer driver for 128x64 SSD1306 OLEDs over I2C
//! - `RecordingSurface`, which logs draw calls for host tests and simulators
//!
//! # Architecture
//!
//! The engine never touches pixels directly. Every widget renders through
//! a handful of primitives (filled rectangle, outlined rectangle, text) so
//! any backend that can provide those can host the UI:
//!
//! - **Direct displays** (e.g., SSD1306 on I2C): `Ssd1306` keeps a local
//!   frame buffer and pushes it to the panel on `flush`.
//! - **Simulators / other panels**: wrap any
//!   `DrawTarget<Color = BinaryColor>` in `GraphicsSurface`.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod graphics;
pub mod input;
pub mod recording;
pub mod ssd1306;

// Re-export key types
pub use backend::{
    text_height, text_width, Color, DisplayError, Rect, Surface, TextStyle, GLYPH_HEIGHT, GLYPH_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use graphics::GraphicsSurface;
pub use input::{InputSource, NavigationEvent, NavigationEvents};
pub use recording::{DrawOp, RecordingSurface};
pub use ssd1306::Ssd1306;
