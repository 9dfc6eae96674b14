//! Interaction and animation engine for small monochrome displays
//!
//! This crate contains everything the UI needs that does not depend on a
//! particular panel or board:
//!
//! - Easing curves and time-based animation
//! - Widgets (label, button, checkbox) with focus and click behavior
//! - Windows with a circular focus cursor and slide transitions
//! - A bounded window stack with deferred pop
//! - Debounced four-button navigation input
//! - The engine that runs one tick/input/draw frame per update
//!
//! Drawing goes through [`mint_display::Surface`], input through
//! [`mint_display::InputSource`] and time through [`mint_hal::Clock`].
//!
//! # Example
//!
//! ```
//! use mint_core::{Button, Label, UiEngine, Window};
//! use mint_display::RecordingSurface;
//! use mint_hal::{ManualClock, ManualPin};
//! use mint_core::input::ButtonPad;
//!
//! let pins = [ManualPin::new(), ManualPin::new(), ManualPin::new(), ManualPin::new()];
//! let pad = ButtonPad::new(&pins[0], &pins[1], &pins[2], &pins[3]);
//! let clock = ManualClock::new(0);
//! let mut engine = UiEngine::new(RecordingSurface::new(), pad, &clock);
//! engine.begin().unwrap();
//!
//! let mut main = Window::new("Main");
//! main.add_widget(Label::new(4, 14, "Hello")).unwrap();
//! main.add_widget(Button::new(4, 30, 60, 14, "Go")).unwrap();
//! engine.push_window(main).unwrap();
//!
//! clock.advance(16);
//! engine.update().unwrap();
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

// Must stay first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod animation;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod widget;
pub mod window;

pub use animation::{ease, Animation, EasingCurve};
pub use config::EngineConfig;
pub use engine::UiEngine;
pub use error::{ConfigError, UiError};
pub use widget::{Button, Checkbox, Label, Widget, WidgetEvent, WidgetId, WidgetKind};
pub use window::{Activation, Slide, Window, WindowStack};
