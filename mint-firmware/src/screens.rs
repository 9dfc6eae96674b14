//! Demo screens
//!
//! A main menu opening a settings window and an about window. Clicks are
//! answered from the activations the engine returns.

use defmt::*;
use embedded_hal::i2c::I2c;
use mint_core::input::InputSource;
use mint_core::widget::Widget;
use mint_core::{Activation, Button, Checkbox, Label, UiEngine, WidgetEvent, Window};
use mint_display::{DisplayError, Ssd1306};
use mint_hal::Clock;

use crate::config::DISPLAY_CONTRAST;

/// Contrast used while the "Dim" checkbox is set
const DIM_CONTRAST: u8 = 0x10;

pub fn main_window() -> Window {
    let mut window = Window::new("Mint UI");
    add(&mut window, Label::new(64, 14, "Hello!").centered());
    add(
        &mut window,
        Widget::from(Button::new(14, 28, 100, 14, "Settings")).with_id("settings"),
    );
    add(&mut window, Widget::from(Button::new(14, 46, 100, 14, "About")).with_id("about"));
    window
}

pub fn settings_window() -> Window {
    let mut window = Window::new("Settings");
    add(
        &mut window,
        Widget::from(Checkbox::new(8, 14, "Sound").on_change(|on| info!("Sound: {}", on)))
            .with_id("sound"),
    );
    add(&mut window, Widget::from(Checkbox::new(8, 30, "Invert")).with_id("invert"));
    add(&mut window, Widget::from(Checkbox::new(8, 46, "Dim")).with_id("dim"));
    add(&mut window, Widget::from(Button::new(84, 46, 40, 14, "Back")).with_id("back"));
    window
}

pub fn about_window() -> Window {
    let mut window = Window::new("About");
    add(&mut window, Label::new(4, 14, "Mint UI demo"));
    add(&mut window, Label::new(4, 26, "RP2040 + SSD1306"));
    add(&mut window, Widget::from(Button::new(44, 44, 40, 14, "OK")).with_id("back"));
    window
}

fn add(window: &mut Window, widget: impl Into<Widget>) {
    if let Err(e) = window.add_widget(widget) {
        warn!("Widget not added to '{}': {}", window.title(), e);
    }
}

/// React to a clicked widget
pub fn handle<I2C, I, C>(engine: &mut UiEngine<Ssd1306<I2C>, I, C>, activation: &Activation)
where
    I2C: I2c,
    I: InputSource,
    C: Clock,
{
    let pushed = match (activation.id.as_str(), activation.event) {
        ("settings", WidgetEvent::Pressed) => engine.push_window(settings_window()),
        ("about", WidgetEvent::Pressed) => engine.push_window(about_window()),
        ("back", WidgetEvent::Pressed) => {
            engine.pop_window();
            Ok(())
        }
        ("invert", WidgetEvent::Toggled(on)) => {
            report(engine.surface_mut().set_inverted(on));
            Ok(())
        }
        ("dim", WidgetEvent::Toggled(on)) => {
            let contrast = if on { DIM_CONTRAST } else { DISPLAY_CONTRAST };
            report(engine.surface_mut().set_contrast(contrast));
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(e) = pushed {
        warn!("Cannot open window: {}", e);
    }
}

fn report(result: Result<(), DisplayError>) {
    if let Err(e) = result {
        warn!("Display command failed: {}", e);
    }
}
