//! Mint UI - demo firmware
//!
//! Runs the UI engine on an RP2040 with a 128x64 SSD1306 OLED on I2C0
//! (SDA GPIO4, SCL GPIO5) and four active-low buttons:
//!
//! | Button   | Pin    |
//! |----------|--------|
//! | Previous | GPIO12 |
//! | Next     | GPIO14 |
//! | Select   | GPIO27 |
//! | Back     | GPIO26 |

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Ticker};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use mint_core::input::ButtonPad;
use mint_core::UiEngine;
use mint_display::Ssd1306;
use mint_hal::HalInput;

use crate::clock::EmbassyClock;

mod clock;
mod config;
mod screens;

// Heap for widget callbacks
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 8KB
const HEAP_SIZE: usize = 8 * 1024;

/// Frame period (~60 Hz)
const FRAME_MS: u64 = 16;

/// I2C bus speed for the display
const I2C_FREQUENCY_HZ: u32 = 400_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Mint UI demo starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let display = Ssd1306::with_address(i2c, config::DISPLAY_ADDRESS);

    // Buttons short to ground; internal pull-ups hold them high when released
    let buttons = ButtonPad::new(
        HalInput::new(Input::new(p.PIN_12, Pull::Up)),
        HalInput::new(Input::new(p.PIN_14, Pull::Up)),
        HalInput::new(Input::new(p.PIN_27, Pull::Up)),
        HalInput::new(Input::new(p.PIN_26, Pull::Up)),
    );

    let mut engine =
        match UiEngine::with_config(display, buttons, EmbassyClock, config::ENGINE_CONFIG) {
            Ok(engine) => engine,
            Err(e) => {
                error!("Invalid engine configuration: {}", e);
                return;
            }
        };

    if let Err(e) = engine.begin() {
        error!("Display init failed: {}", e);
        return;
    }
    if let Err(e) = engine.surface_mut().set_contrast(config::DISPLAY_CONTRAST) {
        warn!("Failed to set contrast: {}", e);
    }
    info!("Display initialized");

    if let Err(e) = engine.push_window(screens::main_window()) {
        error!("Failed to open main window: {}", e);
        return;
    }

    let mut ticker = Ticker::every(Duration::from_millis(FRAME_MS));
    loop {
        match engine.update() {
            Ok(Some(activation)) => screens::handle(&mut engine, &activation),
            Ok(None) => {}
            Err(e) => warn!("Frame failed: {}", e),
        }
        ticker.next().await;
    }
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
