//! Four-button navigation pad

use mint_display::{InputSource, NavigationEvent, NavigationEvents};
use mint_hal::InputPin;

use super::debounce::ButtonChannel;
use crate::config::DEFAULT_DEBOUNCE_MS;

/// Channel order; also the order events are reported in
const CHANNELS: [NavigationEvent; 4] = [
    NavigationEvent::Previous,
    NavigationEvent::Next,
    NavigationEvent::Select,
    NavigationEvent::Back,
];

/// Previous/next/select/back buttons wired active-low
///
/// Each line idles high through a pull-up and reads low while pressed.
pub struct ButtonPad<P> {
    pins: [P; 4],
    channels: [ButtonChannel; 4],
    debounce_ms: u32,
}

impl<P: InputPin> ButtonPad<P> {
    pub fn new(previous: P, next: P, select: P, back: P) -> Self {
        Self {
            pins: [previous, next, select, back],
            channels: [ButtonChannel::new(); 4],
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    pub fn with_debounce(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Debounce state of the channel mapped to `event`
    pub fn channel(&self, event: NavigationEvent) -> &ButtonChannel {
        &self.channels[event as usize]
    }

    /// Pin mapped to `event`
    pub fn pin(&self, event: NavigationEvent) -> &P {
        &self.pins[event as usize]
    }

    pub fn release(self) -> [P; 4] {
        self.pins
    }
}

impl<P: InputPin> InputSource for ButtonPad<P> {
    fn begin(&mut self, now_ms: u32) {
        for channel in self.channels.iter_mut() {
            channel.reset(now_ms);
        }
    }

    fn set_debounce_ms(&mut self, debounce_ms: u32) {
        self.debounce_ms = debounce_ms;
    }

    fn poll(&mut self, now_ms: u32) -> NavigationEvents {
        let mut events = NavigationEvents::new();
        for ((pin, channel), event) in self.pins.iter().zip(self.channels.iter_mut()).zip(CHANNELS) {
            if channel.update(pin.is_active_low(), now_ms, self.debounce_ms) {
                trace!("button {} pressed", event);
                // At most one event per channel, so this never overflows
                let _ = events.push(event);
            }
        }
        events
    }
}
