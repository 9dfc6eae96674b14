//! Button input
//!
//! Four debounced buttons mapped to navigation events.

mod buttons;
mod debounce;

pub use buttons::ButtonPad;
pub use debounce::ButtonChannel;
pub use mint_display::{InputSource, NavigationEvent, NavigationEvents};
