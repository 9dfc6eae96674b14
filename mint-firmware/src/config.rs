//! Build-time configuration
//!
//! Generated from ui.toml by build.rs; edit ui.toml and rebuild to change.

include!(concat!(env!("OUT_DIR"), "/ui_config.rs"));
