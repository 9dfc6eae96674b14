//! Time-based animation
//!
//! Everything that moves on screen is a tween evaluated against the
//! engine clock, so a late frame simply samples further along the
//! timeline instead of drifting.

pub mod easing;
pub mod tween;

pub use easing::{ease, CurvePoint, EasingCurve, SPRING_POINTS};
pub use tween::Animation;
