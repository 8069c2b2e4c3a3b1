//! Time-based animation support for the coverflow slider.
//!
//! Everything here is a pure function of caller-supplied timestamps; there
//! is no clock, scheduler, or frame callback inside this crate. The host
//! drives sampling from whatever refresh source it has.

mod easing;
mod settle;
mod tween;

pub use easing::Easing;
pub use settle::{SettlePlan, SettleSample, SettleTimeline};
pub use tween::TweenSpec;
