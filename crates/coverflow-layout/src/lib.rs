//! Spatial layout for the coverflow slider.
//!
//! The layout function is pure: item count, active index, and viewport size
//! class in, a bounded set of slot transforms out. Hosts call it after
//! every index change or resize and paint whatever it returns.

mod engine;
mod size_class;
mod transform;

pub use engine::{layout, LayoutFrame, SlotPlacement, VISIBLE_RADIUS};
pub use size_class::SizeClass;
pub use transform::SlotTransform;
