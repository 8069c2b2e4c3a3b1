//! Gesture-driven 3D coverflow slider core.
//!
//! The controller owns the single mutable slider state and wires the pure
//! pieces together: catalog and circular index from `coverflow-core`, the
//! per-frame layout function from `coverflow-layout`, the pointer state
//! machine from `coverflow-gesture`, and the settle timeline from
//! `coverflow-animation`. Rendering stays outside; hosts implement
//! [`SliderSurface`] and paint whatever frames they are handed.

mod controller;
mod key_event;
mod surface;

pub use controller::{Control, InputResponse, SliderController};
pub use key_event::Key;
pub use surface::{RenderFrame, RenderSlot, SliderSurface};

pub use coverflow_core::{Catalog, DisplayItem, ImageRef, SliderError};
pub use coverflow_gesture::{HitTarget, NavDirection, PointerEvent, PointerId};
pub use coverflow_layout::{SizeClass, SlotTransform};
