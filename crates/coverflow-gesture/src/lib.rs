//! Pointer gesture handling for the coverflow slider.
//!
//! One logical pointer drives a press, drag, release, settle cycle. The
//! machine consumes raw pointer samples and produces track offsets while
//! dragging plus a single release decision: navigate one step, snap back,
//! or report a tap. It never touches layout or rendering.

mod constants;
mod machine;
mod pointer;
mod velocity;

pub use constants::{
    distance_threshold, DISTANCE_TRIGGER_MIN_PX, DISTANCE_TRIGGER_VIEWPORT_FRACTION,
    FLICK_TRIGGER_PX_PER_MS, OVERSHOOT_MAX_PX, OVERSHOOT_MIN_PX, OVERSHOOT_PX_PER_VELOCITY,
    TAP_SLOP_PX,
};
pub use machine::{GestureMachine, GesturePhase, GestureResponse, NavDirection, ReleaseOutcome};
pub use pointer::{HitTarget, PointerEvent, PointerEventKind, PointerId};
pub use velocity::LastIntervalVelocity;
