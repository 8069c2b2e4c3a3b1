//! Gesture thresholds, in logical pixels and milliseconds.

/// Absolute floor for the release distance trigger.
pub const DISTANCE_TRIGGER_MIN_PX: f32 = 60.0;

/// Viewport-relative release distance trigger.
pub const DISTANCE_TRIGGER_VIEWPORT_FRACTION: f32 = 0.08;

/// Release velocity beyond which a drag counts as a flick, px/ms.
pub const FLICK_TRIGGER_PX_PER_MS: f32 = 0.5;

/// Net displacement under which a release still reads as a tap.
///
/// Matches the touch slop used for drag detection on common platforms;
/// finger jitter on touch screens produces a few pixels of motion even
/// for an intentional tap.
pub const TAP_SLOP_PX: f32 = 8.0;

/// Overshoot pixels per unit of release velocity.
pub const OVERSHOOT_PX_PER_VELOCITY: f32 = 140.0;

/// Overshoot floor.
pub const OVERSHOOT_MIN_PX: f32 = 140.0;

/// Overshoot ceiling.
pub const OVERSHOOT_MAX_PX: f32 = 220.0;

/// Displacement a release must exceed to navigate by distance alone.
///
/// The larger of an absolute floor and a fraction of the viewport, so
/// narrow phones do not demand a disproportionate drag and wide desktops
/// do not navigate on a nudge. Non-finite widths collapse to the floor.
pub fn distance_threshold(viewport_width: f32) -> f32 {
    if !viewport_width.is_finite() {
        return DISTANCE_TRIGGER_MIN_PX;
    }
    DISTANCE_TRIGGER_MIN_PX.max(DISTANCE_TRIGGER_VIEWPORT_FRACTION * viewport_width)
}
