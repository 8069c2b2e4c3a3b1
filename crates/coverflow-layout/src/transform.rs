//! The visual transform assigned to each slot.

use crate::SizeClass;

/// Visual parameters for one slot, relative to the stage center.
///
/// `translate_x` and `depth` are logical pixels, `rotation` is degrees
/// around the vertical axis, `scale` and `opacity` are unitless factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransform {
    pub translate_x: f32,
    pub depth: f32,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl SlotTransform {
    pub const fn new(translate_x: f32, depth: f32, rotation: f32, scale: f32, opacity: f32) -> Self {
        Self {
            translate_x,
            depth,
            rotation,
            scale,
            opacity,
        }
    }

    /// The uniform faded state for slots beyond the visible window.
    pub const OFF_STAGE: SlotTransform = SlotTransform::new(0.0, -420.0, 0.0, 0.5, 0.0);
}

/// The coverflow look, one row per slot offset from -3 to 3.
///
/// These values are design constants; they are what makes the arrangement
/// read as a deck receding to both sides. Offset 0 is the unrotated,
/// full-scale foreground slot. Mirrored offsets flip translate and
/// rotation signs.
const SLOT_TABLE: [SlotTransform; 7] = [
    SlotTransform::new(-520.0, -340.0, 28.0, 0.60, 0.30), // offset -3
    SlotTransform::new(-380.0, -240.0, 24.0, 0.72, 0.55), // offset -2
    SlotTransform::new(-220.0, -120.0, 18.0, 0.86, 0.85), // offset -1
    SlotTransform::new(0.0, 0.0, 0.0, 1.00, 1.00),        // offset  0
    SlotTransform::new(220.0, -120.0, -18.0, 0.86, 0.85), // offset  1
    SlotTransform::new(380.0, -240.0, -24.0, 0.72, 0.55), // offset  2
    SlotTransform::new(520.0, -340.0, -28.0, 0.60, 0.30), // offset  3
];

/// Active-slot scale per size class, the only viewport-responsive value.
const fn active_scale(class: SizeClass) -> f32 {
    match class {
        SizeClass::Narrow => 1.00,
        SizeClass::Medium => 1.08,
        SizeClass::Wide => 1.16,
    }
}

/// Transform for a slot at the given offset from the active slot.
///
/// Offsets beyond the table map to [`SlotTransform::OFF_STAGE`].
pub(crate) fn transform_for_offset(offset: i64, class: SizeClass) -> SlotTransform {
    if !(-3..=3).contains(&offset) {
        return SlotTransform::OFF_STAGE;
    }
    let mut transform = SLOT_TABLE[(offset + 3) as usize];
    if offset == 0 {
        transform.scale = active_scale(class);
    }
    transform
}
