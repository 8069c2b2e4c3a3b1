//! The per-frame layout function.

use smallvec::SmallVec;

use coverflow_core::circular_delta;

use crate::transform::transform_for_offset;
use crate::{SizeClass, SlotTransform};

/// How many slots are individually placed on each side of the active one.
pub const VISIBLE_RADIUS: i64 = 3;

/// One individually placed slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlacement {
    /// Catalog index of the item occupying this slot.
    pub index: usize,
    /// Signed circular distance from the active slot.
    pub offset: i64,
    pub transform: SlotTransform,
}

/// The computed arrangement for one frame.
///
/// Only slots within [`VISIBLE_RADIUS`] of the active index appear in
/// `slots`; every other item shares `off_stage`, so the work done per
/// frame does not grow with the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFrame {
    pub slots: SmallVec<[SlotPlacement; 7]>,
    pub off_stage: SlotTransform,
}

impl LayoutFrame {
    pub fn placement_for(&self, index: usize) -> Option<&SlotPlacement> {
        self.slots.iter().find(|slot| slot.index == index)
    }
}

/// Computes the slot arrangement for `item_count` items centered on
/// `current_index`.
///
/// Pure and deterministic: identical inputs always produce an identical
/// frame. An empty catalog produces an empty frame.
pub fn layout(item_count: usize, current_index: usize, class: SizeClass) -> LayoutFrame {
    let mut slots: SmallVec<[SlotPlacement; 7]> = SmallVec::new();

    if item_count == 0 {
        return LayoutFrame {
            slots,
            off_stage: SlotTransform::OFF_STAGE,
        };
    }

    let window = 2 * VISIBLE_RADIUS + 1;
    if (item_count as i64) <= window {
        // Few enough items that every one has a distinct circular offset.
        for index in 0..item_count {
            let offset = circular_delta(index, current_index, item_count);
            slots.push(SlotPlacement {
                index,
                offset,
                transform: transform_for_offset(offset, class),
            });
        }
        slots.sort_unstable_by_key(|slot| slot.offset);
    } else {
        // Walk the window around the active slot; indices wrap.
        let len = item_count as i64;
        for offset in -VISIBLE_RADIUS..=VISIBLE_RADIUS {
            let index = (current_index as i64 + offset).rem_euclid(len) as usize;
            slots.push(SlotPlacement {
                index,
                offset,
                transform: transform_for_offset(offset, class),
            });
        }
    }

    LayoutFrame {
        slots,
        off_stage: SlotTransform::OFF_STAGE,
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
