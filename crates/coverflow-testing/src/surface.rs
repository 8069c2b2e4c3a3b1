//! A surface that records every frame it is handed.

use coverflow::{RenderFrame, SliderSurface};

/// Owned copy of one painted slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRecord {
    pub index: usize,
    pub offset: i64,
    pub translate_x: f32,
    pub scale: f32,
    pub opacity: f32,
    pub alt_text: String,
    pub caption: Option<String>,
}

/// Owned copy of one painted frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub active_index: usize,
    pub track_offset: f32,
    pub slots: Vec<SlotRecord>,
}

impl FrameRecord {
    pub fn slot_for(&self, index: usize) -> Option<&SlotRecord> {
        self.slots.iter().find(|slot| slot.index == index)
    }
}

/// Keeps every frame and clear notification for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<FrameRecord>,
    pub cleared_count: usize,
}

impl RecordingSurface {
    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl SliderSurface for RecordingSurface {
    fn apply_frame(&mut self, frame: &RenderFrame<'_>) {
        self.frames.push(FrameRecord {
            active_index: frame.active_index,
            track_offset: frame.track_offset,
            slots: frame
                .slots
                .iter()
                .map(|slot| SlotRecord {
                    index: slot.index,
                    offset: slot.offset,
                    translate_x: slot.transform.translate_x,
                    scale: slot.transform.scale,
                    opacity: slot.transform.opacity,
                    alt_text: slot.item.alt_text().to_owned(),
                    caption: slot.item.caption().map(str::to_owned),
                })
                .collect(),
        });
    }

    fn cleared(&mut self) {
        self.cleared_count += 1;
    }
}
