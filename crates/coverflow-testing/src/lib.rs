//! Testing utilities for the coverflow slider.
//!
//! The robot drives a real [`coverflow::SliderController`] with scripted
//! pointer, keyboard, and clock input against a recording surface, so
//! integration tests read as user stories: press, drag, release, settle,
//! assert.

mod robot;
mod surface;

pub use robot::SliderRobot;
pub use surface::{FrameRecord, RecordingSurface, SlotRecord};

use coverflow::{Catalog, DisplayItem};

/// Builds a catalog of `count` numbered images with captions.
pub fn sample_catalog(count: usize) -> Catalog {
    (0..count)
        .map(|i| {
            DisplayItem::new(format!("projects/demo/images/{i:02}.jpg"), format!("image {i}"))
                .with_caption(format!("Plate {i}"))
        })
        .collect()
}
