//! The rendering sink the host implements.

use smallvec::SmallVec;

use coverflow_core::DisplayItem;
use coverflow_layout::SlotTransform;

/// One visible slot, ready to paint.
#[derive(Debug, Clone, Copy)]
pub struct RenderSlot<'a> {
    /// Catalog position, stable across frames; the host's element handle.
    pub index: usize,
    /// Signed circular distance from the active slot.
    pub offset: i64,
    pub transform: SlotTransform,
    pub item: &'a DisplayItem,
}

/// Everything the host needs to paint one frame.
///
/// Items absent from `slots` share the uniform `off_stage` transform.
/// `track_offset` is the transient whole-track translation from an active
/// drag or settle animation, applied on top of every slot transform.
#[derive(Debug, Clone)]
pub struct RenderFrame<'a> {
    pub slots: SmallVec<[RenderSlot<'a>; 7]>,
    pub off_stage: SlotTransform,
    pub track_offset: f32,
    pub active_index: usize,
}

/// Where computed frames go.
///
/// Implementations paint; they never mutate slider state. The core calls
/// [`SliderSurface::apply_frame`] from its frame tick and
/// [`SliderSurface::cleared`] when the slider closes.
pub trait SliderSurface {
    fn apply_frame(&mut self, frame: &RenderFrame<'_>);

    /// The slider closed; tear down whatever was painted.
    fn cleared(&mut self) {}
}
