//! The slider controller: state, public API, and input routing.

use coverflow_animation::SettleTimeline;
use coverflow_core::{clamp_index, step_back, step_forward, Catalog, SliderError};
use coverflow_gesture::{
    GestureMachine, GestureResponse, NavDirection, PointerEvent, ReleaseOutcome,
};
use coverflow_layout::{layout, SizeClass};
use smallvec::SmallVec;

use crate::key_event::Key;
use crate::surface::{RenderFrame, RenderSlot, SliderSurface};

/// The modal's discrete controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Close,
}

/// What an input event did, reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    /// Not applicable: slider closed, foreign pointer, or a control press
    /// that the host should treat as a click.
    Ignored,
    /// Consumed by the gesture machine; no decision yet.
    Tracked,
    /// A release navigated exactly one step.
    Navigated(NavDirection),
    /// A release snapped back without navigating.
    SnappedBack,
    /// A press and release with no meaningful movement; the host may
    /// toggle its chrome.
    Tap,
}

/// Orchestrates one slider: catalog, circular index, gesture machine,
/// settle animation, and the frames pushed to the host surface.
///
/// Explicitly constructed and owned by whichever page controller needs a
/// lightbox; there is no shared global instance. State persists across
/// open/close cycles and the catalog is replaced wholesale on each open.
pub struct SliderController<S: SliderSurface> {
    surface: S,
    catalog: Catalog,
    current_index: usize,
    is_open: bool,
    viewport_width: f32,
    size_class: SizeClass,
    machine: GestureMachine,
    settle: Option<SettleTimeline>,
    track_offset: f32,
    needs_frame: bool,
}

impl<S: SliderSurface> SliderController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            catalog: Catalog::default(),
            current_index: 0,
            is_open: false,
            viewport_width: 0.0,
            size_class: SizeClass::Narrow,
            machine: GestureMachine::new(),
            settle: None,
            track_offset: 0.0,
            needs_frame: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// Transient whole-track translation from the live drag or settle.
    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    /// True while a release animation is still playing.
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Opens the slider over `catalog`, starting at `start_index`.
    ///
    /// An empty catalog is refused and leaves the current state untouched.
    /// An out-of-range start index clamps to the last item.
    pub fn open(&mut self, catalog: Catalog, start_index: usize) -> Result<(), SliderError> {
        if catalog.is_empty() {
            return Err(SliderError::InvalidCatalog);
        }

        self.current_index = clamp_index(start_index, catalog.len());
        self.catalog = catalog;
        self.is_open = true;
        self.machine.reset();
        self.settle = None;
        self.track_offset = 0.0;
        log::debug!(
            "open: {} items, starting at {}",
            self.catalog.len(),
            self.current_index
        );
        self.push_frame();
        Ok(())
    }

    /// Closes the slider. Idempotent; the catalog and index survive so a
    /// reopen without arguments could resume where the viewer left off.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.machine.reset();
        self.settle = None;
        self.track_offset = 0.0;
        self.needs_frame = false;
        self.surface.cleared();
    }

    /// Advances to the next item, wrapping at the end.
    pub fn next(&mut self) {
        self.step(NavDirection::Forward);
    }

    /// Retreats to the previous item, wrapping at the start.
    pub fn prev(&mut self) {
        self.step(NavDirection::Backward);
    }

    fn step(&mut self, direction: NavDirection) -> bool {
        if !self.is_open || self.catalog.len() <= 1 {
            return false;
        }
        self.current_index = match direction {
            NavDirection::Forward => step_forward(self.current_index, self.catalog.len()),
            NavDirection::Backward => step_back(self.current_index, self.catalog.len()),
        };
        self.needs_frame = true;
        true
    }

    /// Routes one key press. Keys are ignored, not buffered, while closed.
    pub fn key_down(&mut self, key: Key) -> InputResponse {
        if !self.is_open {
            return InputResponse::Ignored;
        }
        match key {
            Key::Escape => {
                self.close();
                InputResponse::Tracked
            }
            Key::ArrowRight => {
                if self.step(NavDirection::Forward) {
                    InputResponse::Navigated(NavDirection::Forward)
                } else {
                    InputResponse::Tracked
                }
            }
            Key::ArrowLeft => {
                if self.step(NavDirection::Backward) {
                    InputResponse::Navigated(NavDirection::Backward)
                } else {
                    InputResponse::Tracked
                }
            }
            Key::Unknown => InputResponse::Ignored,
        }
    }

    /// The viewport width changed; the index is untouched and the layout
    /// reflows with the new size class on the next frame.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
        let class = SizeClass::from_width(width);
        if class != self.size_class {
            log::debug!("viewport {width}px moves layout to {class:?}");
        }
        self.size_class = class;
        if self.is_open {
            self.needs_frame = true;
        }
    }

    /// One discrete control click from the host's buttons.
    pub fn activate_control(&mut self, control: Control) {
        if !self.is_open {
            return;
        }
        match control {
            Control::Previous => self.prev(),
            Control::Next => self.next(),
            Control::Close => self.close(),
        }
    }

    /// Routes one pointer event into the gesture machine.
    ///
    /// A navigating release mutates the index synchronously, before the
    /// cosmetic settle animation has run a single frame; rapid flicks
    /// therefore queue naturally.
    pub fn pointer_event(&mut self, event: PointerEvent) -> InputResponse {
        if !self.is_open {
            return InputResponse::Ignored;
        }

        match self.machine.handle(event, self.viewport_width) {
            GestureResponse::Ignored => InputResponse::Ignored,
            GestureResponse::PressAccepted { cancelled_settle } => {
                if cancelled_settle {
                    self.settle = None;
                    self.track_offset = 0.0;
                    self.needs_frame = true;
                }
                InputResponse::Tracked
            }
            GestureResponse::TrackMoved(offset) => {
                self.track_offset = offset;
                self.needs_frame = true;
                InputResponse::Tracked
            }
            GestureResponse::Released(outcome) => self.resolve_release(outcome),
        }
    }

    fn resolve_release(&mut self, outcome: ReleaseOutcome) -> InputResponse {
        match outcome {
            ReleaseOutcome::Navigate { direction, plan } => {
                let stepped = self.step(direction);
                self.track_offset = 0.0;
                self.settle = Some(SettleTimeline::new(plan));
                self.needs_frame = true;
                if stepped {
                    InputResponse::Navigated(direction)
                } else {
                    InputResponse::SnappedBack
                }
            }
            ReleaseOutcome::SnapBack { plan } => {
                self.settle = Some(SettleTimeline::new(plan));
                self.needs_frame = true;
                InputResponse::SnappedBack
            }
            ReleaseOutcome::Tap => InputResponse::Tap,
        }
    }

    /// The host's refresh tick. Coalesces however many index changes
    /// happened since the last tick into one frame push and advances the
    /// settle animation; the logical index is always already current.
    pub fn on_frame(&mut self, now_ms: u64) {
        if !self.is_open {
            return;
        }

        if let Some(timeline) = &mut self.settle {
            let sample = timeline.sample(now_ms);
            self.track_offset = sample.track_offset;
            if sample.finished {
                self.settle = None;
                self.machine.settle_finished();
            }
            self.needs_frame = true;
        }

        if self.needs_frame {
            self.push_frame();
        }
    }

    fn push_frame(&mut self) {
        let arranged = layout(self.catalog.len(), self.current_index, self.size_class);
        let mut slots: SmallVec<[RenderSlot<'_>; 7]> = SmallVec::new();
        for placement in &arranged.slots {
            // Placements come from the catalog's own length, so the item
            // lookup cannot miss.
            if let Some(item) = self.catalog.get(placement.index) {
                slots.push(RenderSlot {
                    index: placement.index,
                    offset: placement.offset,
                    transform: placement.transform,
                    item,
                });
            }
        }
        let frame = RenderFrame {
            slots,
            off_stage: arranged.off_stage,
            track_offset: self.track_offset,
            active_index: self.current_index,
        };
        self.surface.apply_frame(&frame);
        self.needs_frame = false;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
