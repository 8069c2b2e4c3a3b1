//! Scripted input driver for slider integration tests.

use coverflow::{
    Catalog, HitTarget, InputResponse, Key, PointerEvent, PointerId, SliderController, SliderError,
};

use crate::surface::{FrameRecord, RecordingSurface};

/// Frame period the robot advances its clock by, roughly 60Hz.
const FRAME_MS: u64 = 16;

/// Drives a real controller with scripted pointer, key, and clock input.
///
/// The robot owns the clock. Every pointer step advances it, so velocity
/// in a scripted drag is the distance per step divided by the step
/// duration; `swipe` and `flick_*` pick durations that land clearly on
/// one side of the flick trigger.
pub struct SliderRobot {
    slider: SliderController<RecordingSurface>,
    clock_ms: u64,
    next_pointer: PointerId,
    active_pointer: Option<PointerId>,
    last_x: f32,
}

impl SliderRobot {
    pub fn new(viewport_width: f32) -> Self {
        let mut slider = SliderController::new(RecordingSurface::default());
        slider.set_viewport_width(viewport_width);
        Self {
            slider,
            clock_ms: 0,
            next_pointer: 1,
            active_pointer: None,
            last_x: 0.0,
        }
    }

    pub fn open(&mut self, catalog: Catalog, start_index: usize) -> Result<(), SliderError> {
        self.slider.open(catalog, start_index)
    }

    pub fn controller(&self) -> &SliderController<RecordingSurface> {
        &self.slider
    }

    pub fn controller_mut(&mut self) -> &mut SliderController<RecordingSurface> {
        &mut self.slider
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Advances the robot clock without delivering input.
    pub fn tick(&mut self, ms: u64) {
        self.clock_ms += ms;
    }

    // ----- pointer scripting -------------------------------------------------

    /// Presses a fresh pointer on the stage.
    pub fn press_at(&mut self, x: f32) -> InputResponse {
        let id = self.begin_pointer(x);
        self.slider
            .pointer_event(PointerEvent::down(id, x, self.clock_ms, HitTarget::Stage))
    }

    /// Presses a fresh pointer on a navigation/close control.
    pub fn press_control(&mut self, x: f32) -> InputResponse {
        let id = self.begin_pointer(x);
        self.slider
            .pointer_event(PointerEvent::down(id, x, self.clock_ms, HitTarget::Control))
    }

    /// Moves the pressed pointer to `x`, `ms` after the previous sample.
    pub fn drag_to(&mut self, x: f32, ms: u64) -> InputResponse {
        let id = self.active_pointer.expect("no pointer is pressed");
        self.clock_ms += ms;
        self.last_x = x;
        self.slider
            .pointer_event(PointerEvent::moved(id, x, self.clock_ms))
    }

    /// Lifts the pressed pointer at its last position.
    pub fn release(&mut self) -> InputResponse {
        let id = self.active_pointer.take().expect("no pointer is pressed");
        self.clock_ms += 8;
        self.slider
            .pointer_event(PointerEvent::up(id, self.last_x, self.clock_ms))
    }

    /// Cancels the pressed pointer (pointer leave, system takeover).
    pub fn cancel(&mut self) -> InputResponse {
        let id = self.active_pointer.take().expect("no pointer is pressed");
        self.clock_ms += 8;
        self.slider
            .pointer_event(PointerEvent::cancel(id, self.last_x, self.clock_ms))
    }

    /// Full press-drag-release from `from_x` to `to_x` over `duration_ms`,
    /// sampled in even steps. Returns the release response.
    pub fn swipe(&mut self, from_x: f32, to_x: f32, duration_ms: u64) -> InputResponse {
        const STEPS: u64 = 5;
        self.press_at(from_x);
        for step in 1..=STEPS {
            let x = from_x + (to_x - from_x) * step as f32 / STEPS as f32;
            self.drag_to(x, duration_ms / STEPS);
        }
        self.release()
    }

    /// A fast short leftward swipe: navigates forward on velocity alone.
    pub fn flick_left(&mut self, from_x: f32) -> InputResponse {
        self.swipe(from_x, from_x - 40.0, 40)
    }

    /// A fast short rightward swipe: navigates backward on velocity alone.
    pub fn flick_right(&mut self, from_x: f32) -> InputResponse {
        self.swipe(from_x, from_x + 40.0, 40)
    }

    /// Press and release in place.
    pub fn tap_at(&mut self, x: f32) -> InputResponse {
        self.press_at(x);
        self.clock_ms += 60;
        self.last_x = x;
        self.release()
    }

    fn begin_pointer(&mut self, x: f32) -> PointerId {
        let id = self.next_pointer;
        self.next_pointer += 1;
        self.active_pointer = Some(id);
        self.last_x = x;
        self.clock_ms += FRAME_MS;
        id
    }

    // ----- keyboard & viewport ----------------------------------------------

    pub fn key(&mut self, key: Key) -> InputResponse {
        self.clock_ms += FRAME_MS;
        self.slider.key_down(key)
    }

    pub fn resize(&mut self, width: f32) {
        self.slider.set_viewport_width(width);
    }

    // ----- clock / frames ----------------------------------------------------

    /// Runs `count` refresh ticks at the frame period.
    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.clock_ms += FRAME_MS;
            self.slider.on_frame(self.clock_ms);
        }
    }

    /// Runs frames until the settle animation is done and the track is at
    /// rest, bounded so a broken timeline cannot hang a test.
    pub fn settle(&mut self) {
        const MAX_FRAMES: usize = 120;
        for _ in 0..MAX_FRAMES {
            self.advance_frames(1);
            if !self.slider.is_settling() && self.slider.track_offset() == 0.0 {
                return;
            }
        }
        panic!("track never came to rest within {MAX_FRAMES} frames");
    }

    // ----- assertions --------------------------------------------------------

    pub fn last_frame(&self) -> &FrameRecord {
        self.slider
            .surface()
            .last_frame()
            .expect("no frame has been painted")
    }

    #[track_caller]
    pub fn assert_active(&self, index: usize) {
        assert_eq!(
            self.slider.current_index(),
            index,
            "active index mismatch"
        );
    }

    #[track_caller]
    pub fn assert_open(&self) {
        assert!(self.slider.is_open(), "slider should be open");
    }

    #[track_caller]
    pub fn assert_closed(&self) {
        assert!(!self.slider.is_open(), "slider should be closed");
    }

    #[track_caller]
    pub fn assert_track_at_rest(&self) {
        assert_eq!(self.slider.track_offset(), 0.0, "track should be at rest");
    }
}
