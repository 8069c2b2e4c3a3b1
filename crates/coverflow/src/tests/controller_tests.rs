use super::*;

use coverflow_core::DisplayItem;
use coverflow_gesture::HitTarget;

#[derive(Debug, Clone, PartialEq)]
struct FrameSnapshot {
    active_index: usize,
    track_offset: f32,
    offsets: Vec<i64>,
}

#[derive(Default)]
struct TestSurface {
    frames: Vec<FrameSnapshot>,
    cleared: usize,
}

impl SliderSurface for TestSurface {
    fn apply_frame(&mut self, frame: &RenderFrame<'_>) {
        self.frames.push(FrameSnapshot {
            active_index: frame.active_index,
            track_offset: frame.track_offset,
            offsets: frame.slots.iter().map(|slot| slot.offset).collect(),
        });
    }

    fn cleared(&mut self) {
        self.cleared += 1;
    }
}

fn catalog(count: usize) -> Catalog {
    (0..count)
        .map(|i| {
            DisplayItem::new(format!("images/{i:02}.jpg"), format!("image {i}"))
                .with_caption(format!("Caption {i}"))
        })
        .collect()
}

fn open_slider(count: usize, start: usize) -> SliderController<TestSurface> {
    let mut slider = SliderController::new(TestSurface::default());
    slider.set_viewport_width(800.0);
    slider.open(catalog(count), start).expect("catalog is not empty");
    slider
}

#[test]
fn open_on_empty_catalog_is_refused() {
    let mut slider = SliderController::new(TestSurface::default());
    let result = slider.open(Catalog::default(), 0);

    assert_eq!(result, Err(SliderError::InvalidCatalog));
    assert!(!slider.is_open());
    assert_eq!(slider.current_index(), 0);
    assert!(slider.surface().frames.is_empty());
}

#[test]
fn open_clamps_start_index_into_range() {
    let slider = open_slider(5, 11);
    assert_eq!(slider.current_index(), 4);
}

#[test]
fn open_renders_immediately() {
    let slider = open_slider(5, 2);
    let frames = &slider.surface().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].active_index, 2);
    assert_eq!(frames[0].track_offset, 0.0);
}

#[test]
fn navigation_wraps_in_both_directions() {
    let mut slider = open_slider(5, 2);

    slider.next();
    assert_eq!(slider.current_index(), 3);
    slider.next();
    assert_eq!(slider.current_index(), 4);
    slider.next();
    assert_eq!(slider.current_index(), 0);
    slider.prev();
    assert_eq!(slider.current_index(), 4);
}

#[test]
fn index_stays_in_range_under_any_sequence() {
    let mut slider = open_slider(7, 3);
    let original = slider.current_index();

    for _ in 0..7 {
        slider.next();
        assert!(slider.current_index() < 7);
    }
    assert_eq!(slider.current_index(), original);

    slider.next();
    slider.prev();
    assert_eq!(slider.current_index(), original);
}

#[test]
fn single_item_catalog_never_moves() {
    let mut slider = open_slider(1, 0);
    slider.next();
    slider.prev();
    slider.key_down(Key::ArrowRight);
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn keyboard_navigates_and_escape_closes() {
    let mut slider = open_slider(3, 0);

    assert_eq!(
        slider.key_down(Key::ArrowRight),
        InputResponse::Navigated(NavDirection::Forward)
    );
    assert_eq!(slider.current_index(), 1);

    assert_eq!(
        slider.key_down(Key::ArrowLeft),
        InputResponse::Navigated(NavDirection::Backward)
    );
    assert_eq!(slider.current_index(), 0);

    slider.key_down(Key::Escape);
    assert!(!slider.is_open());
    assert_eq!(slider.surface().cleared, 1);
}

#[test]
fn input_while_closed_is_ignored_not_buffered() {
    let mut slider = SliderController::new(TestSurface::default());
    slider.set_viewport_width(800.0);

    assert_eq!(slider.key_down(Key::ArrowRight), InputResponse::Ignored);
    assert_eq!(
        slider.pointer_event(PointerEvent::down(1, 100.0, 0, HitTarget::Stage)),
        InputResponse::Ignored
    );

    slider.open(catalog(3), 0).unwrap();
    // The earlier arrow press did not queue up.
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn close_is_idempotent() {
    let mut slider = open_slider(3, 0);
    slider.close();
    slider.close();
    assert_eq!(slider.surface().cleared, 1);
}

#[test]
fn reopen_replaces_the_catalog() {
    let mut slider = open_slider(5, 4);
    slider.close();

    slider.open(catalog(2), 0).unwrap();
    assert_eq!(slider.item_count(), 2);
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn resize_changes_class_but_not_index() {
    let mut slider = open_slider(5, 3);
    assert_eq!(slider.size_class(), SizeClass::Medium);

    slider.set_viewport_width(1440.0);
    assert_eq!(slider.size_class(), SizeClass::Wide);
    assert_eq!(slider.current_index(), 3);

    slider.on_frame(16);
    let last = slider.surface().frames.last().unwrap();
    assert_eq!(last.active_index, 3);
}

#[test]
fn rapid_steps_coalesce_into_one_frame() {
    let mut slider = open_slider(9, 0);
    let frames_before = slider.surface().frames.len();

    slider.next();
    slider.next();
    slider.next();
    assert_eq!(slider.surface().frames.len(), frames_before);

    slider.on_frame(16);
    assert_eq!(slider.surface().frames.len(), frames_before + 1);
    assert_eq!(slider.surface().frames.last().unwrap().active_index, 3);
}

#[test]
fn idle_frames_push_nothing() {
    let mut slider = open_slider(5, 0);
    let frames_before = slider.surface().frames.len();
    slider.on_frame(16);
    slider.on_frame(32);
    assert_eq!(slider.surface().frames.len(), frames_before);
}

#[test]
fn drag_offsets_the_track_then_navigates_on_release() {
    let mut slider = open_slider(5, 2);

    slider.pointer_event(PointerEvent::down(1, 400.0, 0, HitTarget::Stage));
    slider.pointer_event(PointerEvent::moved(1, 360.0, 40));
    slider.on_frame(48);
    assert_eq!(slider.surface().frames.last().unwrap().track_offset, -40.0);

    // Slow so far, but past the distance threshold by release.
    slider.pointer_event(PointerEvent::moved(1, 320.0, 120));
    let response = slider.pointer_event(PointerEvent::up(1, 320.0, 160));
    assert_eq!(response, InputResponse::Navigated(NavDirection::Forward));
    // Index moved at release, before any settle frame ran.
    assert_eq!(slider.current_index(), 3);
}

#[test]
fn settle_animation_runs_and_finishes() {
    let mut slider = open_slider(5, 2);

    slider.pointer_event(PointerEvent::down(1, 400.0, 0, HitTarget::Stage));
    slider.pointer_event(PointerEvent::moved(1, 300.0, 80));
    slider.pointer_event(PointerEvent::up(1, 300.0, 100));
    assert_eq!(slider.current_index(), 3);

    // Mid-overshoot the track is displaced in the drag direction.
    slider.on_frame(200);
    slider.on_frame(320);
    let mid = slider.surface().frames.last().unwrap().track_offset;
    assert!(mid < 0.0, "expected overshoot, got {mid}");

    // Past the full overshoot-plus-return duration everything is at rest.
    slider.on_frame(200 + 220 + 180);
    let last = slider.surface().frames.last().unwrap();
    assert_eq!(last.track_offset, 0.0);
    assert_eq!(last.active_index, 3);
}

#[test]
fn press_during_settle_resets_the_track() {
    let mut slider = open_slider(5, 2);

    slider.pointer_event(PointerEvent::down(1, 400.0, 0, HitTarget::Stage));
    slider.pointer_event(PointerEvent::moved(1, 300.0, 80));
    slider.pointer_event(PointerEvent::up(1, 300.0, 100));

    slider.on_frame(150);
    slider.on_frame(250);
    assert_ne!(slider.track_offset(), 0.0);

    let response = slider.pointer_event(PointerEvent::down(2, 500.0, 260, HitTarget::Stage));
    assert_eq!(response, InputResponse::Tracked);
    assert_eq!(slider.track_offset(), 0.0);

    // The new gesture drags from a clean track.
    slider.pointer_event(PointerEvent::moved(2, 520.0, 280));
    assert_eq!(slider.track_offset(), 20.0);
}

#[test]
fn control_clicks_navigate_and_close() {
    let mut slider = open_slider(4, 0);

    slider.activate_control(Control::Next);
    assert_eq!(slider.current_index(), 1);
    slider.activate_control(Control::Previous);
    assert_eq!(slider.current_index(), 0);
    slider.activate_control(Control::Close);
    assert!(!slider.is_open());
}

#[test]
fn control_press_does_not_become_a_drag() {
    let mut slider = open_slider(4, 0);

    let response = slider.pointer_event(PointerEvent::down(1, 60.0, 0, HitTarget::Control));
    assert_eq!(response, InputResponse::Ignored);

    // No gesture record exists, so moves change nothing.
    slider.pointer_event(PointerEvent::moved(1, 400.0, 50));
    assert_eq!(slider.track_offset(), 0.0);
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn second_pointer_cannot_disturb_an_active_gesture() {
    let mut slider = open_slider(5, 2);

    slider.pointer_event(PointerEvent::down(1, 400.0, 0, HitTarget::Stage));
    slider.pointer_event(PointerEvent::moved(1, 380.0, 20));

    assert_eq!(
        slider.pointer_event(PointerEvent::down(9, 100.0, 30, HitTarget::Stage)),
        InputResponse::Ignored
    );
    assert_eq!(
        slider.pointer_event(PointerEvent::up(9, 700.0, 60)),
        InputResponse::Ignored
    );
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn tap_is_surfaced_to_the_host() {
    let mut slider = open_slider(5, 2);

    slider.pointer_event(PointerEvent::down(1, 400.0, 0, HitTarget::Stage));
    let response = slider.pointer_event(PointerEvent::up(1, 400.0, 90));
    assert_eq!(response, InputResponse::Tap);
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn frames_carry_captions_through_render_slots() {
    struct CaptionSurface {
        captions: Vec<Option<String>>,
    }
    impl SliderSurface for CaptionSurface {
        fn apply_frame(&mut self, frame: &RenderFrame<'_>) {
            self.captions = frame
                .slots
                .iter()
                .map(|slot| slot.item.caption().map(str::to_owned))
                .collect();
        }
    }

    let mut slider = SliderController::new(CaptionSurface { captions: vec![] });
    slider.set_viewport_width(800.0);
    slider.open(catalog(3), 1).unwrap();

    assert_eq!(slider.surface().captions.len(), 3);
    assert!(slider
        .surface()
        .captions
        .iter()
        .all(|caption| caption.is_some()));
}
