//! Walks the slider core through a gallery session and prints every frame.
//!
//! No windowing stack: the surface renders each frame as one line of text,
//! which makes the layout, gesture, and settle behavior visible in a
//! terminal scrollback.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use web_time::Instant;

use coverflow::{
    Catalog, Control, DisplayItem, HitTarget, Key, PointerEvent, RenderFrame, SliderController,
    SliderSurface,
};

const FRAME: Duration = Duration::from_millis(16);

/// Paints each frame as a one-line strip, active slot bracketed.
struct PrintSurface;

impl SliderSurface for PrintSurface {
    fn apply_frame(&mut self, frame: &RenderFrame<'_>) {
        let mut strip = String::new();
        for slot in &frame.slots {
            if slot.offset == 0 {
                strip.push_str(&format!("[{:>2}]", slot.index));
            } else {
                strip.push_str(&format!(" {:>2} ", slot.index));
            }
        }
        let caption = frame
            .slots
            .iter()
            .find(|slot| slot.offset == 0)
            .and_then(|slot| slot.item.caption())
            .unwrap_or("");
        println!(
            "track {:>7.1}px | {strip} | {caption}",
            frame.track_offset
        );
    }

    fn cleared(&mut self) {
        println!("(slider closed)");
    }
}

fn gallery() -> Catalog {
    let title = "Atelier Norte";
    [
        (Some("Reception signage"), Some("Signage")),
        (None, Some("Stationery suite")),
        (Some("Facade at dusk"), Some("Facade")),
        (None, None),
        (Some("Poster wall"), Some("Posters")),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (alt, caption))| {
        let item = DisplayItem::with_alt_fallback(
            format!("projects/atelier-norte/images/{i:02}.jpg"),
            alt,
            title,
        );
        match caption {
            Some(caption) => item.with_caption(caption),
            None => item,
        }
    })
    .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let clock = Instant::now();
    let now = |clock: &Instant| clock.elapsed().as_millis() as u64;

    let mut slider = SliderController::new(PrintSurface);
    slider.set_viewport_width(1280.0);
    slider.open(gallery(), 0)?;

    println!("-- arrow keys --");
    slider.key_down(Key::ArrowRight);
    slider.on_frame(now(&clock));
    slider.key_down(Key::ArrowRight);
    slider.key_down(Key::ArrowLeft);
    slider.on_frame(now(&clock));

    println!("-- slow drag past the distance threshold --");
    slider.pointer_event(PointerEvent::down(1, 640.0, now(&clock), HitTarget::Stage));
    for step in 1..=8 {
        thread::sleep(FRAME);
        let x = 640.0 - 20.0 * step as f32;
        slider.pointer_event(PointerEvent::moved(1, x, now(&clock)));
        slider.on_frame(now(&clock));
    }
    slider.pointer_event(PointerEvent::up(1, 480.0, now(&clock)));
    run_until_settled(&mut slider, &clock);

    println!("-- short fast flick back --");
    slider.pointer_event(PointerEvent::down(2, 640.0, now(&clock), HitTarget::Stage));
    for step in 1..=3 {
        thread::sleep(FRAME);
        slider.pointer_event(PointerEvent::moved(2, 640.0 + 24.0 * step as f32, now(&clock)));
        slider.on_frame(now(&clock));
    }
    slider.pointer_event(PointerEvent::up(2, 712.0, now(&clock)));
    run_until_settled(&mut slider, &clock);

    println!("-- control buttons --");
    slider.activate_control(Control::Next);
    slider.on_frame(now(&clock));
    slider.activate_control(Control::Close);

    log::info!("demo finished in {:?}", clock.elapsed());
    Ok(())
}

fn run_until_settled(slider: &mut SliderController<PrintSurface>, clock: &Instant) {
    while slider.is_settling() {
        thread::sleep(FRAME);
        slider.on_frame(clock.elapsed().as_millis() as u64);
    }
}
