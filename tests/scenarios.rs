use approx::assert_abs_diff_eq;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};

use attitude_watch::app::button_demo::{PROMPT_TEXT, SHAKE_TEXT};
use attitude_watch::app::{AttitudeIndicator, ButtonDemo};
use attitude_watch::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use attitude_watch::gfx::{Canvas, Color, DrawOp, Framebuffer, Recorder};
use attitude_watch::window::Lifecycle;
use attitude_watch::{ButtonId, HostEvent, RawSample, Window, WindowHandlers};

fn window<H: WindowHandlers>(app: H) -> Window<H> {
    let mut w = Window::new(app, Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    w.load();
    w
}

fn feed<H: WindowHandlers>(w: &mut Window<H>, sample: RawSample, batches: usize) -> usize {
    (0..batches * 5)
        .filter(|_| w.dispatch(HostEvent::Sample(sample)))
        .count()
}

fn frame<H: WindowHandlers>(w: &mut Window<H>) -> Framebuffer {
    let mut fb = Framebuffer::new();
    w.render(&mut Canvas::new(&mut fb));
    fb
}

fn ink(fb: &Framebuffer, x: i32, y: i32) -> bool {
    fb.pixel(Point::new(x, y)) == Some(BinaryColor::On)
}

#[test]
fn level_attitude() {
    let mut w = window(AttitudeIndicator::new());
    assert_eq!(feed(&mut w, RawSample::new(0, 0, 0), 5), 5);

    let app = w.handlers();
    assert_eq!(app.attitude().roll_rad, 0.0);
    assert_eq!(app.attitude().pitch_px, 0);
    assert_eq!(app.horizon_y(), Some(84));

    let mut rec = Recorder::new();
    assert!(w.render(&mut rec));
    assert_eq!(
        rec.lines().next(),
        Some((Point::new(72, 84), Point::new(72 + 130, 84)))
    );
}

#[test]
fn level_frame_pixels() {
    let mut w = window(AttitudeIndicator::new());
    feed(&mut w, RawSample::new(0, 0, 0), 1);
    let fb = frame(&mut w);

    // Horizon through the centre, sky above it.
    assert!(ink(&fb, 72, 84));
    assert!(ink(&fb, 102, 84));
    assert!(!ink(&fb, 72, 76));
    // Bezel ring is white away from the graduations, outside it is masked.
    assert!(!ink(&fb, 113, 125));
    assert!(ink(&fb, 0, 0));
    assert!(ink(&fb, 143, 167));
}

#[test]
fn pure_roll() {
    let mut w = window(AttitudeIndicator::new());
    feed(&mut w, RawSample::new(160, 0, 0), 5);

    let a = *w.handlers().attitude();
    assert_eq!(a.roll_degrees(), -10);
    assert_abs_diff_eq!(a.roll_rad, -0.1745, epsilon = 1e-4);

    // The right half of the horizon now climbs.
    let fb = frame(&mut w);
    assert!((76..=78).any(|y| ink(&fb, 111, y)));
    assert!(!ink(&fb, 111, 84));
}

#[test]
fn pure_pitch() {
    let mut w = window(AttitudeIndicator::new());
    feed(&mut w, RawSample::new(0, 0, 100), 5);

    assert_eq!(w.handlers().attitude().pitch_px, 10);
    assert_eq!(w.handlers().horizon_y(), Some(84 + 10));

    let fb = frame(&mut w);
    assert!(ink(&fb, 102, 94));
    assert!(!ink(&fb, 102, 84));
}

#[test]
fn bezel_mask_follows_horizon() {
    let mut w = window(AttitudeIndicator::new());
    feed(&mut w, RawSample::new(-400, 0, -250), 1);
    let mut rec = Recorder::new();
    w.render(&mut rec);

    let ops = rec.ops();
    // clear, then 16 horizon lines
    let last_horizon_line = 16;
    let mask = ops
        .iter()
        .position(|op| matches!(op, DrawOp::Circle { radius: 115, color: Color::Black, .. }))
        .unwrap();
    let white_ring = ops
        .iter()
        .position(|op| matches!(op, DrawOp::Circle { color: Color::White, .. }))
        .unwrap();
    assert!(matches!(ops[0], DrawOp::FillRect { color: Color::White, .. }));
    assert!(white_ring > last_horizon_line);
    assert!(mask > white_ring);
}

#[test]
fn empty_batch_changes_nothing() {
    let mut w = window(AttitudeIndicator::new());
    feed(&mut w, RawSample::new(160, 0, 100), 1);
    w.render(&mut Recorder::new());
    let before = *w.handlers().attitude();

    w.deliver_batch(&[]);
    assert_eq!(*w.handlers().attitude(), before);
    assert!(!w.is_dirty());
}

#[test]
fn shake_detection() {
    let mut w = window(ButtonDemo::new());
    assert_eq!(w.handlers().text(), Some(PROMPT_TEXT));

    feed(&mut w, RawSample::new(0, 1999, -1500), 2);
    assert_eq!(w.handlers().text(), Some(PROMPT_TEXT));

    feed(&mut w, RawSample::new(0, 0, -2600), 1);
    assert_eq!(w.handlers().text(), Some(SHAKE_TEXT));
    assert!(w.is_dirty());
}

#[test]
fn button_presses() {
    let mut w = window(ButtonDemo::new());
    for (button, text) in [
        (ButtonId::Select, "Select"),
        (ButtonId::Up, "Up"),
        (ButtonId::Down, "Down"),
    ] {
        assert!(w.dispatch(HostEvent::Click(button)));
        assert_eq!(w.handlers().text(), Some(text));

        let mut rec = Recorder::new();
        w.render(&mut rec);
        assert_eq!(rec.last_text(), Some(text));
    }
}

#[test]
fn teardown_stops_the_feed() {
    let mut w = window(AttitudeIndicator::new());
    feed(&mut w, RawSample::new(160, 0, 100), 1);
    let before = *w.handlers().attitude();

    w.unload();
    assert_eq!(w.state(), Lifecycle::TornDown);
    assert!(w.services().accel().is_none());

    assert_eq!(feed(&mut w, RawSample::new(-800, 0, -900), 3), 0);
    assert!(!w.deliver_batch(&[RawSample::new(1, 2, 3); 5]));
    assert_eq!(*w.handlers().attitude(), before);
    assert!(!w.is_dirty());
    assert!(!w.render(&mut Recorder::new()));

    // A fresh load resubscribes.
    w.load();
    assert_eq!(feed(&mut w, RawSample::new(0, 0, 0), 1), 1);
}
