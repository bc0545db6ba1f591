// AttitudeWatch - UI Task
//
// Owns the loaded window, the frame buffer, the LCD and the button input
// manager.  This is the cooperative event loop: every handler runs here, one
// at a time, and a frame is composed and flushed only when a handler marked
// the canvas dirty.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver};

use attitude_watch::config::*;
use attitude_watch::gfx::{Canvas, Framebuffer};
use attitude_watch::input::InputManager;
use attitude_watch::{HostEvent, Window, WindowHandlers};

use crate::drivers::sharp_lcd::SharpLcd;

pub type ButtonPins = [PinDriver<'static, AnyIOPin, Input>; 3];

pub fn ui_task<H: WindowHandlers>(
    mut window: Window<H>,
    mut display: SharpLcd,
    buttons: ButtonPins,
    ui_rx: Receiver<HostEvent>,
    ui_tx: Sender<HostEvent>,
) {
    log::info!("UI task started");

    let mut input = InputManager::new(ui_tx);
    let mut framebuffer = Framebuffer::new();
    let poll_interval = Duration::from_millis(UI_POLL_INTERVAL_MS);
    let vcom_interval = Duration::from_millis(VCOM_TOGGLE_MS);
    let mut last_vcom = Instant::now();

    loop {
        let now = Instant::now();

        // 1. Poll the buttons (active LOW with pull-up).
        input.update(
            [buttons[0].is_low(), buttons[1].is_low(), buttons[2].is_low()],
            now,
        );

        // 2. Drain all pending events (non-blocking).
        while let Ok(event) = ui_rx.try_recv() {
            window.dispatch(event);
        }

        // 3. Redraw if anything changed.
        if window.is_dirty() {
            window.render(&mut Canvas::new(&mut framebuffer));
            if let Err(e) = display.flush(&framebuffer) {
                log::warn!("LCD flush failed: {}", e);
            }
        }

        // 4. Keep the panel's polarity alternating.
        if now.duration_since(last_vcom) >= vcom_interval {
            last_vcom = now;
            if let Err(e) = display.toggle_vcom() {
                log::warn!("VCOM toggle failed: {}", e);
            }
        }

        thread::sleep(poll_interval);
    }
}
