// AttitudeWatch - Host Simulator
//
// Runs the selected app through a scripted session on the host: level,
// roll, pitch, button clicks and a shake, then prints the last frame.

use std::io::Write;

use embedded_graphics::geometry::Size;

use crate::config::*;
use crate::gfx::{Canvas, Framebuffer};
use crate::{ButtonId, HostEvent, RawSample, Window, WindowHandlers};

enum Step {
    Hold(&'static str, RawSample, u32),
    Click(ButtonId),
}

const SCRIPT: &[Step] = &[
    Step::Hold("level", RawSample::new(0, 0, 0), 5),
    Step::Hold("roll 10 deg left", RawSample::new(160, 0, 0), 5),
    Step::Hold("pitch 10 px", RawSample::new(0, 0, 100), 5),
    Step::Click(ButtonId::Up),
    Step::Click(ButtonId::Down),
    Step::Click(ButtonId::Select),
    Step::Hold("shake", RawSample::new(2500, -300, 900), 1),
    Step::Hold("banked climb", RawSample::new(-320, 0, 150), 5),
];

pub fn run<H: WindowHandlers>(app: H, out: &mut impl Write) -> anyhow::Result<()> {
    let mut window = Window::new(app, Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut framebuffer = Framebuffer::new();
    let mut frames = 0u32;

    window.load();
    for step in SCRIPT {
        match step {
            Step::Hold(label, sample, batches) => {
                log::info!("{}: {} batches of {:?}", label, batches, sample);
                for _ in 0..batches * ACCEL_SAMPLES_PER_UPDATE {
                    window.dispatch(HostEvent::Sample(*sample));
                }
            }
            Step::Click(button) => {
                window.dispatch(HostEvent::Click(*button));
            }
        }
        if window.is_dirty() {
            window.render(&mut Canvas::new(&mut framebuffer));
            frames += 1;
        }
    }
    window.unload();

    log::info!("{} frames rendered", frames);
    write!(out, "{framebuffer}")?;
    out.flush()?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AttitudeIndicator, ButtonDemo};

    fn session<H: WindowHandlers>(app: H) -> String {
        let mut out = Vec::new();
        run(app, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_one_full_frame() {
        let frame = session(AttitudeIndicator::new());
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), SCREEN_HEIGHT as usize);
        assert!(rows.iter().all(|r| r.len() == SCREEN_WIDTH as usize));
        // Masked corner, white sky inside the dial.
        assert!(rows[0].starts_with('#'));
        assert!(rows.iter().any(|r| r.contains(' ')));
    }

    #[test]
    fn button_demo_session_prints_text() {
        let frame = session(ButtonDemo::new());
        assert_eq!(frame.lines().count(), SCREEN_HEIGHT as usize);
        assert!(frame.contains('#'));
    }
}
