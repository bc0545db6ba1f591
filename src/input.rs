// AttitudeWatch - Button Input Manager
//
// Debounced handler for the three buttons.  A press followed by a release
// emits one single click into the UI channel.  Designed to be polled at
// ~100 Hz from the UI task; pin reads happen in the caller so the state
// machine runs anywhere.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::config::*;
use crate::events::{ButtonId, HostEvent};

#[derive(Debug, Clone, Copy)]
struct Debouncer {
    last_raw: bool,
    last_debounce: Instant,
    button_down: bool,
}

impl Debouncer {
    fn new(now: Instant) -> Self {
        Self {
            last_raw: false,
            last_debounce: now,
            button_down: false,
        }
    }

    /// Feed the raw level (`true` = pressed).  Returns `true` on the
    /// debounced release that completes a click.
    fn update(&mut self, pressed: bool, now: Instant) -> bool {
        if pressed != self.last_raw {
            self.last_debounce = now;
        }
        self.last_raw = pressed;

        if now.duration_since(self.last_debounce) < Duration::from_millis(DEBOUNCE_MS) {
            // Signal still bouncing - wait.
            return false;
        }

        if pressed && !self.button_down {
            self.button_down = true;
        } else if !pressed && self.button_down {
            self.button_down = false;
            return true;
        }
        false
    }
}

pub struct InputManager {
    buttons: [Debouncer; 3],
    ui_tx: Sender<HostEvent>,
}

impl InputManager {
    pub fn new(ui_tx: Sender<HostEvent>) -> Self {
        let now = Instant::now();
        Self {
            buttons: [Debouncer::new(now); 3],
            ui_tx,
        }
    }

    /// Call every ~10 ms with the raw levels, indexed by `ButtonId::index`.
    pub fn update(&mut self, pressed: [bool; 3], now: Instant) {
        for button in ButtonId::ALL {
            let i = button.index();
            if self.buttons[i].update(pressed[i], now) {
                let _ = self.ui_tx.send(HostEvent::Click(button));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn ms(t0: Instant, n: u64) -> Instant {
        t0 + Duration::from_millis(n)
    }

    #[test]
    fn clean_press_and_release_clicks_once() {
        let (tx, rx) = mpsc::channel();
        let mut input = InputManager::new(tx);
        let t0 = Instant::now();

        let mut t = 0;
        while t <= 200 {
            let down = (20..120).contains(&t);
            input.update([false, down, false], ms(t0, t));
            t += 10;
        }
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events, vec![HostEvent::Click(ButtonId::Up)]);
    }

    #[test]
    fn bounce_shorter_than_debounce_is_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut input = InputManager::new(tx);
        let t0 = Instant::now();

        for t in (0..300).step_by(10) {
            // 20 ms glitch on Select only
            let glitch = (100..120).contains(&t);
            input.update([glitch, false, false], ms(t0, t));
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn buttons_are_independent() {
        let (tx, rx) = mpsc::channel();
        let mut input = InputManager::new(tx);
        let t0 = Instant::now();

        for t in (0..400).step_by(10) {
            let select = (0..100).contains(&t);
            let down = (150..260).contains(&t);
            input.update([select, false, down], ms(t0, t));
        }
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![HostEvent::Click(ButtonId::Select), HostEvent::Click(ButtonId::Down)]
        );
    }
}
