// AttitudeWatch - Window host
//
// Cooperative, single-threaded host for one full-screen window.  The UI loop
// feeds it raw events; the window batches accelerometer samples to the
// subscribed size, routes clicks to subscribed buttons and calls the draw
// handler when something marked the canvas dirty.
//
// Handlers never run concurrently, so application state needs no locking.

use embedded_graphics::geometry::Size;

use crate::config::MAX_SAMPLES_PER_UPDATE;
use crate::events::{ButtonId, HostEvent, RawSample, SamplingRate};
use crate::gfx::GraphicsContext;

// ---------------------------------------------------------------------------
// Services available to handlers
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelSubscription {
    pub samples_per_update: u32,
    pub rate: SamplingRate,
}

#[derive(Debug, Default)]
pub struct Services {
    accel: Option<AccelSubscription>,
    clicks: [bool; 3],
    dirty: bool,
}

impl Services {
    /// Deliver batches of `samples_per_update` readings (clamped to
    /// 1..=25) sampled at `rate`.
    pub fn subscribe_accel(&mut self, samples_per_update: u32, rate: SamplingRate) {
        let samples_per_update = samples_per_update.clamp(1, MAX_SAMPLES_PER_UPDATE);
        log::info!("Accelerometer subscribed: {} samples @ {} Hz", samples_per_update, rate.hz());
        self.accel = Some(AccelSubscription { samples_per_update, rate });
    }

    pub fn unsubscribe_accel(&mut self) {
        if self.accel.take().is_some() {
            log::info!("Accelerometer unsubscribed");
        }
    }

    pub fn accel(&self) -> Option<AccelSubscription> {
        self.accel
    }

    pub fn subscribe_click(&mut self, button: ButtonId) {
        self.clicks[button.index()] = true;
    }

    pub fn unsubscribe_clicks(&mut self) {
        self.clicks = [false; 3];
    }

    pub fn is_click_subscribed(&self, button: ButtonId) -> bool {
        self.clicks[button.index()]
    }

    /// Ask for a redraw at the next opportunity.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn has_subscriptions(&self) -> bool {
        self.accel.is_some() || self.clicks.iter().any(|&c| c)
    }
}

// ---------------------------------------------------------------------------
// Handler table
// ---------------------------------------------------------------------------
pub trait WindowHandlers {
    fn load(&mut self, bounds: Size, services: &mut Services);
    fn unload(&mut self, services: &mut Services);

    fn on_accel(&mut self, _batch: &[RawSample], _services: &mut Services) {}
    fn on_click(&mut self, _button: ButtonId, _services: &mut Services) {}

    /// The only place an app issues graphics primitives.
    fn draw(&mut self, ctx: &mut dyn GraphicsContext);
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialised,
    Running,
    TornDown,
}

pub struct Window<H> {
    handlers: H,
    services: Services,
    bounds: Size,
    state: Lifecycle,
    pending: Vec<RawSample>,
}

impl<H: WindowHandlers> Window<H> {
    pub fn new(handlers: H, bounds: Size) -> Self {
        Self {
            handlers,
            services: Services::default(),
            bounds,
            state: Lifecycle::Uninitialised,
            pending: Vec::with_capacity(MAX_SAMPLES_PER_UPDATE as usize),
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Rate the sensor feed must run at, while handlers hold a subscription.
    pub fn sampling_rate(&self) -> Option<SamplingRate> {
        self.services.accel.map(|sub| sub.rate)
    }

    pub fn load(&mut self) {
        if self.state == Lifecycle::Running {
            log::warn!("Window already loaded");
            return;
        }
        log::info!("Window load ({}x{})", self.bounds.width, self.bounds.height);
        self.handlers.load(self.bounds, &mut self.services);
        self.state = Lifecycle::Running;
        self.services.mark_dirty();
    }

    pub fn unload(&mut self) {
        if self.state != Lifecycle::Running {
            return;
        }
        log::info!("Window unload");
        self.handlers.unload(&mut self.services);

        // Nothing may reach a torn-down window.
        if self.services.has_subscriptions() {
            log::warn!("Handlers left subscriptions behind on unload; dropping them");
            self.services.unsubscribe_accel();
            self.services.unsubscribe_clicks();
        }
        self.services.dirty = false;
        self.pending.clear();
        self.state = Lifecycle::TornDown;
    }

    /// Route one host event.  Returns `true` when a handler ran.
    pub fn dispatch(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::Sample(sample) => self.push_sample(sample),
            HostEvent::Click(button) => self.click(button),
        }
    }

    fn push_sample(&mut self, sample: RawSample) -> bool {
        let Some(sub) = self.services.accel() else {
            self.pending.clear();
            return false;
        };
        self.pending.push(sample);
        if self.pending.len() < sub.samples_per_update as usize {
            return false;
        }

        let batch = core::mem::take(&mut self.pending);
        let delivered = self.deliver_batch(&batch);
        self.pending = batch;
        self.pending.clear();
        delivered
    }

    /// Hand a complete batch straight to the accelerometer handler.
    pub fn deliver_batch(&mut self, batch: &[RawSample]) -> bool {
        if self.state != Lifecycle::Running || self.services.accel.is_none() {
            log::trace!("Dropping {} samples: no subscriber", batch.len());
            return false;
        }
        self.handlers.on_accel(batch, &mut self.services);
        true
    }

    fn click(&mut self, button: ButtonId) -> bool {
        if self.state != Lifecycle::Running || !self.services.is_click_subscribed(button) {
            return false;
        }
        log::debug!("Click: {:?}", button);
        self.handlers.on_click(button, &mut self.services);
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.state == Lifecycle::Running && self.services.dirty
    }

    /// Run the draw handler.  Does nothing unless the window is loaded.
    pub fn render(&mut self, ctx: &mut dyn GraphicsContext) -> bool {
        if self.state != Lifecycle::Running {
            return false;
        }
        self.handlers.draw(ctx);
        self.services.dirty = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::Recorder;

    #[derive(Default)]
    struct Recording {
        batches: Vec<Vec<RawSample>>,
        clicks: Vec<ButtonId>,
        draws: usize,
        leak_subscription: bool,
    }

    impl WindowHandlers for Recording {
        fn load(&mut self, _bounds: Size, services: &mut Services) {
            services.subscribe_accel(3, SamplingRate::Hz100);
            services.subscribe_click(ButtonId::Up);
        }

        fn unload(&mut self, services: &mut Services) {
            if !self.leak_subscription {
                services.unsubscribe_accel();
                services.unsubscribe_clicks();
            }
        }

        fn on_accel(&mut self, batch: &[RawSample], services: &mut Services) {
            self.batches.push(batch.to_vec());
            services.mark_dirty();
        }

        fn on_click(&mut self, button: ButtonId, _services: &mut Services) {
            self.clicks.push(button);
        }

        fn draw(&mut self, _ctx: &mut dyn GraphicsContext) {
            self.draws += 1;
        }
    }

    fn sample(v: i16) -> HostEvent {
        HostEvent::Sample(RawSample::new(v, v, v))
    }

    #[test]
    fn samples_are_batched_to_subscription() {
        let mut w = Window::new(Recording::default(), Size::new(144, 168));
        w.load();
        let delivered: Vec<bool> = (1..=7).map(|v| w.dispatch(sample(v))).collect();
        assert_eq!(delivered, vec![false, false, true, false, false, true, false]);
        assert_eq!(w.handlers().batches.len(), 2);
        assert_eq!(w.handlers().batches[1][0].x, 4);
    }

    #[test]
    fn events_before_load_are_dropped() {
        let mut w = Window::new(Recording::default(), Size::new(144, 168));
        for v in 0..6 {
            assert!(!w.dispatch(sample(v)));
        }
        assert!(!w.dispatch(HostEvent::Click(ButtonId::Up)));
        assert!(!w.render(&mut Recorder::new()));
        assert_eq!(w.state(), Lifecycle::Uninitialised);
    }

    #[test]
    fn only_subscribed_buttons_reach_handler() {
        let mut w = Window::new(Recording::default(), Size::new(144, 168));
        w.load();
        assert!(!w.dispatch(HostEvent::Click(ButtonId::Select)));
        assert!(w.dispatch(HostEvent::Click(ButtonId::Up)));
        assert_eq!(w.handlers().clicks, vec![ButtonId::Up]);
    }

    #[test]
    fn sampling_rate_follows_subscription() {
        let mut w = Window::new(Recording::default(), Size::new(144, 168));
        assert_eq!(w.sampling_rate(), None);
        w.load();
        assert_eq!(w.sampling_rate(), Some(SamplingRate::Hz100));
        w.unload();
        assert_eq!(w.sampling_rate(), None);
    }

    #[test]
    fn load_marks_dirty_and_render_clears() {
        let mut w = Window::new(Recording::default(), Size::new(144, 168));
        w.load();
        assert!(w.is_dirty());
        assert!(w.render(&mut Recorder::new()));
        assert!(!w.is_dirty());
        assert_eq!(w.handlers().draws, 1);
    }

    #[test]
    fn unload_stops_delivery_even_if_handler_forgets() {
        let handlers = Recording {
            leak_subscription: true,
            ..Recording::default()
        };
        let mut w = Window::new(handlers, Size::new(144, 168));
        w.load();
        w.dispatch(sample(1));
        w.unload();
        assert_eq!(w.state(), Lifecycle::TornDown);
        assert!(w.services().accel().is_none());
        for v in 0..9 {
            assert!(!w.dispatch(sample(v)));
        }
        assert!(!w.deliver_batch(&[RawSample::default()]));
        assert!(w.handlers().batches.is_empty());
        assert!(!w.is_dirty());
    }

    #[test]
    fn reload_after_teardown() {
        let mut w = Window::new(Recording::default(), Size::new(144, 168));
        w.load();
        w.unload();
        w.load();
        assert_eq!(w.state(), Lifecycle::Running);
        assert!(w.services().accel().is_some());
    }

    #[test]
    fn subscription_size_is_clamped() {
        let mut s = Services::default();
        s.subscribe_accel(0, SamplingRate::Hz10);
        assert_eq!(s.accel().unwrap().samples_per_update, 1);
        s.subscribe_accel(1000, SamplingRate::Hz10);
        assert_eq!(s.accel().unwrap().samples_per_update, MAX_SAMPLES_PER_UPDATE);
    }
}
