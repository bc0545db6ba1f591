// AttitudeWatch - Button demo
//
// A status line that names the last button clicked, or reports a shake when
// a batch mean goes past 2 g on any axis.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use crate::config::*;
use crate::events::{ButtonId, RawSample, SamplingRate};
use crate::filter;
use crate::gfx::GraphicsContext;
use crate::render::{self, TextLayer};
use crate::window::{Services, WindowHandlers};

pub const PROMPT_TEXT: &str = "Press a button";
pub const SHAKE_TEXT: &str = "Shake detected!";

#[derive(Debug, Default)]
pub struct ButtonDemo {
    bounds: Size,
    text_layer: Option<TextLayer>,
}

impl ButtonDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status line, `None` while unloaded.
    pub fn text(&self) -> Option<&'static str> {
        self.text_layer.as_ref().map(TextLayer::text)
    }

    fn show(&mut self, text: &'static str, services: &mut Services) {
        if let Some(layer) = self.text_layer.as_mut() {
            if layer.set_text(text) {
                services.mark_dirty();
            }
        }
    }
}

impl WindowHandlers for ButtonDemo {
    fn load(&mut self, bounds: Size, services: &mut Services) {
        let mut layer = TextLayer::new(Rectangle::new(
            Point::new(0, TEXT_LAYER_Y),
            Size::new(bounds.width, TEXT_LAYER_HEIGHT),
        ));
        layer.set_text(PROMPT_TEXT);
        layer.set_alignment(Alignment::Center);
        self.bounds = bounds;
        self.text_layer = Some(layer);

        for button in ButtonId::ALL {
            services.subscribe_click(button);
        }
        services.subscribe_accel(ACCEL_SAMPLES_PER_UPDATE, SamplingRate::Hz100);
    }

    fn unload(&mut self, services: &mut Services) {
        services.unsubscribe_accel();
        services.unsubscribe_clicks();
        self.text_layer = None;
    }

    fn on_accel(&mut self, batch: &[RawSample], services: &mut Services) {
        let Some(mean) = filter::aggregate(batch) else {
            return;
        };
        if mean.exceeds(SHAKE_THRESHOLD_MG) {
            log::info!("Shake detected ({}, {}, {})", mean.ax, mean.ay, mean.az);
            self.show(SHAKE_TEXT, services);
        }
    }

    fn on_click(&mut self, button: ButtonId, services: &mut Services) {
        self.show(button.label(), services);
    }

    fn draw(&mut self, ctx: &mut dyn GraphicsContext) {
        let Some(layer) = self.text_layer.as_ref() else {
            return;
        };
        render::clear(ctx, self.bounds);
        layer.draw(ctx);
    }
}
