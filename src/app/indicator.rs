// AttitudeWatch - Attitude indicator (frame controller)
//
// Sample batch -> aggregate -> derive -> mark dirty.  Draw -> clear ->
// horizon -> crown -> bezel.  The draw handler is the only code path that
// touches the graphics context.

use embedded_graphics::geometry::Size;

use crate::attitude::{Attitude, DisplayParams};
use crate::config::ACCEL_SAMPLES_PER_UPDATE;
use crate::events::{RawSample, SamplingRate};
use crate::gfx::GraphicsContext;
use crate::render;
use crate::window::{Services, WindowHandlers};

/// Canvas the instrument is drawn on; exists between load and unload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CanvasLayer {
    bounds: Size,
    params: DisplayParams,
}

#[derive(Debug, Default)]
pub struct AttitudeIndicator {
    canvas: Option<CanvasLayer>,
    attitude: Attitude,
    tuning: Option<(u16, u16, u16)>,
}

impl AttitudeIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override diameter, border width and pitch sensitivity.
    pub fn with_tuning(diameter: u16, border_width: u16, sensitivity: u16) -> Self {
        Self {
            tuning: Some((diameter, border_width, sensitivity)),
            ..Self::default()
        }
    }

    pub fn attitude(&self) -> &Attitude {
        &self.attitude
    }

    /// `None` until the window is loaded.
    pub fn params(&self) -> Option<&DisplayParams> {
        self.canvas.as_ref().map(|c| &c.params)
    }

    pub fn horizon_y(&self) -> Option<i16> {
        self.params().map(|p| self.attitude.horizon_y(p))
    }
}

impl WindowHandlers for AttitudeIndicator {
    fn load(&mut self, bounds: Size, services: &mut Services) {
        let params = match self.tuning {
            Some((diameter, border, sensitivity)) => {
                DisplayParams::with_tuning(bounds, diameter, border, sensitivity)
            }
            None => DisplayParams::new(bounds),
        };
        log::info!(
            "Attitude indicator at ({}, {}), diameter {}",
            params.center_x,
            params.center_y,
            params.diameter
        );
        self.canvas = Some(CanvasLayer { bounds, params });
        services.subscribe_accel(ACCEL_SAMPLES_PER_UPDATE, SamplingRate::Hz100);
    }

    fn unload(&mut self, services: &mut Services) {
        // Unsubscribe first so no batch can observe a destroyed canvas.
        services.unsubscribe_accel();
        self.canvas = None;
    }

    fn on_accel(&mut self, batch: &[RawSample], services: &mut Services) {
        let Some(canvas) = self.canvas else {
            return;
        };
        if self.attitude.update(batch, canvas.params.sensitivity) {
            log::trace!(
                "roll {} deg, pitch {} px",
                self.attitude.roll_degrees(),
                self.attitude.pitch_px
            );
            services.mark_dirty();
        }
    }

    fn draw(&mut self, ctx: &mut dyn GraphicsContext) {
        let Some(canvas) = self.canvas else {
            return;
        };
        render::clear(ctx, canvas.bounds);
        render::draw_horizon(ctx, &canvas.params, &self.attitude);
        render::draw_crown(ctx, &canvas.params);
        render::draw_bezel(ctx, &canvas.params, &self.attitude);
    }
}
