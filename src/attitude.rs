// AttitudeWatch - Attitude Deriver
//
// Maps the smoothed accelerometer triple to the two scalars the instrument
// draws from.  Roll comes from lateral acceleration only and az is reused as
// a pixel offset rather than a true pitch angle.

use core::f32::consts::PI;

use embedded_graphics::geometry::Size;

use crate::config::*;
use crate::filter::{self, Smoothed};
use crate::events::RawSample;

// ---------------------------------------------------------------------------
// Display parameters (fixed after window load)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParams {
    pub center_x: i16,
    pub center_y: i16,
    pub diameter: u16,
    pub border_width: u16,
    pub sensitivity: u16,
}

impl DisplayParams {
    /// Centre the instrument on a canvas of `bounds`, with the stock tuning.
    pub fn new(bounds: Size) -> Self {
        Self::with_tuning(bounds, INSTRUMENT_DIAMETER, BORDER_WIDTH, PITCH_SENSITIVITY)
    }

    /// The diameter is capped to the `i16` range and the border to the
    /// radius, so `border_offset()` never goes negative.
    pub fn with_tuning(bounds: Size, diameter: u16, border_width: u16, sensitivity: u16) -> Self {
        let diameter = diameter.min(i16::MAX as u16);
        Self {
            center_x: (bounds.width / 2) as i16,
            center_y: (bounds.height / 2) as i16,
            diameter,
            border_width: border_width.min(diameter / 2),
            // A zero divisor would trap in the sample handler.
            sensitivity: sensitivity.max(1),
        }
    }

    pub fn radius(&self) -> i16 {
        (self.diameter / 2) as i16
    }

    /// Radius of the thin inner boundary circle; bezel marks start here.
    pub fn border_offset(&self) -> i16 {
        self.radius() - self.border_width as i16 + 1
    }
}

// ---------------------------------------------------------------------------
// Attitude
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attitude {
    pub ax: i16,
    pub ay: i16,
    pub az: i16,
    pub roll_rad: f32,
    pub pitch_px: i16,
}

impl Attitude {
    pub fn from_smoothed(s: Smoothed, sensitivity: u16) -> Self {
        Self {
            ax: s.ax,
            ay: s.ay,
            az: s.az,
            roll_rad: roll_degrees(s.ax) as f32 * PI / 180.0,
            pitch_px: pitch_offset(s.az, sensitivity),
        }
    }

    /// Fold one batch into the attitude.  Returns `false` (and leaves the
    /// attitude untouched) when the batch is empty.
    pub fn update(&mut self, batch: &[RawSample], sensitivity: u16) -> bool {
        match filter::aggregate(batch) {
            Some(s) => {
                *self = Self::from_smoothed(s, sensitivity);
                true
            }
            None => {
                log::trace!("Empty accelerometer batch skipped");
                false
            }
        }
    }

    pub fn roll_degrees(&self) -> i16 {
        roll_degrees(self.ax)
    }

    /// Screen row the horizon passes through at the instrument centre.
    pub fn horizon_y(&self, params: &DisplayParams) -> i16 {
        params.center_y.saturating_add(self.pitch_px)
    }
}

/// Negated so the screen rotates with the physical tilt.
pub fn roll_degrees(ax: i16) -> i16 {
    -(ax / ROLL_SCALE)
}

pub fn pitch_offset(az: i16, sensitivity: u16) -> i16 {
    (az as i32 / sensitivity.max(1) as i32) as i16
}
