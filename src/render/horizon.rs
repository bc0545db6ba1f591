// AttitudeWatch - Horizon renderer
//
// The moving part of the instrument: horizon line, radial pitch rays and the
// pitch ladder, all rotated by roll about a point shifted by pitch.  Expects
// a white field and leaves the stroke colour black.

use core::f32::consts::PI;

use crate::attitude::{Attitude, DisplayParams};
use crate::gfx::geometry::{angled_line, angled_offset_line};
use crate::gfx::{Color, GraphicsContext};

/// Multiples of pi/6 off the horizon that get a radial ray.  The vertical
/// (k = 3) is left out.
const RAY_STEPS: [i16; 4] = [1, 2, 4, 5];

/// (offset, length) multipliers of the ladder bars drawn toward `roll + pi`.
const LADDER_REVERSE: [(i16, i16); 5] = [(-1, 1), (-2, 2), (1, 1), (2, 2), (-3, 3)];
/// (offset, length) multipliers of the ladder bars drawn toward `roll`.
const LADDER_FORWARD: [(i16, i16); 5] = [(1, 1), (2, 2), (3, 3), (-1, 1), (-2, 2)];

pub fn draw_horizon<G: GraphicsContext + ?Sized>(
    ctx: &mut G,
    params: &DisplayParams,
    attitude: &Attitude,
) {
    let angle = attitude.roll_rad;
    let cx = params.center_x;
    let cy = attitude.horizon_y(params);
    let reach = params.diameter as i16;

    ctx.set_stroke_color(Color::Black);

    ctx.set_stroke_width(2);
    angled_line(ctx, angle, cx, cy, 0, reach);
    angled_line(ctx, angle + PI, cx, cy, 0, reach);

    ctx.set_stroke_width(1);
    for k in RAY_STEPS {
        angled_line(ctx, angle + k as f32 * PI / 6.0, cx, cy, 0, reach);
    }

    let line_offset = (params.diameter / 8) as i16;
    let line_width = (params.diameter / 24) as i16;
    for (offset, length) in LADDER_REVERSE {
        angled_offset_line(ctx, angle + PI, cx, cy, length * line_width, offset * line_offset);
    }
    for (offset, length) in LADDER_FORWARD {
        angled_offset_line(ctx, angle, cx, cy, length * line_width, offset * line_offset);
    }
}
