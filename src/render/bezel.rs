// AttitudeWatch - Bezel renderer
//
// Fixed frame around the instrument face.  Drawn after the horizon so the
// mask rings hide everything the horizon paints outside the dial.

use core::f32::consts::PI;

use embedded_graphics::prelude::Point;

use crate::attitude::{Attitude, DisplayParams};
use crate::config::*;
use crate::gfx::geometry::angled_line;
use crate::gfx::{Color, GraphicsContext};

/// Coarse graduations, in multiples of pi/6.
const MAJOR_TICKS: [i16; 7] = [0, 6, 7, 8, 9, 10, 11];
/// Fine graduations either side of the top, in multiples of pi/18.
const MINOR_TICKS: [i16; 4] = [25, 26, 28, 29];

pub fn draw_bezel<G: GraphicsContext + ?Sized>(
    ctx: &mut G,
    params: &DisplayParams,
    attitude: &Attitude,
) {
    let centre = Point::new(params.center_x as i32, params.center_y as i32);
    let radius = params.radius() as u16;
    let border = params.border_width as i16;
    let border_offset = params.border_offset();

    // Outer mask
    ctx.set_stroke_color(Color::White);
    ctx.set_stroke_width(params.border_width.saturating_mul(2));
    ctx.draw_circle(centre, radius);
    ctx.set_stroke_color(Color::Black);
    ctx.set_stroke_width(MASK_RING_STROKE);
    ctx.draw_circle(centre, radius + MASK_RING_OFFSET);

    // Inner boundary
    ctx.set_stroke_width(1);
    ctx.draw_circle(centre, border_offset as u16);

    // Roll marks on the rim: the only part of the bezel that turns.
    ctx.set_stroke_width(2);
    for angle in [attitude.roll_rad, attitude.roll_rad + PI] {
        angled_line(ctx, angle, params.center_x, params.center_y, border_offset, border);
    }

    ctx.set_stroke_width(3);
    let major_len = (border as f32 * 0.6) as i16;
    for k in MAJOR_TICKS {
        let angle = k as f32 * PI / 6.0;
        angled_line(ctx, angle, params.center_x, params.center_y, border_offset, major_len);
    }

    ctx.set_stroke_width(2);
    let minor_len = (border as f32 * 0.4) as i16;
    for k in MINOR_TICKS {
        let angle = k as f32 * PI / 18.0;
        angled_line(ctx, angle, params.center_x, params.center_y, border_offset, minor_len);
    }
}

/// Zero-roll index mark under the top of the rim.
pub fn draw_crown<G: GraphicsContext + ?Sized>(ctx: &mut G, params: &DisplayParams) {
    let apex = Point::new(
        params.center_x as i32,
        (params.center_y - params.radius() + CROWN_APEX_INSET) as i32,
    );
    let left = apex + Point::new(-CROWN_HALF_BASE as i32, CROWN_HEIGHT as i32);
    let right = apex + Point::new(CROWN_HALF_BASE as i32, CROWN_HEIGHT as i32);

    ctx.set_stroke_color(Color::Black);
    ctx.set_stroke_width(1);
    ctx.draw_line(apex, left);
    ctx.draw_line(left, right);
    ctx.draw_line(right, apex);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{DrawOp, Recorder};
    use embedded_graphics::prelude::Size;

    fn params() -> DisplayParams {
        DisplayParams::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn mask_rings_then_inner_boundary() {
        let mut rec = Recorder::new();
        draw_bezel(&mut rec, &params(), &Attitude::default());
        let circles: Vec<_> = rec.circles().collect();
        let c = Point::new(72, 84);
        assert_eq!(
            circles,
            vec![
                (c, 65, Color::White, 32),
                (c, 115, Color::Black, 100),
                (c, 50, Color::Black, 1),
            ]
        );
    }

    #[test]
    fn rim_marks_follow_roll() {
        let mut a = Attitude::default();
        a.roll_rad = PI / 2.0;
        let mut rec = Recorder::new();
        draw_bezel(&mut rec, &params(), &a);
        let lines: Vec<_> = rec.lines().collect();
        // Straight down, then straight up, 50..66 px from centre.
        assert_eq!(lines[0], (Point::new(72, 134), Point::new(72, 150)));
        assert_eq!(lines[1].0.y, 34);
        assert_eq!(lines[1].1.y, 18);
    }

    #[test]
    fn fixed_tick_counts_and_lengths() {
        let mut rec = Recorder::new();
        draw_bezel(&mut rec, &params(), &Attitude::default());
        let ticks: Vec<_> = rec
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { p1, p2, width, .. } => Some((*p1, *p2, *width)),
                _ => None,
            })
            .skip(2)
            .collect();
        assert_eq!(ticks.len(), 7 + 4);
        assert!(ticks[..7].iter().all(|t| t.2 == 3));
        assert!(ticks[7..].iter().all(|t| t.2 == 2));

        // Angle 0 tick: 9 px (0.6 * 16) starting on the inner boundary.
        assert_eq!(ticks[0].0, Point::new(72 + 50, 84));
        assert_eq!(ticks[0].1, Point::new(72 + 59, 84));
        // The 3pi/2 tick points straight up.
        assert_eq!(ticks[4].0.x, 72);
        assert!(ticks[4].1.y < ticks[4].0.y);
    }

    #[test]
    fn oversized_border_still_renders() {
        use crate::gfx::{Canvas, Framebuffer};

        let bounds = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        for p in [
            DisplayParams::with_tuning(bounds, 20, 16, 10),
            DisplayParams::with_tuning(bounds, 130, 40000, 10),
        ] {
            let mut rec = Recorder::new();
            draw_bezel(&mut rec, &p, &Attitude::default());
            let circles: Vec<_> = rec.circles().collect();
            assert_eq!(circles[0].3, 2 * p.border_width);
            assert_eq!(circles[2].1, 1);

            let mut fb = Framebuffer::new();
            draw_bezel(&mut Canvas::new(&mut fb), &p, &Attitude::default());
            assert!(fb.ink_count() > 0);
        }
    }

    #[test]
    fn crown_is_a_closed_triangle() {
        let mut rec = Recorder::new();
        draw_crown(&mut rec, &params());
        let lines: Vec<_> = rec.lines().collect();
        let apex = Point::new(72, 84 - 65 + 17);
        assert_eq!(
            lines,
            vec![
                (apex, Point::new(67, 46)),
                (Point::new(67, 46), Point::new(77, 46)),
                (Point::new(77, 46), apex),
            ]
        );
    }
}
