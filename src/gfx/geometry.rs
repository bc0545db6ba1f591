// AttitudeWatch - Geometry kernel
//
// Pure helpers for polar offsets.  Products are truncated to i16; anything
// off-canvas is left to the draw target to clip.

use embedded_graphics::prelude::Point;

use super::GraphicsContext;

/// Move `(x, y)` by `distance` pixels in direction `angle` (radians, y down).
pub fn translate(x: i16, y: i16, angle: f32, distance: i16) -> (i16, i16) {
    let d = distance as f32;
    (
        x.wrapping_add((d * angle.cos()) as i16),
        y.wrapping_add((d * angle.sin()) as i16),
    )
}

fn point(xy: (i16, i16)) -> Point {
    Point::new(xy.0 as i32, xy.1 as i32)
}

/// Segment along `angle` from `start` to `start + length` pixels out of
/// `(sx, sy)`.
pub fn angled_line<G: GraphicsContext + ?Sized>(
    ctx: &mut G,
    angle: f32,
    sx: i16,
    sy: i16,
    start: i16,
    length: i16,
) {
    let from = translate(sx, sy, angle, start);
    let to = translate(sx, sy, angle, start.saturating_add(length));
    ctx.draw_line(point(from), point(to));
}

/// Segment of `length` along `angle`, starting `offset` pixels to the side
/// of `(sx, sy)` (measured along `angle + pi/2`).
pub fn angled_offset_line<G: GraphicsContext + ?Sized>(
    ctx: &mut G,
    angle: f32,
    sx: i16,
    sy: i16,
    length: i16,
    offset: i16,
) {
    let (ox, oy) = translate(sx, sy, angle + core::f32::consts::FRAC_PI_2, offset);
    angled_line(ctx, angle, ox, oy, 0, length);
}
