// AttitudeWatch - Renderers
//
// Everything that issues graphics primitives for a frame lives here.  Each
// renderer sets the style it needs; none of them keeps state between frames.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::gfx::{Color, CornerMask, GraphicsContext};

pub mod bezel;
pub mod horizon;
pub mod text;

pub use bezel::{draw_bezel, draw_crown};
pub use horizon::draw_horizon;
pub use text::TextLayer;

/// Paint the whole canvas white.
pub fn clear<G: GraphicsContext + ?Sized>(ctx: &mut G, bounds: Size) {
    ctx.set_fill_color(Color::White);
    ctx.fill_rect(Rectangle::new(Point::zero(), bounds), 0, CornerMask::NONE);
}
