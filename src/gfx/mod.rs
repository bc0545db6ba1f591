// AttitudeWatch - Graphics context
//
// The renderers talk to a small stateful drawing sink: pick colours and a
// stroke width, then issue primitives.  `Canvas` backs it with any
// embedded-graphics draw target; `Recorder` keeps a log of primitives.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

pub mod canvas;
pub mod framebuffer;
pub mod geometry;
pub mod recorder;

pub use canvas::Canvas;
pub use framebuffer::Framebuffer;
pub use recorder::{DrawOp, Recorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

/// Ink is `On`; the reflective panel background is `Off`.
impl From<Color> for BinaryColor {
    fn from(c: Color) -> Self {
        match c {
            Color::Black => BinaryColor::On,
            Color::White => BinaryColor::Off,
        }
    }
}

/// Which corners of a filled rectangle get rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerMask(u8);

impl CornerMask {
    pub const NONE: Self = Self(0);
    pub const TOP_LEFT: Self = Self(1 << 0);
    pub const TOP_RIGHT: Self = Self(1 << 1);
    pub const BOTTOM_LEFT: Self = Self(1 << 2);
    pub const BOTTOM_RIGHT: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for CornerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Drawing sink handed to a draw callback for the duration of one frame.
///
/// Primitives have no error return: anything falling outside the canvas is
/// clipped by the backend.
pub trait GraphicsContext {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: u16);

    fn fill_rect(&mut self, rect: Rectangle, corner_radius: u16, corner_mask: CornerMask);
    fn draw_line(&mut self, p1: Point, p2: Point);
    fn draw_circle(&mut self, center: Point, radius: u16);

    /// Draw `text` in the stroke colour inside `bounds`.
    fn draw_text(&mut self, text: &str, bounds: Rectangle, alignment: Alignment);
}
