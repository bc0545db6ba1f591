// AttitudeWatch - 1 bpp frame buffer
//
// Laid out the way the memory LCD wants its line data: 18 bytes per row,
// least significant bit is the leftmost pixel, a set bit is a white
// (reflective) pixel.  Frames are composed here, then flushed whole.

use core::convert::Infallible;
use core::fmt;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{DISPLAY_BUFFER_SIZE, LINE_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct Framebuffer {
    bits: [u8; DISPLAY_BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// A blank (all white) frame.
    pub fn new() -> Self {
        Self {
            bits: [0xFF; DISPLAY_BUFFER_SIZE],
        }
    }

    fn index(p: Point) -> Option<(usize, u8)> {
        if p.x < 0 || p.y < 0 || p.x >= SCREEN_WIDTH as i32 || p.y >= SCREEN_HEIGHT as i32 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        Some((y * LINE_BYTES + x / 8, 1 << (x % 8)))
    }

    /// Colour at `p`, `None` outside the panel.
    pub fn pixel(&self, p: Point) -> Option<BinaryColor> {
        Self::index(p).map(|(i, mask)| {
            if self.bits[i] & mask == 0 {
                BinaryColor::On
            } else {
                BinaryColor::Off
            }
        })
    }

    fn set_pixel(&mut self, p: Point, color: BinaryColor) {
        if let Some((i, mask)) = Self::index(p) {
            match color {
                BinaryColor::On => self.bits[i] &= !mask,
                BinaryColor::Off => self.bits[i] |= mask,
            }
        }
    }

    /// Raw line data for row `y` (0-based).
    pub fn row(&self, y: usize) -> &[u8] {
        &self.bits[y * LINE_BYTES..(y + 1) * LINE_BYTES]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.bits.chunks_exact(LINE_BYTES)
    }

    /// Number of ink pixels in the frame.
    pub fn ink_count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_zeros()).sum()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            self.set_pixel(p, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0x00,
            BinaryColor::Off => 0xFF,
        };
        self.bits.fill(fill);
        Ok(())
    }
}

/// ASCII preview, `#` for ink.
impl fmt::Display for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..SCREEN_HEIGHT as i32 {
            for x in 0..SCREEN_WIDTH as i32 {
                let c = match self.pixel(Point::new(x, y)) {
                    Some(BinaryColor::On) => '#',
                    _ => ' ',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
