// AttitudeWatch - Text layer
//
// A single line of static text in a fixed frame, like the layer the button
// demo uses for its status line.

use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use crate::gfx::{Color, GraphicsContext};

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    frame: Rectangle,
    text: &'static str,
    alignment: Alignment,
}

impl TextLayer {
    pub fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            text: "",
            alignment: Alignment::Left,
        }
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Returns `true` when the content actually changed.
    pub fn set_text(&mut self, text: &'static str) -> bool {
        let changed = self.text != text;
        self.text = text;
        changed
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn draw<G: GraphicsContext + ?Sized>(&self, ctx: &mut G) {
        if self.text.is_empty() {
            return;
        }
        ctx.set_stroke_color(Color::Black);
        ctx.draw_text(self.text, self.frame, self.alignment);
    }
}
