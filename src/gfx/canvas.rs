// AttitudeWatch - embedded-graphics backend
//
// Adapts any infallible BinaryColor draw target (the frame buffer on the
// watch) to the stateful `GraphicsContext` the renderers use.

use core::convert::Infallible;

use embedded_graphics::mono_font::{ascii::FONT_7X13, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, CornerRadii, Line, PrimitiveStyle, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::{Color, CornerMask, GraphicsContext};

pub struct Canvas<'a, D> {
    target: &'a mut D,
    fill: Color,
    stroke: Color,
    stroke_width: u16,
}

impl<'a, D> Canvas<'a, D>
where
    D: DrawTarget<Color = BinaryColor, Error = Infallible>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            fill: Color::Black,
            stroke: Color::Black,
            stroke_width: 1,
        }
    }

    fn stroke_style(&self) -> PrimitiveStyle<BinaryColor> {
        PrimitiveStyle::with_stroke(self.stroke.into(), self.stroke_width as u32)
    }
}

fn infallible(r: Result<(), Infallible>) {
    r.unwrap_or_else(|e| match e {})
}

impl<D> GraphicsContext for Canvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor, Error = Infallible>,
{
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_stroke_width(&mut self, width: u16) {
        self.stroke_width = width;
    }

    fn fill_rect(&mut self, rect: Rectangle, corner_radius: u16, corner_mask: CornerMask) {
        let style = PrimitiveStyle::with_fill(self.fill.into());
        if corner_radius == 0 || corner_mask == CornerMask::NONE {
            infallible(rect.into_styled(style).draw(&mut *self.target));
            return;
        }

        let r = Size::new_equal(corner_radius as u32);
        let pick = |corner| if corner_mask.contains(corner) { r } else { Size::zero() };
        let radii = CornerRadii {
            top_left: pick(CornerMask::TOP_LEFT),
            top_right: pick(CornerMask::TOP_RIGHT),
            bottom_right: pick(CornerMask::BOTTOM_RIGHT),
            bottom_left: pick(CornerMask::BOTTOM_LEFT),
        };
        infallible(
            RoundedRectangle::new(rect, radii)
                .into_styled(style)
                .draw(&mut *self.target),
        );
    }

    fn draw_line(&mut self, p1: Point, p2: Point) {
        infallible(Line::new(p1, p2).into_styled(self.stroke_style()).draw(&mut *self.target));
    }

    fn draw_circle(&mut self, center: Point, radius: u16) {
        // The stroke straddles the nominal radius.
        let diameter = 2 * radius as u32 + 1;
        infallible(
            Circle::with_center(center, diameter)
                .into_styled(self.stroke_style())
                .draw(&mut *self.target),
        );
    }

    fn draw_text(&mut self, text: &str, bounds: Rectangle, alignment: Alignment) {
        let character_style = MonoTextStyle::new(&FONT_7X13, self.stroke.into());
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Middle)
            .build();
        let x = match alignment {
            Alignment::Left => bounds.top_left.x,
            Alignment::Center => bounds.center().x,
            Alignment::Right => bounds.top_left.x + bounds.size.width as i32 - 1,
        };
        let anchor = Point::new(x, bounds.center().y);
        infallible(
            Text::with_text_style(text, anchor, character_style, text_style)
                .draw(&mut *self.target)
                .map(|_| ()),
        );
    }
}
