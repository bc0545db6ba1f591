// AttitudeWatch - Recording graphics context
//
// Keeps every primitive with the style that was in effect when it was
// issued.  Used to inspect frames without a pixel backend.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use super::{Color, CornerMask, GraphicsContext};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rectangle,
        corner_radius: u16,
        corner_mask: CornerMask,
        color: Color,
    },
    Line {
        p1: Point,
        p2: Point,
        color: Color,
        width: u16,
    },
    Circle {
        center: Point,
        radius: u16,
        color: Color,
        width: u16,
    },
    Text {
        text: String,
        bounds: Rectangle,
        alignment: Alignment,
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub struct Recorder {
    fill: Color,
    stroke: Color,
    stroke_width: u16,
    ops: Vec<DrawOp>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            fill: Color::Black,
            stroke: Color::Black,
            stroke_width: 1,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Endpoints of every line, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { p1, p2, .. } => Some((*p1, *p2)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, u16, Color, u16)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, radius, color, width } => Some((*center, *radius, *color, *width)),
            _ => None,
        })
    }

    /// Most recent text primitive, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl GraphicsContext for Recorder {
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
        self.ops.push(DrawOp::FillRect {
            rect,
            corner_radius,
            corner_mask,
            color: self.fill,
        });
    }

    fn draw_line(&mut self, p1: Point, p2: Point) {
        self.ops.push(DrawOp::Line {
            p1,
            p2,
            color: self.stroke,
            width: self.stroke_width,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: u16) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: self.stroke,
            width: self.stroke_width,
        });
    }

    fn draw_text(&mut self, text: &str, bounds: Rectangle, alignment: Alignment) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            bounds,
            alignment,
            color: self.stroke,
        });
    }
}
