//! A surface that records draw calls instead of painting them.
//!
//! Scenes are verified against the recorded command list: counts of buds,
//! branch transforms, paint order. Two recordings of the same frame compare
//! equal with `==`.

use crate::math::{Affine, Vec2};
use super::paint::{Color, Paint};
use super::surface::{Rect, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        rect: Rect,
    },
    FillRect {
        transform: Affine,
        rect: Rect,
        paint: Paint,
    },
    FillCircle {
        transform: Affine,
        center: Vec2,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        transform: Affine,
        center: Vec2,
        radius: f64,
        color: Color,
        line_width: f64,
    },
    StrokeLines {
        transform: Affine,
        segments: Vec<(Vec2, Vec2)>,
        color: Color,
        line_width: f64,
    },
    FillPolygon {
        transform: Affine,
        points: Vec<Vec2>,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Filled rectangles, in paint order
    pub fn rects(&self) -> impl Iterator<Item = (&Affine, &Rect, &Paint)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { transform, rect, paint } => Some((transform, rect, paint)),
            _ => None,
        })
    }

    /// Filled circles, in paint order
    pub fn circles(&self) -> impl Iterator<Item = (&Affine, Vec2, f64, Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle { transform, center, radius, color } => {
                Some((transform, *center, *radius, *color))
            }
            _ => None,
        })
    }

    pub fn circles_with_color(&self, color: Color) -> usize {
        self.circles().filter(|(_, _, _, c)| *c == color).count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear { rect });
    }

    fn fill_rect(&mut self, transform: &Affine, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            transform: *transform,
            rect,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            transform: *transform,
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            transform: *transform,
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_lines(&mut self, transform: &Affine, segments: &[(Vec2, Vec2)], color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeLines {
            transform: *transform,
            segments: segments.to_vec(),
            color,
            line_width,
        });
    }

    fn fill_polygon(&mut self, transform: &Affine, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            transform: *transform,
            points: points.to_vec(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut rec = Recorder::new();
        rec.clear(Rect::new(0.0, 0.0, 10.0, 10.0));
        rec.fill_circle(&Affine::IDENTITY, Vec2::ZERO, 2.0, Color::RED);
        rec.fill_rect(&Affine::IDENTITY, Rect::new(0.0, 0.0, 1.0, 1.0), &Color::WHITE.into());

        assert_eq!(rec.len(), 3);
        assert!(matches!(rec.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(rec.circles_with_color(Color::RED), 1);
        assert_eq!(rec.rects().count(), 1);
    }
}
