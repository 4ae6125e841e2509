use crate::math::{Affine, Vec2};
use super::paint::{Color, Paint};

/// Axis-aligned rectangle in a shape's local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
            Vec2::new(self.x, self.y + self.height),
        ]
    }
}

/// A 2D drawing target.
///
/// Every primitive carries the full transform it is drawn under, so a
/// surface never keeps a transform stack between calls and a caller can
/// never forget to restore one.
pub trait Surface {
    /// Reset a device-space region to transparent
    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, transform: &Affine, rect: Rect, paint: &Paint);

    fn fill_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color);

    fn stroke_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color, line_width: f64);

    /// Stroke a batch of independent line segments with one style
    fn stroke_lines(&mut self, transform: &Affine, segments: &[(Vec2, Vec2)], color: Color, line_width: f64);

    /// Fill a closed polygon
    fn fill_polygon(&mut self, transform: &Affine, points: &[Vec2], color: Color);
}
