//! Coordinate-transform teaching grid.
//!
//! Each click adds one more transform to the drawing frame and eases it in
//! over two seconds. After the last level the next click returns to the
//! plain frame.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::animation::Tween;
use crate::math::{Affine, Vec2};
use crate::render::{Color, Rect, Surface};
use super::Animation;

pub const MAX_LEVEL: usize = 6;

/// Grid lines span this far from the origin in every direction
const GRID_EXTENT: f64 = 3000.0;
const ORIGIN_RADIUS: f64 = 20.0;
const ARROW: [Vec2; 3] = [Vec2::new(-20.0, 30.0), Vec2::new(20.0, 30.0), Vec2::new(0.0, 100.0)];

#[derive(Debug, Clone)]
pub struct GridScene {
    width: f64,
    height: f64,
    level: usize,
    tweens: [Tween; MAX_LEVEL],
}

impl GridScene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            level: 0,
            tweens: [Tween::finished(); MAX_LEVEL],
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Step to the next level at `now_ms`, wrapping to 0 after the last
    pub fn advance(&mut self, now_ms: f64) {
        if self.level >= MAX_LEVEL {
            self.level = 0;
            self.tweens = [Tween::finished(); MAX_LEVEL];
        } else {
            self.tweens[self.level] = Tween::starting_at(now_ms);
            self.level += 1;
        }
    }

    /// Progress of the transform introduced at `level` (1-based)
    fn progress(&self, level: usize, now_ms: f64) -> f64 {
        self.tweens[level - 1].value(now_ms)
    }

    /// Drawing frame with every unlocked transform applied at its current progress
    pub fn transform(&self, now_ms: f64) -> Affine {
        let mut frame = Affine::IDENTITY;
        let v = |level: usize| self.progress(level, now_ms);

        if self.level >= 1 {
            frame = frame.translate(v(1) * self.width / 2.0, v(1) * self.height / 2.0);
        }
        if self.level >= 2 {
            frame = frame.scale(1.0, 1.0 - 2.0 * v(2));
        }
        if self.level >= 3 {
            frame = frame.scale_uniform(1.0 + v(3));
        }
        if self.level >= 4 {
            frame = frame.rotate(v(4) * PI / 8.0);
        }
        if self.level >= 5 {
            frame = frame.translate(0.0, v(5) * 100.0);
        }
        if self.level >= 6 {
            frame = frame.translate(v(6) * 100.0, 0.0);
        }
        frame
    }

    fn draw_grid<S: Surface + ?Sized>(&self, frame: &Affine, spacing: f64, color: Color, surface: &mut S) {
        // Half-pixel offset puts 1px lines on pixel centres
        let frame = frame.translate(0.5, 0.5);
        let mut segments = Vec::new();

        let mut x = -GRID_EXTENT;
        while x < GRID_EXTENT {
            segments.push((Vec2::new(x, -self.height), Vec2::new(x, self.height)));
            x += spacing;
        }
        let mut y = -GRID_EXTENT;
        while y < GRID_EXTENT {
            segments.push((Vec2::new(-self.width, y), Vec2::new(self.width, y)));
            y += spacing;
        }

        surface.stroke_lines(&frame, &segments, color, 1.0);
    }

    fn draw_axes<S: Surface + ?Sized>(&self, frame: &Affine, surface: &mut S) {
        let arrows = [
            (-FRAC_PI_2, Color::rgb(0x44, 0x44, 0xff)), // x
            (0.0, Color::rgb(0x44, 0xff, 0x44)),        // y
        ];
        for (angle, color) in arrows {
            surface.fill_polygon(&frame.rotate(angle), &ARROW, color);
        }
    }
}

impl Animation for GridScene {
    fn render_frame<S: Surface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut S) {
        surface.clear(Rect::new(0.0, 0.0, self.width, self.height));

        let frame = self.transform(timestamp_ms);
        self.draw_grid(&frame, 10.0, Color::rgb(0x44, 0x44, 0x44), surface);
        self.draw_grid(&frame, 100.0, Color::rgb(0x88, 0x88, 0x88), surface);
        surface.fill_circle(&frame, Vec2::ZERO, ORIGIN_RADIUS, Color::RED);
        self.draw_axes(&frame, surface);
    }
}
