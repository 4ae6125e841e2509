//! CPU rasterizer implementing [`Surface`] over an RGBA byte buffer.
//!
//! Coverage is point-sampled at pixel centres with no anti-aliasing, which
//! keeps output bit-for-bit deterministic: two renders of the same frame
//! produce identical buffers.

use crate::math::{Affine, Vec2};
use super::paint::{Color, Paint};
use super::surface::{Rect, Surface};

/// RGBA pixel surface that mirrors a HTML canvas
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Width and height must be non-zero
    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid raster size {}x{}", width, height));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| format!("Raster size {}x{} is too large", width, height))?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major, ready for `ImageData`
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    /// Mean perceived brightness over all pixels (0-1), ignoring alpha
    pub fn average_luminance(&self) -> f64 {
        let total: f64 = self
            .pixels
            .chunks_exact(4)
            .map(|p| Color::rgb(p[0], p[1], p[2]).luminance())
            .sum();
        total / (self.width as f64 * self.height as f64)
    }

    fn blend(&mut self, x: u32, y: u32, color: Color) {
        let i = self.offset(x, y);
        let a = color.a.clamp(0.0, 1.0);
        let dst_a = self.pixels[i + 3] as f64 / 255.0;
        let out_a = a + dst_a * (1.0 - a);

        let mix = |src: u8, dst: u8| -> u8 {
            if out_a <= 0.0 {
                return 0;
            }
            let v = (src as f64 * a + dst as f64 * dst_a * (1.0 - a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };

        self.pixels[i] = mix(color.r, self.pixels[i]);
        self.pixels[i + 1] = mix(color.g, self.pixels[i + 1]);
        self.pixels[i + 2] = mix(color.b, self.pixels[i + 2]);
        self.pixels[i + 3] = (out_a * 255.0).round() as u8;
    }

    /// Pixel index range covering `[min, max]` in device space, clipped
    fn span(&self, min: f64, max: f64, limit: u32) -> Option<(u32, u32)> {
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        let lo = (min - 0.5).ceil().max(0.0);
        let hi = (max - 0.5).floor().min(limit as f64 - 1.0);
        if lo > hi {
            return None;
        }
        Some((lo as u32, hi as u32))
    }

    /// Visit the centre of every pixel inside a device-space bounding box
    fn shade_region(
        &mut self,
        min: Vec2,
        max: Vec2,
        inside: impl Fn(Vec2) -> bool,
        shade: impl Fn(Vec2) -> Color,
    ) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            self.span(min.x, max.x, self.width),
            self.span(min.y, max.y, self.height),
        ) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
                if inside(p) {
                    let color = shade(p);
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_device_polygon(&mut self, points: &[Vec2], shade: impl Fn(Vec2) -> Color) {
        if points.len() < 3 {
            return;
        }
        let (min, max) = bounds(points);
        self.shade_region(min, max, |p| polygon_contains(points, p), shade);
    }
}

impl Surface for Raster {
    fn clear(&mut self, rect: Rect) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            self.span(rect.x, rect.x + rect.width, self.width),
            self.span(rect.y, rect.y + rect.height, self.height),
        ) else {
            return;
        };
        for y in y0..=y1 {
            let start = self.offset(x0, y);
            let end = self.offset(x1, y) + 4;
            self.pixels[start..end].fill(0);
        }
    }

    fn fill_rect(&mut self, transform: &Affine, rect: Rect, paint: &Paint) {
        let corners = rect.corners().map(|c| transform.apply(c));
        match paint {
            Paint::Solid(color) => self.fill_device_polygon(&corners, |_| *color),
            Paint::Gradient(gradient) => {
                // Zero-area rectangles have no inverse and cover no pixels
                let Some(inverse) = transform.inverse() else {
                    return;
                };
                self.fill_device_polygon(&corners, |p| {
                    gradient.color_at(gradient.offset_of(inverse.apply(p)))
                });
            }
        }
    }

    fn fill_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color) {
        let c = transform.apply(center);
        let r = radius * transform.uniform_scale();
        let extent = Vec2::new(r, r);
        self.shade_region(c - extent, c + extent, |p| p.distance(&c) <= r, |_| color);
    }

    fn stroke_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color, line_width: f64) {
        let scale = transform.uniform_scale();
        let c = transform.apply(center);
        let r = radius * scale;
        let half = (line_width * scale / 2.0).max(0.5);
        let extent = Vec2::new(r + half, r + half);
        self.shade_region(
            c - extent,
            c + extent,
            |p| (p.distance(&c) - r).abs() <= half,
            |_| color,
        );
    }

    fn stroke_lines(&mut self, transform: &Affine, segments: &[(Vec2, Vec2)], color: Color, line_width: f64) {
        let half = (line_width * transform.uniform_scale() / 2.0).max(0.5);
        for (from, to) in segments {
            let a = transform.apply(*from);
            let b = transform.apply(*to);
            let dir = b - a;
            let len = dir.length();
            if len <= f64::EPSILON {
                continue;
            }
            let normal = Vec2::new(-dir.y / len, dir.x / len) * half;
            let quad = [a + normal, b + normal, b - normal, a - normal];
            self.fill_device_polygon(&quad, |_| color);
        }
    }

    fn fill_polygon(&mut self, transform: &Affine, points: &[Vec2], color: Color) {
        let device: Vec<Vec2> = points.iter().map(|p| transform.apply(*p)).collect();
        self.fill_device_polygon(&device, |_| color);
    }
}

fn bounds(points: &[Vec2]) -> (Vec2, Vec2) {
    let mut min = Vec2::new(f64::MAX, f64::MAX);
    let mut max = Vec2::new(f64::MIN, f64::MIN);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

/// Even-odd point-in-polygon test
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
