use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::math::{Affine, Vec2};
use super::paint::{Color, LinearGradient, Paint};
use super::surface::{Rect, Surface};

/// Wrapper around a canvas 2D context implementing [`Surface`]
pub struct CanvasSurface {
    pub ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Match the canvas backing store to its laid-out size and grab the 2D context
    pub fn attach(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let (client_w, client_h) = (canvas.client_width(), canvas.client_height());
        if client_w > 0 && client_h > 0 {
            canvas.set_width(client_w as u32);
            canvas.set_height(client_h as u32);
        }

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to query 2d context".to_string())?
            .ok_or("Canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Context is not a CanvasRenderingContext2d".to_string())?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    fn set_transform(&self, transform: &Affine) {
        let [a, b, c, d, e, f] = transform.coeffs;
        // Only throws for non-finite coefficients, which leave the previous transform in place
        let _ = self.ctx.set_transform(a, b, c, d, e, f);
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Gradient(gradient) => self.set_fill_gradient(gradient),
        }
    }

    fn set_fill_gradient(&self, gradient: &LinearGradient) {
        let g = self.ctx.create_linear_gradient(
            gradient.start.x,
            gradient.start.y,
            gradient.end.x,
            gradient.end.y,
        );
        for stop in &gradient.stops {
            // Offsets are clamped to [0, 1] when the stop is built
            let _ = g.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
    }

    fn trace_circle(&self, center: Vec2, radius: f64) {
        self.ctx.begin_path();
        // arc() only rejects negative radii
        let _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::TAU);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, rect: Rect) {
        self.set_transform(&Affine::IDENTITY);
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_rect(&mut self, transform: &Affine, rect: Rect, paint: &Paint) {
        self.set_transform(transform);
        self.set_fill(paint);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color) {
        self.set_transform(transform);
        self.ctx.set_fill_style_str(&color.to_css());
        self.trace_circle(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, transform: &Affine, center: Vec2, radius: f64, color: Color, line_width: f64) {
        self.set_transform(transform);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width);
        self.trace_circle(center, radius);
        self.ctx.stroke();
    }

    fn stroke_lines(&mut self, transform: &Affine, segments: &[(Vec2, Vec2)], color: Color, line_width: f64) {
        self.set_transform(transform);
        self.ctx.begin_path();
        for (from, to) in segments {
            self.ctx.move_to(from.x, from.y);
            self.ctx.line_to(to.x, to.y);
        }
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, transform: &Affine, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_transform(transform);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }
}
