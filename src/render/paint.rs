//! Colors, gradients and fill styles shared by every surface

use serde::{Deserialize, Deserializer};
use crate::math::Vec2;

/// 8-bit RGB color with a float alpha, as a canvas fill style understands it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn grey(lightness: u8) -> Self {
        Self::rgb(lightness, lightness, lightness)
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("Color '{}' must start with '#'", hex))?;

        // Byte slicing below relies on ASCII; from_str_radix alone would take a sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color '{}'", hex));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| format!("Invalid hex color '{}'", hex))
        };

        match digits.len() {
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                // #abc is shorthand for #aabbcc
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(format!("Invalid hex color '{}'", hex)),
        }
    }

    /// CSS color string for a canvas fill or stroke style
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Perceived brightness (0-1)
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two points in the fill's own coordinate space
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    /// Sorted by offset. Two stops may share an offset to form a hard edge.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }

    /// Gradient offset of a point: its projection onto the start-end axis
    pub fn offset_of(&self, p: Vec2) -> f64 {
        let axis = self.end - self.start;
        let len_sq = axis.dot(&axis);
        if len_sq <= f64::EPSILON {
            return 0.0;
        }
        (p - self.start).dot(&axis) / len_sq
    }

    /// Color at offset `t`; at a repeated offset the later stop wins
    pub fn color_at(&self, t: f64) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::rgba(0, 0, 0, 0.0);
        };
        let t = t.clamp(0.0, 1.0);

        let Some(i) = self.stops.iter().rposition(|s| s.offset <= t) else {
            return first.color;
        };
        match self.stops.get(i + 1) {
            None => self.stops[i].color,
            Some(next) => {
                let from = &self.stops[i];
                let span = next.offset - from.offset;
                from.color.lerp(&next.color, (t - from.offset) / span)
            }
        }
    }
}

/// How a shape is filled
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(LinearGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
