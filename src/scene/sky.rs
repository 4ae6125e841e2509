//! Night backdrop: gradient sky and ground, a turning star field and a moon

use crate::config::SkyConfig;
use crate::math::{Affine, Vec2, radians};
use crate::particles::Starfield;
use crate::render::{Color, LinearGradient, Paint, Rect, Surface};

/// Resolved backdrop for one canvas size
#[derive(Debug, Clone)]
pub struct Backdrop {
    width: f64,
    height: f64,
    gradient: Paint,
    starfield: Starfield,
    star_color: Color,
    /// Star field rotation, radians per second
    star_speed: f64,
    pivot: Vec2,
    moon: Moon,
}

#[derive(Debug, Clone, Copy)]
struct Moon {
    center: Vec2,
    radius: f64,
    inner_radius: f64,
    color: Color,
    inner_color: Color,
    orbit_factor: f64,
}

impl Backdrop {
    pub fn new(config: &SkyConfig, width: f64, height: f64) -> Self {
        let gradient = config.gradient.iter().fold(
            LinearGradient::new(Vec2::ZERO, Vec2::new(0.0, height)),
            |g, (offset, color)| g.with_stop(*offset, *color),
        );

        let star_color = Color {
            a: config.star_alpha,
            ..config.star_color
        };

        Self {
            width,
            height,
            gradient: Paint::Gradient(gradient),
            starfield: Starfield::generate(
                config.star_count,
                width,
                height,
                config.north_star_radius,
                config.star_seed,
            ),
            star_color,
            star_speed: radians(config.star_speed_deg),
            pivot: Vec2::new(config.pivot[0] * width, config.pivot[1] * height),
            moon: Moon {
                center: Vec2::new(config.moon_offset[0] * width, config.moon_offset[1] * width),
                radius: config.moon_radius,
                inner_radius: config.moon_inner_radius,
                color: config.moon_color,
                inner_color: config.moon_inner_color,
                orbit_factor: config.moon_orbit_factor,
            },
        }
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Star field rotation at `elapsed_ms`
    pub fn star_angle(&self, elapsed_ms: f64) -> f64 {
        elapsed_ms / 1000.0 * self.star_speed
    }

    /// Paint order: sky, stars, moon, ground. The ground covers whatever
    /// part of the sky has turned below the horizon.
    pub fn draw<S: Surface + ?Sized>(&self, elapsed_ms: f64, surface: &mut S) {
        self.draw_sky(surface);
        self.draw_stars(elapsed_ms, surface);
        self.draw_ground(surface);
    }

    fn draw_sky<S: Surface + ?Sized>(&self, surface: &mut S) {
        let top = Rect::new(0.0, 0.0, self.width, self.height / 2.0);
        surface.fill_rect(&Affine::IDENTITY, top, &self.gradient);
    }

    fn draw_ground<S: Surface + ?Sized>(&self, surface: &mut S) {
        let bottom = Rect::new(0.0, self.height / 2.0, self.width, self.height / 2.0);
        surface.fill_rect(&Affine::IDENTITY, bottom, &self.gradient);
    }

    fn draw_stars<S: Surface + ?Sized>(&self, elapsed_ms: f64, surface: &mut S) {
        let angle = self.star_angle(elapsed_ms);
        let field = Starfield::placement(self.pivot, angle);

        for star in self.starfield.stars() {
            surface.fill_circle(&field, star.position, star.radius, self.star_color);
        }

        let moon = Starfield::placement(self.pivot, angle * self.moon.orbit_factor);
        surface.fill_circle(&moon, self.moon.center, self.moon.radius, self.moon.color);
        surface.fill_circle(&moon, self.moon.center, self.moon.inner_radius, self.moon.inner_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Recorder};

    fn small_sky() -> SkyConfig {
        SkyConfig {
            star_count: 25,
            ..SkyConfig::default()
        }
    }

    #[test]
    fn test_paint_order() {
        let backdrop = Backdrop::new(&small_sky(), 800.0, 600.0);
        let mut rec = Recorder::new();
        backdrop.draw(0.0, &mut rec);

        // sky + 26 stars + 2 moon discs + ground
        assert_eq!(rec.len(), 1 + 26 + 2 + 1);
        assert!(matches!(rec.commands.first(), Some(DrawCommand::FillRect { .. })));
        assert!(matches!(rec.commands.last(), Some(DrawCommand::FillRect { .. })));
    }

    #[test]
    fn test_sky_and_ground_halves() {
        let backdrop = Backdrop::new(&small_sky(), 800.0, 600.0);
        let mut rec = Recorder::new();
        backdrop.draw(0.0, &mut rec);
        let rects: Vec<_> = rec.rects().map(|(_, r, _)| *r).collect();
        assert_eq!(rects, vec![
            Rect::new(0.0, 0.0, 800.0, 300.0),
            Rect::new(0.0, 300.0, 800.0, 300.0),
        ]);
    }

    #[test]
    fn test_stars_turn_about_pivot() {
        let backdrop = Backdrop::new(&small_sky(), 800.0, 600.0);
        assert_eq!(backdrop.pivot(), Vec2::new(600.0, 100.0));

        let mut rec = Recorder::new();
        backdrop.draw(10_000.0, &mut rec);
        let north = rec
            .circles()
            .find(|(_, c, r, _)| *c == Vec2::ZERO && *r == 2.0)
            .unwrap();
        // North star stays on the pivot at any angle
        assert!(north.0.apply(Vec2::ZERO).distance(&backdrop.pivot()) < 1e-9);
    }

    #[test]
    fn test_star_angle_speed() {
        let backdrop = Backdrop::new(&small_sky(), 800.0, 600.0);
        assert!((backdrop.star_angle(1000.0) - radians(3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_moon_turns_twice_as_fast() {
        let backdrop = Backdrop::new(&small_sky(), 800.0, 600.0);
        let mut rec = Recorder::new();
        backdrop.draw(5000.0, &mut rec);

        let moon = rec
            .circles()
            .find(|(_, _, r, _)| *r == 50.0)
            .unwrap();
        let expected = Starfield::placement(backdrop.pivot(), 2.0 * backdrop.star_angle(5000.0));
        assert!(moon.0.approx_eq(&expected, 1e-12));
        assert_eq!(moon.1, Vec2::new(-400.0, 400.0));
    }

    #[test]
    fn test_stars_are_translucent_white() {
        let backdrop = Backdrop::new(&small_sky(), 800.0, 600.0);
        let mut rec = Recorder::new();
        backdrop.draw(0.0, &mut rec);
        assert_eq!(rec.circles_with_color(Color::rgba(255, 255, 255, 0.8)), 26);
    }
}
