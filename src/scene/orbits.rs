//! Toy solar system: bodies on circular orbits whose angular speed falls
//! off with the square of their distance from the centre.

use crate::math::{Affine, Vec2};
use crate::render::{Color, Rect, Surface};
use super::Animation;

/// Angular speed scale: radians per millisecond at distance 1
pub const ORBIT_SPEED: f64 = 10.0;

const ORBIT_PATH_COLOR: Color = Color::rgb(0x44, 0x44, 0x44);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub radius: f64,
    /// Orbit radius; 0 sits at the centre
    pub distance: f64,
    pub color: Color,
}

impl CelestialBody {
    pub const fn new(radius: f64, distance: f64, color: Color) -> Self {
        Self { radius, distance, color }
    }

    /// Angular speed in radians per millisecond
    pub fn angular_speed(&self) -> f64 {
        if self.distance > 0.0 {
            ORBIT_SPEED / (self.distance * self.distance)
        } else {
            0.0
        }
    }

    /// Frame with the body's centre at its origin, given the system's centre frame
    pub fn frame(&self, center: &Affine, elapsed_ms: f64) -> Affine {
        if self.distance > 0.0 {
            center
                .rotate(elapsed_ms * self.angular_speed())
                .translate(0.0, self.distance)
        } else {
            *center
        }
    }
}

/// The sun and eight planets
pub fn solar_system() -> Vec<CelestialBody> {
    vec![
        CelestialBody::new(50.0, 0.0, Color::rgb(0xff, 0xff, 0x00)),
        CelestialBody::new(5.0, 80.0, Color::rgb(0x88, 0x88, 0x88)),
        CelestialBody::new(9.0, 110.0, Color::rgb(0xff, 0xff, 0x88)),
        CelestialBody::new(10.0, 140.0, Color::rgb(0x88, 0x88, 0xff)),
        CelestialBody::new(7.0, 170.0, Color::rgb(0xff, 0x44, 0x33)),
        CelestialBody::new(25.0, 210.0, Color::rgb(0xff, 0x88, 0x88)),
        CelestialBody::new(20.0, 260.0, Color::rgb(0xff, 0xaa, 0x88)),
        CelestialBody::new(15.0, 310.0, Color::rgb(0x88, 0xaa, 0xff)),
        CelestialBody::new(15.0, 360.0, Color::rgb(0x44, 0x44, 0xff)),
    ]
}

#[derive(Debug, Clone)]
pub struct OrbitScene {
    width: f64,
    height: f64,
    bodies: Vec<CelestialBody>,
}

impl OrbitScene {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_bodies(width, height, solar_system())
    }

    pub fn with_bodies(width: f64, height: f64, bodies: Vec<CelestialBody>) -> Self {
        Self { width, height, bodies }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    fn center(&self) -> Affine {
        Affine::translation(self.width / 2.0, self.height / 2.0)
    }
}

impl Animation for OrbitScene {
    fn render_frame<S: Surface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut S) {
        surface.clear(Rect::new(0.0, 0.0, self.width, self.height));

        let center = self.center();
        for body in &self.bodies {
            if body.distance > 0.0 {
                surface.stroke_circle(&center, Vec2::ZERO, body.distance, ORBIT_PATH_COLOR, 1.0);
            }
            let frame = body.frame(&center, timestamp_ms);
            surface.fill_circle(&frame, Vec2::ZERO, body.radius, body.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Recorder};

    #[test]
    fn test_inverse_square_speed() {
        let near = CelestialBody::new(1.0, 100.0, Color::WHITE);
        let far = CelestialBody::new(1.0, 200.0, Color::WHITE);
        assert!((near.angular_speed() / far.angular_speed() - 4.0).abs() < 1e-12);
        assert_eq!(CelestialBody::new(50.0, 0.0, Color::WHITE).angular_speed(), 0.0);
    }

    #[test]
    fn test_body_stays_on_its_orbit() {
        let center = Affine::translation(400.0, 300.0);
        let body = CelestialBody::new(10.0, 140.0, Color::WHITE);
        for t in [0.0, 1000.0, 55_555.0] {
            let p = body.frame(&center, t).apply(Vec2::ZERO);
            assert!((p.distance(&Vec2::new(400.0, 300.0)) - 140.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_starts_below_centre() {
        // Canvas y grows downward: translate(0, d) at angle 0 is straight below
        let center = Affine::translation(400.0, 300.0);
        let body = CelestialBody::new(10.0, 80.0, Color::WHITE);
        let p = body.frame(&center, 0.0).apply(Vec2::ZERO);
        assert!(p.distance(&Vec2::new(400.0, 380.0)) < 1e-9);
    }

    #[test]
    fn test_frame_commands() {
        let mut scene = OrbitScene::new(800.0, 800.0);
        let mut rec = Recorder::new();
        scene.render_frame(1234.0, &mut rec);

        let orbits = rec
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .count();
        assert!(matches!(rec.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(orbits, 8);
        assert_eq!(rec.circles().count(), 9);
    }

    #[test]
    fn test_sun_fixed_at_centre() {
        let mut scene = OrbitScene::new(800.0, 600.0);
        let mut rec = Recorder::new();
        scene.render_frame(98_765.0, &mut rec);
        let (frame, _, radius, _) = rec.circles().next().unwrap();
        assert_eq!(radius, 50.0);
        assert!(frame.apply(Vec2::ZERO).distance(&Vec2::new(400.0, 300.0)) < 1e-9);
    }
}
