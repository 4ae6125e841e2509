use crate::math::{Affine, Vec2};

/// A single star, in star-field coordinates (origin at the field's pivot)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f64,
}

/// Fixed set of stars scattered once at startup.
///
/// The field never changes after construction: each frame draws it under a
/// single rotation about the pivot, so no star moves relative to another.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    seed: u32,
}

impl Starfield {
    /// Scatter `count` stars over `[-width, width) x [-height, height)`,
    /// plus a north star at the pivot.
    pub fn generate(count: usize, width: f64, height: f64, north_star_radius: f64, seed: u32) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(count + 1),
            seed,
        };

        for _ in 0..count {
            let x = field.next_unit() * 2.0 * width - width;
            let y = field.next_unit() * 2.0 * height - height;
            let radius = 0.25 + field.next_unit() * 2.0;
            field.stars.push(Star {
                position: Vec2::new(x, y),
                radius,
            });
        }

        field.stars.push(Star {
            position: Vec2::ZERO,
            radius: north_star_radius,
        });

        field
    }

    /// Uniform value in [0, 1) from the field's LCG
    fn next_unit(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed >> 8) as f64 / (1u32 << 24) as f64
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// The fixed star at the pivot
    pub fn north_star(&self) -> Option<&Star> {
        self.stars.last()
    }

    pub fn count(&self) -> usize {
        self.stars.len()
    }

    /// Transform placing the field on the canvas at a given rotation
    pub fn placement(pivot: Vec2, angle: f64) -> Affine {
        Affine::translation(pivot.x, pivot.y).rotate(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_includes_north_star() {
        let field = Starfield::generate(1000, 800.0, 600.0, 2.0, 42);
        assert_eq!(field.count(), 1001);
        let north = field.north_star().unwrap();
        assert_eq!(north.position, Vec2::ZERO);
        assert_eq!(north.radius, 2.0);
    }

    #[test]
    fn test_stars_within_bounds() {
        let field = Starfield::generate(500, 800.0, 600.0, 2.0, 7);
        for star in field.stars() {
            assert!(star.position.x >= -800.0 && star.position.x < 800.0);
            assert!(star.position.y >= -600.0 && star.position.y < 600.0);
            assert!(star.radius >= 0.25 && star.radius < 2.25);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let a = Starfield::generate(50, 100.0, 100.0, 2.0, 9);
        let b = Starfield::generate(50, 100.0, 100.0, 2.0, 9);
        let c = Starfield::generate(50, 100.0, 100.0, 2.0, 10);
        assert_eq!(a.stars(), b.stars());
        assert_ne!(a.stars(), c.stars());
    }

    #[test]
    fn test_rotation_composes() {
        let field = Starfield::generate(20, 300.0, 200.0, 2.0, 3);
        let pivot = Vec2::new(600.0, 100.0);
        let (t1, t2) = (0.37, 1.9);

        let stepwise = Starfield::placement(pivot, t1).rotate(t2);
        let once = Starfield::placement(pivot, t1 + t2);

        for star in field.stars() {
            let a = stepwise.apply(star.position);
            let b = once.apply(star.position);
            assert!(a.distance(&b) < 1e-9);
        }
    }

    #[test]
    fn test_rotation_is_rigid() {
        let field = Starfield::generate(20, 300.0, 200.0, 2.0, 5);
        let placed = Starfield::placement(Vec2::new(10.0, 20.0), 2.2);
        let s = field.stars();
        for pair in s.windows(2) {
            let before = pair[0].position.distance(&pair[1].position);
            let after = placed.apply(pair[0].position).distance(&placed.apply(pair[1].position));
            assert!((before - after).abs() < 1e-9);
        }
    }
}
