use super::Vec2;

/// 2D affine transform in canvas coefficient order `[a, b, c, d, e, f]`:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// The builder methods compose in local space, the way `translate`,
/// `rotate` and `scale` compose on a 2D canvas context: the new operation
/// applies to points *before* the existing transform does. Every method
/// returns a new value, so a transform handed to a child can never leak
/// back into a sibling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub coeffs: [f64; 6],
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        coeffs: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub const fn new(coeffs: [f64; 6]) -> Self {
        Self { coeffs }
    }

    pub fn translation(x: f64, y: f64) -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, x, y])
    }

    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, -s, c, 0.0, 0.0])
    }

    pub fn scaling(x: f64, y: f64) -> Self {
        Self::new([x, 0.0, 0.0, y, 0.0, 0.0])
    }

    /// `self * other`: apply `other` first, then `self`
    pub fn mul(&self, other: &Affine) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.coeffs;
        let [a2, b2, c2, d2, e2, f2] = other.coeffs;
        Self::new([
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ])
    }

    pub fn translate(&self, x: f64, y: f64) -> Self {
        self.mul(&Self::translation(x, y))
    }

    pub fn rotate(&self, angle: f64) -> Self {
        self.mul(&Self::rotation(angle))
    }

    pub fn scale(&self, x: f64, y: f64) -> Self {
        self.mul(&Self::scaling(x, y))
    }

    pub fn scale_uniform(&self, s: f64) -> Self {
        self.scale(s, s)
    }

    pub fn apply(&self, p: Vec2) -> Vec2 {
        let [a, b, c, d, e, f] = self.coeffs;
        Vec2::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Transform a direction (ignores translation)
    pub fn apply_vector(&self, v: Vec2) -> Vec2 {
        let [a, b, c, d, _, _] = self.coeffs;
        Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
    }

    pub fn determinant(&self) -> f64 {
        let [a, b, c, d, _, _] = self.coeffs;
        a * d - b * c
    }

    /// Length scale factor; exact for similarity transforms (rotation,
    /// uniform scale and axis flips)
    pub fn uniform_scale(&self) -> f64 {
        self.determinant().abs().sqrt()
    }

    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.coeffs[4], self.coeffs[5])
    }

    pub fn inverse(&self) -> Option<Affine> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }
        let [a, b, c, d, e, f] = self.coeffs;
        let inv = 1.0 / det;
        Some(Self::new([
            d * inv,
            -b * inv,
            -c * inv,
            a * inv,
            (c * f - d * e) * inv,
            (b * e - a * f) * inv,
        ]))
    }

    pub fn approx_eq(&self, other: &Affine, eps: f64) -> bool {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .all(|(x, y)| (x - y).abs() <= eps)
    }
}
