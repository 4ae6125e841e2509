pub mod vec2;
pub mod affine;

pub use vec2::Vec2;
pub use affine::Affine;

/// Degrees to radians
pub fn radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
