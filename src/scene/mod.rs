//! The three canvas animations and the pieces they are built from

pub mod tree;
pub mod sky;
pub mod night;
pub mod orbits;
pub mod grid;

pub use tree::{BranchParams, draw_tree, ground_frame};
pub use sky::Backdrop;
pub use night::TreeScene;
pub use orbits::{CelestialBody, OrbitScene, solar_system};
pub use grid::GridScene;

use crate::render::Surface;

/// A scene redrawn from scratch every display refresh
pub trait Animation {
    /// Paint one complete frame for the host timestamp `timestamp_ms`
    fn render_frame<S: Surface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut S);
}
