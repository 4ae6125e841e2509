//! Time-driven animation primitives
//!
//! Frame clock, wind sway for the tree, and easing/tweens for the
//! transform grid transitions.

mod clock;
mod easing;
mod wind;

pub use clock::FrameClock;
pub use easing::{Easing, Tween, ease};
pub use wind::{Wind, depth_ratio};
