pub mod stars;

pub use stars::{Star, Starfield};
