//! Wind sway for tree branches.
//!
//! Every depth tier follows the same sine wave shifted back by one radian
//! per tier, so a gust reaches the tips after the trunk. Amplitude grows
//! linearly with depth: the trunk barely moves while the tips whip.

/// Wind parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    /// Peak rotation at depth 0 (radians)
    pub amplitude: f64,
    /// Phase advance per second (radians)
    pub frequency: f64,
}

impl Wind {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self { amplitude, frequency }
    }

    /// Sine input for a branch at `depth` at time `elapsed_ms`
    pub fn phase(&self, elapsed_ms: f64, depth: u32) -> f64 {
        elapsed_ms / 1000.0 * self.frequency - depth as f64
    }

    /// Rotation offset (radians) for a branch at `depth` of a tree `max_depth` deep
    pub fn rotation(&self, elapsed_ms: f64, depth: u32, max_depth: u32) -> f64 {
        self.phase(elapsed_ms, depth).sin() * self.amplitude * (1.0 + depth_ratio(depth, max_depth))
    }

    /// Duration of one full sway cycle in milliseconds
    pub fn period_ms(&self) -> f64 {
        std::f64::consts::TAU * 1000.0 / self.frequency
    }
}

/// `depth / max_depth`; a tree with no levels below the trunk counts as ratio 0
pub fn depth_ratio(depth: u32, max_depth: u32) -> f64 {
    if max_depth == 0 {
        0.0
    } else {
        depth as f64 / max_depth as f64
    }
}
