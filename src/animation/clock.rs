/// Frame clock fed by the host scheduler's timestamps (milliseconds)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    /// Timestamp of the current frame
    pub elapsed_ms: f64,
    /// Time between the previous frame and this one
    pub last_frame_ms: f64,
}

impl FrameClock {
    pub fn starting_at(elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            last_frame_ms: 0.0,
        }
    }

    /// Advance to a new frame timestamp
    pub fn tick(&mut self, timestamp_ms: f64) {
        self.last_frame_ms = timestamp_ms - self.elapsed_ms;
        self.elapsed_ms = timestamp_ms;
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ms / 1000.0
    }
}
