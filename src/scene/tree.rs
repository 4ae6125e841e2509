//! Recursive wind-swept tree.
//!
//! Each branch is one rectangle drawn in its own local frame: origin at the
//! branch base, +Y along the branch. A child's frame is its parent's frame
//! moved to the parent's tip, shrunk and turned. Frames are plain values
//! handed down the recursion, so siblings never see each other's changes.

use crate::animation::{Wind, depth_ratio};
use crate::config::TreeConfig;
use crate::math::{Affine, Vec2, radians};
use crate::render::{Color, Rect, Surface};

/// Fill of the terminal buds
pub const BUD_COLOR: Color = Color::RED;

/// Immutable tree parameters, resolved to pixels and radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchParams {
    /// Recursion depth limit; buds grow at this depth
    pub depth: u32,
    /// Child branch angle (radians)
    pub angle: f64,
    /// Child scale factor
    pub scale: f64,
    pub width: f64,
    pub length: f64,
    pub wind: Wind,
}

impl BranchParams {
    pub fn from_config(config: &TreeConfig, canvas_height: f64) -> Self {
        Self {
            depth: config.depth,
            angle: radians(config.branch_angle_deg),
            scale: config.branch_scale,
            width: config.branch_width * canvas_height,
            length: config.branch_length * canvas_height,
            wind: Wind::new(radians(config.wind_amplitude_deg), config.wind_frequency),
        }
    }

    /// Grey level of a branch: light trunk, darker towards the tips
    pub fn lightness(&self, depth: u32) -> u8 {
        (255.0 - 180.0 * depth_ratio(depth, self.depth))
            .round()
            .clamp(0.0, 255.0) as u8
    }

    /// Branch rectangle in local coordinates, centred on the local Y axis
    pub fn branch_rect(&self) -> Rect {
        Rect::new(-self.width / 2.0, 0.0, self.width, self.length)
    }

    pub fn bud_radius(&self) -> f64 {
        self.width * 2.0
    }

    /// Buds in a full tree: one per leaf of the binary recursion.
    /// `None` once the count no longer fits in a `u64` (depth 64 and up).
    pub fn bud_count(&self) -> Option<u64> {
        1u64.checked_shl(self.depth)
    }
}

/// Frame with its origin at the bottom centre of the canvas and +Y pointing up
pub fn ground_frame(width: f64, height: f64) -> Affine {
    Affine::scaling(1.0, -1.0).translate(width / 2.0, -height)
}

/// Paint the whole tree for time `elapsed_ms`, rooted at `root`
pub fn draw_tree<S: Surface + ?Sized>(params: &BranchParams, elapsed_ms: f64, root: &Affine, surface: &mut S) {
    draw_branch(params, elapsed_ms, 0, *root, surface);
}

fn draw_branch<S: Surface + ?Sized>(
    params: &BranchParams,
    elapsed_ms: f64,
    depth: u32,
    frame: Affine,
    surface: &mut S,
) {
    let frame = frame.rotate(params.wind.rotation(elapsed_ms, depth, params.depth));

    let fill = Color::grey(params.lightness(depth));
    surface.fill_rect(&frame, params.branch_rect(), &fill.into());

    let tip = frame.translate(0.0, params.length);

    if depth < params.depth {
        let tip = tip.scale_uniform(params.scale);
        for angle in [-params.angle, params.angle] {
            draw_branch(params, elapsed_ms, depth + 1, tip.rotate(angle), surface);
        }
    } else {
        surface.fill_circle(&tip, Vec2::ZERO, params.bud_radius(), BUD_COLOR);
    }
}
