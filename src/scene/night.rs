use crate::animation::FrameClock;
use crate::config::SceneConfig;
use crate::math::Affine;
use crate::render::{Rect, Surface};
use super::Animation;
use super::sky::Backdrop;
use super::tree::{BranchParams, draw_tree, ground_frame};

/// The swaying tree under a turning night sky.
///
/// Built once per canvas size; afterwards only the clock changes, once per
/// frame. Everything drawn is derived from the clock and the fixed
/// parameters, so two frames at the same timestamp are identical.
#[derive(Debug, Clone)]
pub struct TreeScene {
    width: f64,
    height: f64,
    branches: BranchParams,
    backdrop: Backdrop,
    root: Affine,
    clock: FrameClock,
}

impl TreeScene {
    pub fn new(config: &SceneConfig, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            branches: BranchParams::from_config(&config.tree, height),
            backdrop: Backdrop::new(&config.sky, width, height),
            root: ground_frame(width, height),
            clock: FrameClock::default(),
        }
    }

    /// Seed the clock with the current page time so the first frame's
    /// duration is measured from construction rather than from zero
    pub fn starting_at(mut self, now_ms: f64) -> Self {
        self.clock = FrameClock::starting_at(now_ms);
        self
    }

    /// Replace the resolved branch parameters (tree geometry in pixels)
    pub fn with_branches(mut self, branches: BranchParams) -> Self {
        self.branches = branches;
        self
    }

    pub fn branches(&self) -> &BranchParams {
        &self.branches
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl Animation for TreeScene {
    fn render_frame<S: Surface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut S) {
        self.clock.tick(timestamp_ms);
        let t = self.clock.elapsed_ms;

        surface.clear(Rect::new(0.0, 0.0, self.width, self.height));
        self.backdrop.draw(t, surface);
        draw_tree(&self.branches, t, &self.root, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Wind;
    use crate::math::{Vec2, radians};
    use crate::render::{Color, DrawCommand, Paint, Raster, Recorder};
    use crate::scene::tree::BUD_COLOR;

    fn config(star_count: usize, depth: u32) -> SceneConfig {
        let mut config = SceneConfig::default();
        config.sky.star_count = star_count;
        config.tree.depth = depth;
        config
    }

    #[test]
    fn test_frame_clears_then_backdrop_then_tree() {
        let mut scene = TreeScene::new(&config(10, 3), 400.0, 300.0);
        let mut rec = Recorder::new();
        scene.render_frame(16.0, &mut rec);

        assert_eq!(rec.commands[0], DrawCommand::Clear { rect: Rect::new(0.0, 0.0, 400.0, 300.0) });
        // clear + sky + 11 stars + 2 moon + ground + 15 branches + 8 buds
        assert_eq!(rec.len(), 1 + 1 + 11 + 2 + 1 + 15 + 8);
        assert!(matches!(rec.commands.last(), Some(DrawCommand::FillCircle { color, .. }) if *color == BUD_COLOR));
    }

    #[test]
    fn test_clock_follows_timestamps() {
        let mut scene = TreeScene::new(&config(0, 1), 100.0, 100.0);
        let mut rec = Recorder::new();
        scene.render_frame(100.0, &mut rec);
        scene.render_frame(116.5, &mut rec);
        assert_eq!(scene.clock().elapsed_ms, 116.5);
        assert_eq!(scene.clock().last_frame_ms, 16.5);
    }

    #[test]
    fn test_first_frame_measured_from_construction() {
        let mut scene = TreeScene::new(&config(0, 1), 100.0, 100.0).starting_at(90_000.0);
        let mut rec = Recorder::new();
        scene.render_frame(90_016.0, &mut rec);
        assert_eq!(scene.clock().elapsed_ms, 90_016.0);
        assert_eq!(scene.clock().last_frame_ms, 16.0);
    }

    #[test]
    fn test_same_timestamp_same_commands() {
        let mut scene = TreeScene::new(&config(50, 6), 320.0, 240.0);
        let mut a = Recorder::new();
        let mut b = Recorder::new();
        scene.render_frame(8123.4, &mut a);
        scene.render_frame(99_000.0, &mut Recorder::new());
        scene.render_frame(8123.4, &mut b);
        assert_eq!(a.commands, b.commands);
    }

    #[test]
    fn test_same_timestamp_same_pixels() {
        let mut scene = TreeScene::new(&config(200, 7), 160.0, 120.0);
        let mut first = Raster::new(160, 120).unwrap();
        let mut second = Raster::new(160, 120).unwrap();

        scene.render_frame(3456.0, &mut first);
        scene.render_frame(7000.0, &mut second);
        scene.render_frame(3456.0, &mut second);

        assert_eq!(first.as_rgba(), second.as_rgba());
    }

    #[test]
    fn test_rendered_frame_has_sky_and_tree() {
        let mut scene = TreeScene::new(&config(0, 4), 200.0, 200.0);
        let mut raster = Raster::new(200, 200).unwrap();
        scene.render_frame(0.0, &mut raster);

        // Top-left corner: deep blue sky
        let [r, g, b, a] = raster.pixel(0, 0);
        assert_eq!(a, 255);
        assert!(b > r && b > g);

        // Just above the trunk base: pure white trunk at t = 0
        assert_eq!(raster.pixel(100, 195), [255, 255, 255, 255]);
        assert!(raster.average_luminance() > 0.0);
    }

    #[test]
    fn test_end_to_end_small_tree() {
        let branches = BranchParams {
            depth: 2,
            angle: radians(25.0),
            scale: 0.8,
            width: 10.0,
            length: 100.0,
            wind: Wind::new(radians(8.0), 0.5),
        };
        let mut scene = TreeScene::new(&config(0, 2), 800.0, 600.0).with_branches(branches);
        let mut rec = Recorder::new();
        scene.render_frame(0.0, &mut rec);

        let tree_rects: Vec<_> = rec
            .rects()
            .filter(|(_, _, paint)| matches!(paint, Paint::Solid(_)))
            .collect();
        let (trunk, rect, paint) = tree_rects[0];

        // Trunk base sits at the bottom centre of the canvas, unrotated
        assert!(trunk.approx_eq(&ground_frame(800.0, 600.0), 1e-12));
        assert!(trunk.apply(Vec2::ZERO).distance(&Vec2::new(400.0, 600.0)) < 1e-9);
        assert_eq!(rect.width, 10.0);
        assert_eq!(rect.height, 100.0);
        assert_eq!(*paint, Paint::Solid(Color::grey(255)));

        let buds: Vec<_> = rec.circles().filter(|(_, _, _, c)| *c == BUD_COLOR).collect();
        assert_eq!(buds.len(), 4);
        assert!(buds.iter().all(|(_, _, r, _)| *r == 20.0));
    }
}
