//! A single star flying down the depth axis toward the viewer.

use glam::Vec2;

use crate::config::WarpConfig;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::field::palette::StarTint;

/// One point of light in the warp field.
///
/// A star never moves laterally. It keeps a fixed plane position and
/// loses depth each tick, and the perspective divide does the rest.
#[derive(Debug, Clone)]
pub struct Star {
    /// Position on the spawn plane, origin at the view center.
    pub pos: Vec2,
    /// Distance from the viewer. Always in (0, max_depth].
    pub depth: f32,
    /// Depth on the previous tick, the far end of the trail.
    pub prev_depth: f32,
    /// Color class, redrawn on every recycle.
    pub tint: StarTint,
}

impl Star {
    /// Spawn with a depth uniform over the whole range, so the field is
    /// populated at every distance from the very first frame.
    pub fn scatter(rng: &mut Rng, viewport: Viewport, config: &WarpConfig) -> Self {
        // 1 - next_f32() keeps the depth strictly positive.
        let depth = (1.0 - rng.next_f32()) * config.max_depth;
        Self {
            pos: Self::spawn_pos(rng, viewport),
            depth,
            prev_depth: depth,
            tint: StarTint::weighted(rng),
        }
    }

    /// Re-enter at the far plane with a fresh position and tint.
    pub fn recycle(&mut self, rng: &mut Rng, viewport: Viewport, config: &WarpConfig) {
        self.pos = Self::spawn_pos(rng, viewport);
        self.depth = config.max_depth;
        self.prev_depth = config.max_depth;
        self.tint = StarTint::weighted(rng);
    }

    /// Uniform over a plane twice the viewport per axis, centered on the
    /// origin. The overshoot keeps the screen edges fed as stars expand
    /// outward.
    fn spawn_pos(rng: &mut Rng, viewport: Viewport) -> Vec2 {
        Vec2::new(
            rng.next_f32_signed() * viewport.width,
            rng.next_f32_signed() * viewport.height,
        )
    }

    /// Advance one tick. Returns true once the star crosses the near
    /// threshold and must be recycled.
    pub fn advance(&mut self, speed: f32, near_depth: f32) -> bool {
        self.prev_depth = self.depth;
        self.depth -= speed;
        self.depth <= near_depth
    }

    /// Perspective projection onto the surface. `center` is both the
    /// screen origin and the projection scale.
    pub fn project(&self, center: Vec2) -> Vec2 {
        self.pos / self.depth * center + center
    }

    /// Projection at last tick's depth, the start point of the trail.
    pub fn project_prev(&self, center: Vec2) -> Vec2 {
        self.pos / self.prev_depth * center + center
    }

    /// Normalized closeness: 0 at the far plane, approaching 1 at the
    /// viewer. Drives size and opacity.
    pub fn progress(&self, max_depth: f32) -> f32 {
        1.0 - self.depth / max_depth
    }
}
