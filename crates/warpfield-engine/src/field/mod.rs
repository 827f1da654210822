//! The warp field: a fixed pool of stars streaming toward the viewer.
//!
//! This module provides the `Starfield` facade that owns the pool, the
//! scroll-driven speed ramp, and the per-tick draw plan, plus the
//! individual components for direct use.

mod palette;
mod speed;
mod star;

// Re-export public types
pub use palette::StarTint;
pub use speed::SpeedRamp;
pub use star::Star;

use crate::config::WarpConfig;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::render::{DrawList, DrawOp};

/// Container for the whole hero simulation. One instance per mounted
/// canvas; every tick is a `step()` call, every observable output goes
/// through the draw list.
pub struct Starfield {
    pub config: WarpConfig,
    pub viewport: Viewport,
    pub stars: Vec<Star>,
    pub ramp: SpeedRamp,
    pub rng: Rng,
    pub draw_list: DrawList,
}

impl Starfield {
    /// Build a field with its pool already scattered across the full
    /// depth range. `window_width` picks the pool size, which is fixed
    /// for the life of the field; `viewport` is the canvas itself.
    pub fn new(config: WarpConfig, viewport: Viewport, window_width: f32, seed: u64) -> Self {
        let count = config.star_count_for(window_width);
        let mut rng = Rng::new(seed);
        let stars = (0..count)
            .map(|_| Star::scatter(&mut rng, viewport, &config))
            .collect();
        let ramp = SpeedRamp::new(config.base_speed, config.boost_speed, config.boost_range);
        log::debug!(
            "starfield: {} stars scattered over depth {}",
            count,
            config.max_depth
        );
        Starfield {
            draw_list: DrawList::with_capacity(2 + count * 2),
            config,
            viewport,
            stars,
            ramp,
            rng,
        }
    }

    /// Track a canvas resize. Existing stars keep their plane positions,
    /// recycling restores full coverage within a few seconds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        log::debug!("starfield: resized to {}x{}", width, height);
    }

    /// Feed the page scroll offset into the speed ramp.
    pub fn on_scroll(&mut self, offset: f32) {
        self.ramp.on_scroll(offset);
    }

    /// Current per-tick travel speed.
    pub fn speed(&self) -> f32 {
        self.ramp.current()
    }

    /// Advance the simulation one tick and rebuild the draw plan:
    /// backdrop fade, center glow, then one trail and dot per visible
    /// star. Stars that fly past the viewer or project off the surface
    /// are recycled to the far plane in place.
    pub fn step(&mut self) {
        let center = self.viewport.center();
        let speed = self.ramp.current();

        self.draw_list.clear();
        self.draw_list.push(DrawOp::Fade {
            color: self.config.fade,
        });
        self.draw_list.push(DrawOp::Glow {
            center,
            radius: self.viewport.min_side() * self.config.glow_radius,
            inner: self.config.glow_inner,
            outer: self.config.glow_outer,
        });

        for star in &mut self.stars {
            if star.advance(speed, self.config.near_depth) {
                star.recycle(&mut self.rng, self.viewport, &self.config);
            }

            let here = star.project(center);
            if !self.viewport.contains(here) {
                // Drifted off the surface; skip the draw entirely.
                star.recycle(&mut self.rng, self.viewport, &self.config);
                continue;
            }

            let progress = star.progress(self.config.max_depth);
            let size = (progress * self.config.size_scale).max(self.config.size_floor);
            let opacity = (progress * self.config.opacity_scale).min(1.0);

            let there = star.project_prev(center);
            if here.distance(there) > self.config.min_trail {
                self.draw_list.push(DrawOp::Trail {
                    from: there,
                    to: here,
                    width: size * self.config.trail_width,
                    color: star.tint.rgba(opacity * self.config.trail_alpha),
                });
            }
            self.draw_list.push(DrawOp::Dot {
                center: here,
                radius: size * self.config.dot_factor,
                color: star.tint.rgba(opacity),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn single_star_field() -> Starfield {
        let config = WarpConfig {
            desktop_stars: 1,
            mobile_stars: 1,
            ..WarpConfig::default()
        };
        Starfield::new(config, Viewport::new(800.0, 600.0), 1024.0, 42)
    }

    fn ops(field: &Starfield) -> Vec<DrawOp> {
        field.draw_list.iter().cloned().collect()
    }

    #[test]
    fn pool_size_follows_window_width() {
        let config = WarpConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let narrow = Starfield::new(config.clone(), vp, 500.0, 1);
        let wide = Starfield::new(config, vp, 1280.0, 1);
        assert_eq!(narrow.stars.len(), 350);
        assert_eq!(wide.stars.len(), 700);
    }

    #[test]
    fn step_leads_with_fade_then_glow() {
        let mut field = single_star_field();
        field.step();
        let ops = ops(&field);
        assert!(matches!(ops[0], DrawOp::Fade { color } if color == field.config.fade));
        match ops[1] {
            DrawOp::Glow { center, radius, .. } => {
                assert_eq!(center, Vec2::new(400.0, 300.0));
                assert!((radius - 210.0).abs() < 1e-3, "radius was {}", radius);
            }
            ref other => panic!("expected glow, got {:?}", other),
        }
    }

    #[test]
    fn depth_stays_in_range_over_many_ticks() {
        let config = WarpConfig::default();
        let mut field = Starfield::new(config, Viewport::new(800.0, 600.0), 1280.0, 7);
        for _ in 0..300 {
            field.step();
            for star in &field.stars {
                assert!(
                    star.depth > 0.0 && star.depth <= field.config.max_depth,
                    "depth escaped range: {}",
                    star.depth
                );
            }
        }
    }

    #[test]
    fn scroll_boost_advances_further_per_tick() {
        let mut field = single_star_field();
        field.stars[0].pos = Vec2::ZERO;
        field.stars[0].depth = 800.0;
        field.on_scroll(20.0);
        field.step();
        assert_eq!(field.stars[0].depth, 778.0);

        field.on_scroll(40.0);
        field.step();
        assert_eq!(field.stars[0].depth, 774.5);
    }

    #[test]
    fn offscreen_star_recycles_without_drawing() {
        let mut field = single_star_field();
        field.stars[0].pos = Vec2::new(790.0, 0.0);
        field.stars[0].depth = 10.0;
        field.step();
        assert_eq!(field.stars[0].depth, field.config.max_depth);
        let ops = ops(&field);
        assert_eq!(ops.len(), 2, "only fade and glow expected: {:?}", ops);
    }

    #[test]
    fn near_plane_crossing_redraws_at_far_plane() {
        let mut field = single_star_field();
        field.stars[0].pos = Vec2::ZERO;
        field.stars[0].depth = 2.0;
        field.step();
        assert_eq!(field.stars[0].depth, field.config.max_depth);
        let ops = ops(&field);
        // A freshly recycled star projects well inside the surface, so
        // it is drawn the same tick it re-enters. No trail: both depths
        // sit at the far plane.
        assert_eq!(ops.len(), 3, "expected fade, glow, dot: {:?}", ops);
        match ops[2] {
            DrawOp::Dot { color, .. } => {
                assert_eq!(color.a, 0.0, "far plane star starts invisible");
            }
            ref other => panic!("expected dot, got {:?}", other),
        }
    }

    #[test]
    fn distant_star_skips_trail_and_floors_size() {
        let mut field = single_star_field();
        field.stars[0].pos = Vec2::new(10.0, 10.0);
        field.stars[0].depth = 999.0;
        field.step();
        let ops = ops(&field);
        assert_eq!(ops.len(), 3, "no trail for sub-pixel movement: {:?}", ops);
        match ops[2] {
            DrawOp::Dot { radius, .. } => {
                let floor = field.config.size_floor * field.config.dot_factor;
                assert!((radius - floor).abs() < 1e-6, "radius was {}", radius);
            }
            ref other => panic!("expected dot, got {:?}", other),
        }
    }

    #[test]
    fn close_star_draws_dimmed_trail_and_full_dot() {
        let mut field = single_star_field();
        field.stars[0].pos = Vec2::new(30.0, 20.0);
        field.stars[0].depth = 50.0;
        field.step();
        let ops = ops(&field);
        assert_eq!(ops.len(), 4, "expected fade, glow, trail, dot: {:?}", ops);
        let (trail_alpha, trail_width) = match ops[2] {
            DrawOp::Trail { color, width, .. } => (color.a, width),
            ref other => panic!("expected trail, got {:?}", other),
        };
        let (dot_alpha, dot_radius) = match ops[3] {
            DrawOp::Dot { color, radius, .. } => (color.a, radius),
            ref other => panic!("expected dot, got {:?}", other),
        };
        assert_eq!(dot_alpha, 1.0, "progress 0.95 saturates opacity");
        assert!((trail_alpha - field.config.trail_alpha).abs() < 1e-6);
        assert!(trail_width > 0.0 && dot_radius > trail_width);
    }

    #[test]
    fn resize_recenters_glow() {
        let mut field = single_star_field();
        field.step();
        field.resize(400.0, 400.0);
        field.step();
        match ops(&field)[1] {
            DrawOp::Glow { center, radius, .. } => {
                assert_eq!(center, Vec2::new(200.0, 200.0));
                assert!((radius - 140.0).abs() < 1e-3);
            }
            ref other => panic!("expected glow, got {:?}", other),
        }
    }

    #[test]
    fn draw_list_is_rebuilt_not_appended() {
        let mut field = single_star_field();
        // One star can contribute at most a trail and a dot on top of
        // the fade and glow, however many ticks have run.
        for _ in 0..5 {
            field.step();
            assert!(field.draw_list.len() <= 4, "list grew across ticks");
        }
    }
}
