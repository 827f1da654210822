use glam::Vec2;

/// The drawing surface in CSS pixels. The projection origin sits at its
/// center, so most of the math here is about halves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen-space center, which doubles as the projection scale.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Shorter canvas side. Anchors effects that must fit both portrait
    /// and landscape surfaces.
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Whether a projected point landed on the surface. Edges count as on.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_half_extent() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn contains_counts_edges() {
        let vp = Viewport::new(800.0, 600.0);
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(800.0, 600.0)));
        assert!(vp.contains(Vec2::new(400.0, 300.0)));
        assert!(!vp.contains(Vec2::new(-0.1, 300.0)));
        assert!(!vp.contains(Vec2::new(400.0, 600.1)));
    }

    #[test]
    fn min_side_tracks_resize() {
        let mut vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.min_side(), 600.0);
        vp.resize(320.0, 900.0);
        assert_eq!(vp.min_side(), 320.0);
        assert_eq!(vp.center(), Vec2::new(160.0, 450.0));
    }
}
