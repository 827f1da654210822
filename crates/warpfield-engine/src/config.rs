use serde::{Deserialize, Serialize};

use crate::render::Rgba;

/// Full tuning surface of the hero animation.
/// Defaults reproduce the production landing page. Host pages override
/// individual fields through JSON, everything absent keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpConfig {
    /// Far plane of the simulated volume, where stars are born.
    pub max_depth: f32,
    /// Depth at or below which a star has flown past the viewer.
    pub near_depth: f32,
    /// Pool size on viewports at least `mobile_break` wide.
    pub desktop_stars: usize,
    /// Pool size on narrower viewports.
    pub mobile_stars: usize,
    /// Window width splitting the two pool sizes.
    pub mobile_break: f32,
    /// Cruise speed in depth units per tick.
    pub base_speed: f32,
    /// Peak speed at the end of the scroll ramp.
    pub boost_speed: f32,
    /// Scroll offset in pixels across which speed ramps to the boost.
    pub boost_range: f32,
    /// Smallest rendered point size.
    pub size_floor: f32,
    /// Point size per unit of depth progress.
    pub size_scale: f32,
    /// Dot radius as a fraction of point size.
    pub dot_factor: f32,
    /// Opacity per unit of depth progress, capped at 1.
    pub opacity_scale: f32,
    /// Trail opacity as a fraction of dot opacity.
    pub trail_alpha: f32,
    /// Trail stroke width as a fraction of point size.
    pub trail_width: f32,
    /// Minimum projected displacement before a trail is worth a stroke.
    pub min_trail: f32,
    /// Translucent backdrop painted every tick. Its alpha sets how long
    /// streaks persist.
    pub fade: Rgba,
    /// Inner stop of the ambient center glow.
    pub glow_inner: Rgba,
    /// Outer stop of the ambient center glow.
    pub glow_outer: Rgba,
    /// Glow radius as a fraction of the shorter canvas side.
    pub glow_radius: f32,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            max_depth: 1000.0,
            near_depth: 1.0,
            desktop_stars: 700,
            mobile_stars: 350,
            mobile_break: 640.0,
            base_speed: 3.5,
            boost_speed: 22.0,
            boost_range: 20.0,
            size_floor: 0.3,
            size_scale: 2.4,
            dot_factor: 0.75,
            opacity_scale: 1.5,
            trail_alpha: 0.55,
            trail_width: 0.55,
            min_trail: 0.5,
            fade: Rgba::new(7, 8, 15, 0.18),
            glow_inner: Rgba::new(58, 240, 224, 0.035),
            glow_outer: Rgba::new(7, 8, 15, 0.0),
            glow_radius: 0.35,
        }
    }
}

impl WarpConfig {
    /// Parse overrides from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pool size for a given window width.
    pub fn star_count_for(&self, window_width: f32) -> usize {
        if window_width < self.mobile_break {
            self.mobile_stars
        } else {
            self.desktop_stars
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_tuning() {
        let config = WarpConfig::default();
        assert_eq!(config.max_depth, 1000.0);
        assert_eq!(config.base_speed, 3.5);
        assert_eq!(config.boost_speed, 22.0);
        assert_eq!(config.boost_range, 20.0);
        assert_eq!(config.fade, Rgba::new(7, 8, 15, 0.18));
        assert_eq!(config.glow_inner, Rgba::new(58, 240, 224, 0.035));
    }

    #[test]
    fn pool_size_splits_on_window_width() {
        let config = WarpConfig::default();
        assert_eq!(config.star_count_for(639.0), 350);
        assert_eq!(config.star_count_for(640.0), 700);
        assert_eq!(config.star_count_for(1920.0), 700);
    }

    #[test]
    fn parse_partial_overrides() {
        let json = r#"{
            "desktop_stars": 1200,
            "boost_speed": 40.0,
            "fade": { "r": 0, "g": 0, "b": 0, "a": 0.25 }
        }"#;
        let config = WarpConfig::from_json(json).unwrap();
        assert_eq!(config.desktop_stars, 1200);
        assert_eq!(config.boost_speed, 40.0);
        assert_eq!(config.fade, Rgba::new(0, 0, 0, 0.25));
        // untouched fields keep page defaults
        assert_eq!(config.mobile_stars, 350);
        assert_eq!(config.base_speed, 3.5);
    }

    #[test]
    fn parse_empty_object_is_default() {
        let config = WarpConfig::from_json("{}").unwrap();
        assert_eq!(config.desktop_stars, WarpConfig::default().desktop_stars);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(WarpConfig::from_json("not json").is_err());
        assert!(WarpConfig::from_json(r#"{"base_speed": "fast"}"#).is_err());
    }
}
