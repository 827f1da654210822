//! Scroll-reactive warp speed.

/// Maps the page scroll offset to the per-tick travel speed.
///
/// The ramp lives entirely inside the first `range` pixels of scroll:
/// speed climbs linearly from `base` to `boost` across it, and snaps
/// back to `base` the moment the offset leaves the ramp. Crossing the
/// fold reads as dropping out of warp.
#[derive(Debug, Clone)]
pub struct SpeedRamp {
    base: f32,
    boost: f32,
    range: f32,
    current: f32,
    last_scroll: f32,
}

impl SpeedRamp {
    pub fn new(base: f32, boost: f32, range: f32) -> Self {
        Self {
            base,
            boost,
            range,
            current: base,
            last_scroll: 0.0,
        }
    }

    /// Feed a new scroll offset. Offsets past the ramp fall back to the
    /// base speed, rubber-band offsets clamp to the ramp start.
    pub fn on_scroll(&mut self, offset: f32) {
        let offset = offset.max(0.0);
        self.current = if offset <= self.range {
            self.base + (offset / self.range) * (self.boost - self.base)
        } else {
            self.base
        };
        self.last_scroll = offset;
    }

    /// Speed to advance the field by this tick.
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn last_scroll(&self) -> f32 {
        self.last_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_ramp() -> SpeedRamp {
        SpeedRamp::new(3.5, 22.0, 20.0)
    }

    #[test]
    fn rest_is_base_speed() {
        let mut ramp = page_ramp();
        assert_eq!(ramp.current(), 3.5);
        ramp.on_scroll(0.0);
        assert_eq!(ramp.current(), 3.5);
    }

    #[test]
    fn ramp_end_hits_boost() {
        let mut ramp = page_ramp();
        ramp.on_scroll(20.0);
        assert_eq!(ramp.current(), 22.0);
    }

    #[test]
    fn midpoint_interpolates() {
        let mut ramp = page_ramp();
        ramp.on_scroll(10.0);
        assert_eq!(ramp.current(), 12.75);
    }

    #[test]
    fn past_ramp_falls_back_to_base() {
        let mut ramp = page_ramp();
        ramp.on_scroll(20.0);
        ramp.on_scroll(21.0);
        assert_eq!(ramp.current(), 3.5);
        ramp.on_scroll(500.0);
        assert_eq!(ramp.current(), 3.5);
    }

    #[test]
    fn rubber_band_clamps_to_base() {
        let mut ramp = page_ramp();
        ramp.on_scroll(-12.0);
        assert_eq!(ramp.current(), 3.5);
        assert_eq!(ramp.last_scroll(), 0.0);
    }
}
