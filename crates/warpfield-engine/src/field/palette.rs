//! Star color palette.
//! Weighted toward cool white so the accent tints read as rare events.

use crate::core::rng::Rng;
use crate::render::Rgba;

/// The four tints a star can carry, drawn at spawn and kept until the
/// star is recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTint {
    CoolWhite,
    Cyan,
    BlueWhite,
    Gold,
}

impl StarTint {
    pub const ALL: [StarTint; 4] = [Self::CoolWhite, Self::Cyan, Self::BlueWhite, Self::Gold];

    /// Draw a tint with the page weights: 70% cool white, 18% cyan,
    /// 8% blue-white, 4% gold.
    pub fn weighted(rng: &mut Rng) -> Self {
        let roll = rng.next_f32();
        if roll < 0.70 {
            Self::CoolWhite
        } else if roll < 0.88 {
            Self::Cyan
        } else if roll < 0.96 {
            Self::BlueWhite
        } else {
            Self::Gold
        }
    }

    /// Base sRGB channels of the tint.
    pub fn channels(self) -> (u8, u8, u8) {
        match self {
            Self::CoolWhite => (220, 230, 255),
            Self::Cyan => (58, 240, 224),
            Self::BlueWhite => (180, 210, 255),
            Self::Gold => (245, 197, 66),
        }
    }

    /// The tint at a given opacity, ready for the draw list.
    pub fn rgba(self, alpha: f32) -> Rgba {
        let (r, g, b) = self.channels();
        Rgba::new(r, g, b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_is_valid() {
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            let tint = StarTint::weighted(&mut rng);
            assert!(StarTint::ALL.contains(&tint));
        }
    }

    #[test]
    fn weighted_matches_page_frequencies() {
        let mut rng = Rng::new(1234);
        let mut counts = [0usize; 4];
        let draws = 20_000;
        for _ in 0..draws {
            let tint = StarTint::weighted(&mut rng);
            let idx = StarTint::ALL.iter().position(|t| *t == tint).unwrap();
            counts[idx] += 1;
        }
        let freq = |i: usize| counts[i] as f32 / draws as f32;
        assert!((freq(0) - 0.70).abs() < 0.02, "cool white: {}", freq(0));
        assert!((freq(1) - 0.18).abs() < 0.02, "cyan: {}", freq(1));
        assert!((freq(2) - 0.08).abs() < 0.02, "blue white: {}", freq(2));
        assert!((freq(3) - 0.04).abs() < 0.02, "gold: {}", freq(3));
    }

    #[test]
    fn rgba_carries_channels_and_alpha() {
        let c = StarTint::Gold.rgba(0.5);
        assert_eq!((c.r, c.g, c.b), (245, 197, 66));
        assert_eq!(c.a, 0.5);
        assert_eq!(StarTint::Cyan.rgba(1.0).css(), "rgba(58,240,224,1)");
    }
}
