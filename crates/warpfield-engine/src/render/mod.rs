//! Typed draw plan handed to the host painter.
//!
//! The simulation never touches a canvas. Each tick it rebuilds a
//! `DrawList` of primitive commands, and the web layer replays them on
//! a 2D context. Ordering in the list is the paint order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An sRGB color with straight alpha, in the form the canvas API takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string for fill and stroke styles.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// One drawing command for the hero canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Translucent full-surface fill. Lets the previous frame bleed
    /// through, which is what turns per-tick dots into streaks.
    Fade { color: Rgba },
    /// Radial glow anchored on the canvas center.
    Glow {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
    /// Motion streak from last tick's projection to this tick's.
    Trail {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    /// The star itself.
    Dot {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

/// Per-tick list of draw commands. Owned by the simulation and reused
/// across ticks so steady-state frames allocate nothing.
#[derive(Debug, Default)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            ops: Vec::with_capacity(cap),
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawOp;
    type IntoIter = std::slice::Iter<'a, DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
