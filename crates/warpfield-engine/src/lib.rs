pub mod config;
pub mod core;
pub mod field;
pub mod render;
pub mod ui;

// Re-export key types at crate root for convenience
pub use crate::config::WarpConfig;
pub use crate::core::rng::Rng;
pub use crate::core::timestep::FrameTimestep;
pub use crate::core::viewport::Viewport;
pub use crate::field::{SpeedRamp, Star, StarTint, Starfield};
pub use crate::render::{DrawList, DrawOp, Rgba};
pub use crate::ui::{Accordion, RevealSet};
