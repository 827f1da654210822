//! Frame loop state for the mounted hero animation.

use warpfield_engine::{FrameTimestep, Starfield};

use crate::painter::CanvasPainter;

/// Simulation tick length. The page animates at a logical 60 Hz no
/// matter what the display refreshes at.
const SIM_DT: f32 = 1.0 / 60.0;

/// Owns one canvas worth of animation: the field, the painter, and the
/// bookkeeping that ties both to `requestAnimationFrame`.
///
/// The DOM wiring in `hero` creates a `HeroRunner` behind
/// `Rc<RefCell<...>>` and shares it between the frame callback, the
/// event listeners, and the visibility observer.
pub struct HeroRunner {
    field: Starfield,
    timestep: FrameTimestep,
    painter: CanvasPainter,
    /// Timestamp of the previous frame callback, if any.
    last_ts: Option<f64>,
    /// Pending `requestAnimationFrame` handle while scheduled.
    raf_id: Option<i32>,
    /// Mirror of the hero's intersection state. Frames only reschedule
    /// while this is set.
    visible: bool,
}

impl HeroRunner {
    pub fn new(field: Starfield, painter: CanvasPainter) -> Self {
        let timestep = FrameTimestep::new(SIM_DT);
        log::debug!("hero runner: {:.0} Hz simulation", 1.0 / timestep.dt());
        Self {
            field,
            timestep,
            painter,
            last_ts: None,
            raf_id: None,
            visible: true,
        }
    }

    /// One `requestAnimationFrame` callback: turn the elapsed wall time
    /// into whole simulation ticks and paint after each, so the fade
    /// layering thickens exactly once per tick.
    pub fn frame(&mut self, now_ms: f64) {
        let dt = match self.last_ts {
            Some(prev) => ((now_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ts = Some(now_ms);

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.field.step();
            self.painter.paint(&self.field.draw_list);
        }
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.field.on_scroll(offset);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
        self.painter.set_viewport(self.field.viewport);
    }

    /// Repaint the backdrop opaquely, dropping accumulated streaks.
    pub fn clear_backdrop(&self) {
        self.painter.blank(self.field.config.fade);
    }

    /// Forget the previous timestamp so the next frame sees no elapsed
    /// time instead of the whole pause.
    pub fn reset_clock(&mut self) {
        self.last_ts = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn raf_id(&self) -> Option<i32> {
        self.raf_id
    }

    pub fn set_raf(&mut self, id: Option<i32>) {
        self.raf_id = id;
    }

    pub fn take_raf(&mut self) -> Option<i32> {
        self.raf_id.take()
    }
}
