//! Replays the simulation's draw plan on a 2D canvas context.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use warpfield_engine::{DrawList, DrawOp, Rgba, Viewport};

/// Thin painting layer over `CanvasRenderingContext2d`. Holds no
/// simulation state, only the context and the surface extent needed for
/// full-canvas fills.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d, viewport: Viewport) -> Self {
        Self { ctx, viewport }
    }

    /// Keep the painter's idea of the surface in sync with the canvas.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Replay one tick's draw plan in list order.
    pub fn paint(&self, list: &DrawList) {
        for op in list {
            match op {
                DrawOp::Fade { color } => self.fill_surface(&color.css()),
                DrawOp::Glow {
                    center,
                    radius,
                    inner,
                    outer,
                } => {
                    if let Ok(grad) =
                        self.glow_gradient(center.x as f64, center.y as f64, *radius as f64, inner, outer)
                    {
                        self.ctx.set_fill_style_canvas_gradient(&grad);
                        self.ctx.fill_rect(
                            0.0,
                            0.0,
                            self.viewport.width as f64,
                            self.viewport.height as f64,
                        );
                    }
                }
                DrawOp::Trail {
                    from,
                    to,
                    width,
                    color,
                } => {
                    self.ctx.set_stroke_style_str(&color.css());
                    self.ctx.set_line_width(*width as f64);
                    self.ctx.begin_path();
                    self.ctx.move_to(from.x as f64, from.y as f64);
                    self.ctx.line_to(to.x as f64, to.y as f64);
                    self.ctx.stroke();
                }
                DrawOp::Dot {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.begin_path();
                    // arc() only errs on negative radii, which the
                    // size floor rules out.
                    let _ = self
                        .ctx
                        .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                    self.ctx.fill();
                }
            }
        }
    }

    /// One opaque fill in the given color. Used when frames resume after
    /// a pause, so stale streaks never flash back in.
    pub fn blank(&self, color: Rgba) {
        self.fill_surface(&color.with_alpha(1.0).css());
    }

    fn fill_surface(&self, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn glow_gradient(
        &self,
        cx: f64,
        cy: f64,
        radius: f64,
        inner: &Rgba,
        outer: &Rgba,
    ) -> Result<CanvasGradient, JsValue> {
        let grad = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, radius)?;
        grad.add_color_stop(0.0, &inner.css())?;
        grad.add_color_stop(1.0, &outer.css())?;
        Ok(grad)
    }
}
