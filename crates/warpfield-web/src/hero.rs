//! Hero canvas wiring: sizing, frame scheduling, scroll and resize
//! listeners, and the visibility observer that pauses frames while the
//! hero is off screen.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use warpfield_engine::{Starfield, Viewport, WarpConfig};

use crate::painter::CanvasPainter;
use crate::runner::HeroRunner;

/// Ids baked into the page structure.
pub const HERO_ID: &str = "hero";
pub const CANVAS_ID: &str = "hero-canvas";

/// Any sliver of the hero keeps frames running.
const VISIBILITY_THRESHOLD: f64 = 0.01;

type SharedRunner = Rc<RefCell<HeroRunner>>;
/// The frame closure hands itself back to `requestAnimationFrame`, so
/// it lives in a shared cell it can reach from inside its own body.
type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A mounted hero animation. Owns the runner and every JS-side callback
/// wired to it; dropping unhooks all of them.
pub struct Hero {
    runner: SharedRunner,
    frame_cb: FrameCell,
    scroll_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
    visibility: IntersectionObserver,
    _visibility_cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Hero {
    /// Wire the animation to `#hero` / `#hero-canvas`. Pages without a
    /// hero section get a silent no-op.
    pub fn mount(document: &Document, config: WarpConfig) -> Result<Option<Hero>, JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        let Some(hero_el) = document.get_element_by_id(HERO_ID) else {
            log::debug!("warpfield: no #{} element, skipping", HERO_ID);
            return Ok(None);
        };
        let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
            log::debug!("warpfield: no #{} element, skipping", CANVAS_ID);
            return Ok(None);
        };
        let hero_el: HtmlElement = hero_el.dyn_into()?;
        let canvas: HtmlCanvasElement = canvas_el.dyn_into()?;

        let (width, height) = fit_canvas(&hero_el, &canvas);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into()?;

        // Pool size keys off the window, not the canvas: a narrow
        // window means a phone even when the hero itself is small.
        let window_width = window.inner_width()?.as_f64().unwrap_or(f64::from(width)) as f32;
        let viewport = Viewport::new(width, height);
        let seed = js_sys::Date::now() as u64;
        let field = Starfield::new(config, viewport, window_width, seed);
        log::info!(
            "warpfield: {} stars on {}x{} canvas",
            field.stars.len(),
            width,
            height
        );

        let painter = CanvasPainter::new(ctx, viewport);
        let runner: SharedRunner = Rc::new(RefCell::new(HeroRunner::new(field, painter)));

        let frame_cb: FrameCell = Rc::new(RefCell::new(None));
        install_frame_callback(&runner, &frame_cb);

        let scroll_cb: Closure<dyn FnMut()> = {
            let runner = Rc::clone(&runner);
            Closure::new(move || {
                if let Some(window) = web_sys::window() {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    runner.borrow_mut().on_scroll(offset as f32);
                }
            })
        };
        let scroll_opts = AddEventListenerOptions::new();
        scroll_opts.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            scroll_cb.as_ref().unchecked_ref(),
            &scroll_opts,
        )?;

        let resize_cb: Closure<dyn FnMut()> = {
            let runner = Rc::clone(&runner);
            let hero_el = hero_el.clone();
            let canvas = canvas.clone();
            Closure::new(move || {
                let (width, height) = fit_canvas(&hero_el, &canvas);
                runner.borrow_mut().resize(width, height);
            })
        };
        window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

        let visibility_cb = visibility_callback(&runner, &frame_cb);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let visibility =
            IntersectionObserver::new_with_options(visibility_cb.as_ref().unchecked_ref(), &init)?;
        visibility.observe(&hero_el);

        // First frame. The observer's initial report finds the handle
        // already set and leaves it alone.
        let id = request_frame(&frame_cb)?;
        runner.borrow_mut().set_raf(Some(id));

        Ok(Some(Hero {
            runner,
            frame_cb,
            scroll_cb,
            resize_cb,
            visibility,
            _visibility_cb: visibility_cb,
        }))
    }

    /// Stop scheduling frames, regardless of hero visibility.
    pub fn pause(&self) {
        pause(&self.runner);
    }

    /// Resume frames after an explicit `pause`.
    pub fn resume(&self) -> Result<(), JsValue> {
        resume(&self.runner, &self.frame_cb)
    }
}

impl Drop for Hero {
    fn drop(&mut self) {
        pause(&self.runner);
        self.visibility.disconnect();
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.scroll_cb.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
        // The frame closure holds an Rc back to its own cell. Clearing
        // the cell breaks the cycle.
        *self.frame_cb.borrow_mut() = None;
    }
}

/// Match the canvas backing store to the hero's layout size.
fn fit_canvas(hero: &HtmlElement, canvas: &HtmlCanvasElement) -> (f32, f32) {
    let width = hero.offset_width().max(0) as u32;
    let height = hero.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f32, height as f32)
}

/// Build the self-rescheduling frame closure into `cell`.
fn install_frame_callback(runner: &SharedRunner, cell: &FrameCell) {
    let runner = Rc::clone(runner);
    let cell_handle = Rc::clone(cell);
    *cell.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let mut runner = runner.borrow_mut();
        runner.frame(now_ms);
        if runner.is_visible() {
            runner.set_raf(request_frame(&cell_handle).ok());
        } else {
            runner.set_raf(None);
        }
    }));
}

fn request_frame(cell: &FrameCell) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let cb = cell.borrow();
    let cb = cb.as_ref().ok_or("frame callback gone")?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())
}

fn visibility_callback(
    runner: &SharedRunner,
    cell: &FrameCell,
) -> Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> {
    let runner = Rc::clone(runner);
    let cell = Rc::clone(cell);
    Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                if let Err(err) = resume(&runner, &cell) {
                    log::warn!("warpfield: resume failed: {:?}", err);
                }
            } else {
                pause(&runner);
            }
        }
    })
}

fn pause(runner: &SharedRunner) {
    let mut runner = runner.borrow_mut();
    runner.set_visible(false);
    if let Some(id) = runner.take_raf() {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

fn resume(runner: &SharedRunner, cell: &FrameCell) -> Result<(), JsValue> {
    let mut runner = runner.borrow_mut();
    runner.set_visible(true);
    if runner.raf_id().is_none() {
        // Repaint opaquely and restart the clock, so neither the pause
        // duration nor stale streaks carry into the first new frame.
        runner.reset_clock();
        runner.clear_backdrop();
        let id = request_frame(cell)?;
        runner.set_raf(Some(id));
    }
    Ok(())
}
