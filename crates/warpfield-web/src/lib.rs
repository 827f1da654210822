//! Browser bridge for the warpfield hero animation.
//!
//! The engine crate computes everything headlessly; this crate owns the
//! DOM: canvas painting, `requestAnimationFrame` scheduling, scroll and
//! resize listeners, the visibility observer, and the two peripheral
//! behaviors (scroll reveals and the FAQ accordion).

pub mod hero;
pub mod page;
pub mod painter;
pub mod runner;

pub use hero::Hero;
pub use painter::CanvasPainter;
pub use runner::HeroRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use warpfield_engine::WarpConfig;

/// Everything a mounted page owns. Dropping it unhooks every listener
/// and observer the mount installed.
pub struct Mounted {
    hero: Option<hero::Hero>,
    _reveal: Option<page::Reveal>,
    _faq: Option<page::Faq>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = RefCell::new(None);
}

/// Attach all page behaviors: the hero canvas animation, the scroll
/// reveals, and the FAQ accordion. Each piece is optional and skipped
/// silently when its markup is absent. A second call unmounts the first
/// wiring before installing the new one.
pub fn mount(config: WarpConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document")?;

    // Drop the previous wiring first so its listeners are gone before
    // the new ones attach.
    MOUNTED.with(|cell| cell.borrow_mut().take());

    let mounted = Mounted {
        hero: hero::Hero::mount(&document, config)?,
        _reveal: page::mount_reveal(&document)?,
        _faq: page::mount_faq(&document)?,
    };
    MOUNTED.with(|cell| {
        *cell.borrow_mut() = Some(mounted);
    });
    log::info!("warpfield: page mounted");
    Ok(())
}

/// Detach everything `mount` installed.
pub fn unmount() {
    let previous = MOUNTED.with(|cell| cell.borrow_mut().take());
    if previous.is_some() {
        log::info!("warpfield: page unmounted");
    }
}

fn init_console() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

// ---- wasm exports for host pages that load this crate directly ----

/// Mount with the stock page configuration.
#[wasm_bindgen]
pub fn hero_mount() -> Result<(), JsValue> {
    init_console();
    mount(WarpConfig::default())
}

/// Mount with JSON overrides for the stock configuration.
#[wasm_bindgen]
pub fn hero_mount_with(config_json: &str) -> Result<(), JsValue> {
    init_console();
    let config = WarpConfig::from_json(config_json)
        .map_err(|err| JsValue::from_str(&format!("bad warp config: {err}")))?;
    mount(config)
}

/// Tear down everything the mount installed.
#[wasm_bindgen]
pub fn hero_unmount() {
    unmount();
}

/// Stop hero frames until `hero_resume` or the hero scrolls back in.
#[wasm_bindgen]
pub fn hero_pause() {
    MOUNTED.with(|cell| {
        if let Some(mounted) = cell.borrow().as_ref() {
            if let Some(hero) = mounted.hero.as_ref() {
                hero.pause();
            }
        }
    });
}

/// Restart hero frames after an explicit `hero_pause`.
#[wasm_bindgen]
pub fn hero_resume() -> Result<(), JsValue> {
    MOUNTED.with(|cell| {
        if let Some(mounted) = cell.borrow().as_ref() {
            if let Some(hero) = mounted.hero.as_ref() {
                return hero.resume();
            }
        }
        Ok(())
    })
}
