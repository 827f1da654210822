use wasm_bindgen::prelude::*;

use warpfield_engine::WarpConfig;

/// Mount the whole page as soon as the module loads. The demo page uses
/// the stock tuning with a slightly larger desktop pool to show off the
/// JSON-free override path.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = WarpConfig {
        desktop_stars: 900,
        ..WarpConfig::default()
    };
    warpfield_web::mount(config)?;
    log::info!("hero-landing: ready");
    Ok(())
}
