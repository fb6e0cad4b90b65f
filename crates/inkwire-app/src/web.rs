//! WebAssembly entry point.

use inkwire_core::BoardConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::{self, WhiteboardHandle};

/// Mount a widget with the stock configuration and return its handle.
///
/// Exported for embedders that bootstrap themselves; the automatic entry
/// point below also publishes a handle at `window.inkwire`.
#[wasm_bindgen(js_name = mount)]
pub fn mount_default() -> Result<WhiteboardHandle, JsValue> {
    app::mount(BoardConfig::default())
}

/// Initialize and mount the widget when the module loads.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting Inkwire (WASM)");

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Mount immediately when the document is already parsed, otherwise wait
    // for DOMContentLoaded.
    if document.ready_state() == "loading" {
        let onready = Closure::once(|| {
            if let Err(err) = mount_and_publish() {
                log::error!("mount failed: {err:?}");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", onready.as_ref().unchecked_ref())?;
        onready.forget();
    } else {
        mount_and_publish()?;
    }

    Ok(())
}

/// Mount the widget and publish its handle at `window.inkwire` for the
/// transport.
fn mount_and_publish() -> Result<(), JsValue> {
    let handle = app::mount(BoardConfig::default())?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    js_sys::Reflect::set(
        &JsValue::from(window),
        &JsValue::from_str("inkwire"),
        &handle.into(),
    )?;
    Ok(())
}
