//! Inkwire Application Shell
//!
//! DOM bootstrap, the color-selector widget, and the JS-facing whiteboard
//! API for the browser build. The shell only exists on wasm; the logic it
//! wires together lives in `inkwire-core` and `inkwire-render`.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod selector;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use app::{mount, WhiteboardHandle};
#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
