//! Surface implementations for the Inkwire whiteboard.
//!
//! [`RasterSurface`] is a software backing store with the same DPR geometry
//! as the browser canvas; it backs the test suite and headless embeddings.
//! [`Canvas2dSurface`] is the real DOM surface and only exists on wasm.

pub mod color;
pub mod raster;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use raster::RasterSurface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::{Canvas2dSurface, SurfaceError};
