//! DOM canvas surface backed by `CanvasRenderingContext2d`.

use inkwire_core::surface::{Surface, LINE_WIDTH};
use kurbo::Point;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Surface initialization errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("initialization failed: {0}")]
    InitFailed(String),
}

/// The browser canvas backing store and its 2D drawing context.
///
/// Constructing the surface acquires the context up front, so a surface in
/// hand always has one and `draw_segment` before initialization cannot
/// happen.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    line_width: f64,
}

impl Canvas2dSurface {
    /// Acquire the 2D context of `canvas` with the default stroke width.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        Self::with_line_width(canvas, LINE_WIDTH)
    }

    /// Acquire the 2D context of `canvas` with a custom stroke width.
    pub fn with_line_width(
        canvas: HtmlCanvasElement,
        line_width: f64,
    ) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::InitFailed(format!("{e:?}")))?
            .ok_or_else(|| SurfaceError::InitFailed("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::InitFailed("not a 2d context".to_string()))?;
        Ok(Self {
            canvas,
            ctx,
            line_width,
        })
    }

    /// The canvas element this surface draws into.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn device_pixel_ratio() -> f64 {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        if dpr > 0.0 { dpr } else { 1.0 }
    }
}

impl Surface for Canvas2dSurface {
    fn draw_segment(&mut self, start: Point, end: Point, color: &str) {
        // An independent path per segment: color changes apply immediately
        // and successive segments are not joined.
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.move_to(start.x, start.y);
        self.ctx.line_to(end.x, end.y);
        self.ctx.close_path();
        self.ctx.stroke();
    }

    fn resize(&mut self) {
        // Identity transform so the capture below reads device pixels.
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

        let dpr = Self::device_pixel_ratio();
        let client_width = self.canvas.client_width();
        let client_height = self.canvas.client_height();
        if client_width <= 0 || client_height <= 0 {
            return;
        }

        let w = (client_width as f64 * dpr) as u32;
        let h = (client_height as f64 * dpr) as u32;
        if (w, h) != (self.canvas.width(), self.canvas.height()) {
            log::debug!(
                "backing store {}x{} -> {w}x{h} (dpr {dpr})",
                self.canvas.width(),
                self.canvas.height()
            );
            // Reassigning width/height clears the store; capture first and
            // repaint at the origin. A zero-sized store has nothing to
            // capture and getImageData rejects it, hence the `ok()`.
            let snapshot = self
                .ctx
                .get_image_data(
                    0.0,
                    0.0,
                    self.canvas.width() as f64,
                    self.canvas.height() as f64,
                )
                .ok();
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            if let Some(data) = snapshot {
                let _ = self.ctx.put_image_data(&data, 0.0, 0.0);
            }
        }

        // Uniform DPR scale: 1 drawing unit = 1 CSS pixel from here on.
        let _ = self.ctx.scale(dpr, dpr);
        self.ctx.set_line_width(self.line_width);
        self.ctx.set_line_join("round");
        self.ctx.set_line_cap("round");
    }
}
