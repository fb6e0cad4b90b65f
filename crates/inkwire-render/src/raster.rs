//! Software raster surface.
//!
//! Mirrors the DOM canvas backing store in plain memory: device-pixel RGBA
//! storage sized `client * dpr`, a uniform scale so drawing happens in
//! CSS-pixel units, and the same capture/reassign/repaint behavior on
//! resize. Used by the test suite and by headless embeddings; the geometry
//! invariants verified here are the ones the DOM surface relies on.

use crate::color::{parse_css_color, Rgba};
use inkwire_core::surface::{Surface, LINE_WIDTH};
use kurbo::Point;

/// In-memory RGBA backing store with DPR-aware geometry.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    client_width: f64,
    client_height: f64,
    dpr: f64,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    /// Current drawing transform: device pixels per CSS pixel.
    scale: f64,
    line_width: f64,
    stroke_color: Rgba,
}

impl RasterSurface {
    /// Create a surface with the given CSS client size and device pixel
    /// ratio. The backing store stays empty until the first [`resize`]
    /// (bootstrap performs one), matching a freshly appended canvas.
    ///
    /// [`resize`]: Surface::resize
    pub fn new(client_width: f64, client_height: f64, dpr: f64) -> Self {
        Self {
            client_width,
            client_height,
            dpr,
            width: 0,
            height: 0,
            pixels: Vec::new(),
            scale: 1.0,
            line_width: LINE_WIDTH,
            stroke_color: [0, 0, 0, 255],
        }
    }

    /// Override the stroke width in CSS pixels.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Simulate a CSS layout change.
    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.client_width = width;
        self.client_height = height;
    }

    /// Simulate a `devicePixelRatio` change (e.g. a monitor move).
    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = dpr;
    }

    /// Backing store width in device pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Backing store height in device pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// CSS client width.
    pub fn client_width(&self) -> f64 {
        self.client_width
    }

    /// CSS client height.
    pub fn client_height(&self) -> f64 {
        self.client_height
    }

    /// The raw RGBA buffer, row-major in device pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one device pixel. Out-of-range coordinates read as blank.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let offset = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }

    /// Whether any pixel in the device-space rectangle has been painted.
    pub fn region_has_ink(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> bool {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                if self.pixel(x, y)[3] != 0 {
                    return true;
                }
            }
        }
        false
    }

    fn effective_dpr(&self) -> f64 {
        if self.dpr > 0.0 { self.dpr } else { 1.0 }
    }

    fn put_pixel(&mut self, x: u32, y: u32) {
        let offset = ((y * self.width + x) * 4) as usize;
        self.pixels[offset..offset + 4].copy_from_slice(&self.stroke_color);
    }
}

impl Surface for RasterSurface {
    fn draw_segment(&mut self, start: Point, end: Point, color: &str) {
        // An unparseable color leaves the prior stroke color in effect,
        // like an invalid `strokeStyle` assignment.
        if let Some(rgba) = parse_css_color(color) {
            self.stroke_color = rgba;
        }
        if self.width == 0 || self.height == 0 {
            return;
        }

        let s = self.scale;
        let (x0, y0) = (start.x * s, start.y * s);
        let (x1, y1) = (end.x * s, end.y * s);
        let half = self.line_width * s / 2.0;

        let min_x = (x0.min(x1) - half).floor().max(0.0) as u32;
        let min_y = (y0.min(y1) - half).floor().max(0.0) as u32;
        let max_x = ((x0.max(x1) + half).ceil() as u32).min(self.width.saturating_sub(1));
        let max_y = ((y0.max(y1) + half).ceil() as u32).min(self.height.saturating_sub(1));

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at the pixel center; the distance metric to the
                // closed segment gives round caps.
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                if segment_distance(px, py, x0, y0, x1, y1) <= half {
                    self.put_pixel(x, y);
                }
            }
        }
    }

    fn resize(&mut self) {
        // Transform back to identity so the store is addressed in device
        // pixels during the capture.
        self.scale = 1.0;

        let dpr = self.effective_dpr();
        let w = (self.client_width.max(0.0) * dpr) as u32;
        let h = (self.client_height.max(0.0) * dpr) as u32;
        if w == 0 || h == 0 {
            return;
        }

        if (w, h) != (self.width, self.height) {
            log::debug!(
                "backing store {}x{} -> {}x{} (dpr {dpr})",
                self.width,
                self.height,
                w,
                h
            );
            // Reassigning the store clears it; repaint the captured pixels
            // at the origin so content survives within the overlap.
            let mut next = vec![0u8; (w as usize) * (h as usize) * 4];
            let copy_w = (w.min(self.width) as usize) * 4;
            for row in 0..h.min(self.height) as usize {
                let src = row * (self.width as usize) * 4;
                let dst = row * (w as usize) * 4;
                next[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
            }
            self.pixels = next;
            self.width = w;
            self.height = h;
        }

        // Uniform DPR scale: 1 drawing unit = 1 CSS pixel from here on.
        // Stroke width stays in CSS pixels and round caps are inherent in
        // the rasterizer, so the stroke defaults hold.
        self.scale = dpr;
    }
}

/// Distance from `(px, py)` to the closed segment `(x0, y0)-(x1, y1)`.
fn segment_distance(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - x0) * dx + (py - y0) * dy) / len2).clamp(0.0, 1.0)
    };
    let cx = x0 + t * dx;
    let cy = y0 + t * dy;
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwire_core::Whiteboard;

    #[test]
    fn test_resize_sizes_store_in_device_pixels() {
        let mut surface = RasterSurface::new(300.0, 200.0, 2.0);
        surface.resize();
        assert_eq!(surface.width(), 600);
        assert_eq!(surface.height(), 400);
    }

    #[test]
    fn test_css_coordinates_map_through_dpr() {
        let mut surface = RasterSurface::new(300.0, 200.0, 2.0);
        surface.resize();

        let p = Point::new(100.0, 50.0);
        surface.draw_segment(p, p, "black");

        // CSS (100, 50) at DPR 2 lands centered on device pixel (200, 100).
        assert_eq!(surface.pixel(200, 100), [0, 0, 0, 255]);
        // 5 CSS px wide at DPR 2 -> 10 device px; well clear of the stroke.
        assert_eq!(surface.pixel(220, 100)[3], 0);
        assert_eq!(surface.pixel(200, 120)[3], 0);
    }

    #[test]
    fn test_resize_preserves_overlap() {
        let mut surface = RasterSurface::new(300.0, 200.0, 1.0);
        surface.resize();
        surface.draw_segment(Point::new(10.0, 10.0), Point::new(50.0, 10.0), "red");
        assert!(surface.region_has_ink(10, 5, 50, 15));

        surface.set_client_size(400.0, 300.0);
        surface.resize();
        assert_eq!(surface.width(), 400);
        assert!(surface.region_has_ink(10, 5, 50, 15));
    }

    #[test]
    fn test_shrink_keeps_content_inside_overlap() {
        let mut surface = RasterSurface::new(300.0, 200.0, 1.0);
        surface.resize();
        surface.draw_segment(Point::new(20.0, 20.0), Point::new(20.0, 20.0), "green");
        surface.draw_segment(Point::new(250.0, 20.0), Point::new(250.0, 20.0), "green");

        surface.set_client_size(100.0, 200.0);
        surface.resize();
        assert!(surface.region_has_ink(15, 15, 26, 26));
        // The right-hand dot was outside the new store entirely.
        assert_eq!(surface.width(), 100);
    }

    #[test]
    fn test_resize_with_zero_client_size_is_noop() {
        let mut surface = RasterSurface::new(0.0, 0.0, 2.0);
        surface.resize();
        assert_eq!(surface.width(), 0);
        assert_eq!(surface.height(), 0);

        // Drawing before the store exists must not panic.
        surface.draw_segment(Point::new(1.0, 1.0), Point::new(2.0, 2.0), "black");
    }

    #[test]
    fn test_unchanged_size_does_not_clear() {
        let mut surface = RasterSurface::new(100.0, 100.0, 1.0);
        surface.resize();
        surface.draw_segment(Point::new(50.0, 50.0), Point::new(50.0, 50.0), "black");

        surface.resize();
        assert_eq!(surface.pixel(50, 50), [0, 0, 0, 255]);
    }

    #[test]
    fn test_zero_dpr_treated_as_one() {
        let mut surface = RasterSurface::new(120.0, 80.0, 0.0);
        surface.resize();
        assert_eq!(surface.width(), 120);
        assert_eq!(surface.height(), 80);
    }

    #[test]
    fn test_malformed_color_keeps_prior_color() {
        let mut surface = RasterSurface::new(100.0, 100.0, 1.0);
        surface.resize();
        surface.draw_segment(Point::new(10.0, 10.0), Point::new(10.0, 10.0), "red");
        surface.draw_segment(Point::new(60.0, 60.0), Point::new(60.0, 60.0), "no-such-color");

        assert_eq!(surface.pixel(10, 10), [255, 0, 0, 255]);
        assert_eq!(surface.pixel(60, 60), [255, 0, 0, 255]);
    }

    #[test]
    fn test_dpr_change_rescales_on_next_resize() {
        let mut surface = RasterSurface::new(100.0, 100.0, 1.0);
        surface.resize();
        assert_eq!(surface.width(), 100);

        surface.set_device_pixel_ratio(2.0);
        surface.resize();
        assert_eq!(surface.width(), 200);

        // Drawing still addresses CSS pixels after the rescale.
        surface.draw_segment(Point::new(25.0, 25.0), Point::new(25.0, 25.0), "black");
        assert_eq!(surface.pixel(50, 50), [0, 0, 0, 255]);
    }

    #[test]
    fn test_line_width_override() {
        let mut surface = RasterSurface::new(100.0, 100.0, 1.0).with_line_width(1.0);
        surface.resize();
        let center = Point::new(50.5, 50.5);
        surface.draw_segment(center, center, "black");

        assert_eq!(surface.pixel(50, 50), [0, 0, 0, 255]);
        // A 5px stroke would reach this pixel; a 1px stroke does not.
        assert_eq!(surface.pixel(52, 50)[3], 0);
    }

    #[test]
    fn test_remote_injection_renders_through_board() {
        let mut surface = RasterSurface::new(200.0, 200.0, 1.0);
        surface.resize();
        let mut board = Whiteboard::new(surface);

        board.apply_remote(Point::new(30.0, 30.0), Point::new(80.0, 30.0), "purple");
        assert!(board.surface().region_has_ink(30, 25, 80, 35));
    }
}
