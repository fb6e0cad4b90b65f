//! Drawing surface abstraction.

use kurbo::Point;

/// Stroke width reapplied after every resize, in CSS pixels.
pub const LINE_WIDTH: f64 = 5.0;

/// A raster backing store that renders stroke segments.
///
/// Implementations own the device-pixel backing store and keep its logical
/// coordinate system scaled so 1 unit = 1 CSS pixel. Each segment must be
/// rendered as an independent path so per-segment color changes take effect
/// immediately and successive segments are not implicitly joined.
pub trait Surface {
    /// Render a single straight stroke from `start` to `end` in CSS-pixel
    /// coordinates.
    ///
    /// A `color` the rendering context does not accept leaves the previous
    /// stroke color in effect.
    fn draw_segment(&mut self, start: Point, end: Point, color: &str);

    /// Reconcile the backing store with the current CSS size times the
    /// device pixel ratio, preserving existing pixels in the overlap
    /// rectangle.
    ///
    /// A no-op while the surface has zero client dimensions. After return
    /// the logical coordinate system matches CSS pixels and the stroke
    /// defaults (width [`LINE_WIDTH`], round join and cap) are in effect.
    fn resize(&mut self);
}
