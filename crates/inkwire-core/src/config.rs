//! Widget configuration.

use crate::palette::PALETTE;
use crate::surface::LINE_WIDTH;

/// Configuration for one whiteboard widget instance.
///
/// The defaults reproduce the stock widget: the fixed seven-color palette
/// with the first entry preselected, and 5px strokes.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Swatch palette in display order.
    pub palette: Vec<String>,
    /// Stroke width in CSS pixels, reapplied after every resize.
    pub line_width: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
            line_width: LINE_WIDTH,
        }
    }
}
